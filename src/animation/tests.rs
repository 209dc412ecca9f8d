use bevy::prelude::*;

use super::{target_animation, AnimationController, AnimationState};

#[test]
fn grounded_picks_idle_or_run_by_speed() {
    assert_eq!(
        target_animation(true, false, Vec2::new(4.0, 0.0)),
        AnimationState::Idle
    );
    assert_eq!(
        target_animation(true, false, Vec2::new(180.0, 0.0)),
        AnimationState::Run
    );
    assert_eq!(
        target_animation(true, false, Vec2::new(-180.0, 0.0)),
        AnimationState::Run
    );
}

#[test]
fn airborne_splits_on_vertical_velocity() {
    assert_eq!(
        target_animation(false, false, Vec2::new(0.0, 250.0)),
        AnimationState::Jump
    );
    assert_eq!(
        target_animation(false, false, Vec2::new(0.0, -250.0)),
        AnimationState::Fall
    );
    // Apex counts as falling
    assert_eq!(
        target_animation(false, false, Vec2::ZERO),
        AnimationState::Fall
    );
}

#[test]
fn wall_slide_wins_over_other_airborne_states() {
    assert_eq!(
        target_animation(false, true, Vec2::new(0.0, -120.0)),
        AnimationState::WallSlide
    );
    assert_eq!(
        target_animation(false, true, Vec2::new(0.0, 50.0)),
        AnimationState::WallSlide
    );
}

#[test]
fn set_state_resets_frame_progress() {
    let mut controller = AnimationController::default();
    controller.current_frame = 3;
    controller.frame_timer = 0.12;

    controller.set_state(AnimationState::Run);

    assert_eq!(controller.state, AnimationState::Run);
    assert_eq!(controller.previous_state, AnimationState::Idle);
    assert_eq!(controller.current_frame, 0);
    assert_eq!(controller.frame_timer, 0.0);
    assert_eq!(controller.total_frames, 6);
    assert!(controller.looping);
}

#[test]
fn set_state_is_a_no_op_for_the_same_state() {
    let mut controller = AnimationController::default();
    controller.current_frame = 2;
    controller.frame_timer = 0.05;

    controller.set_state(AnimationState::Idle);

    assert_eq!(controller.current_frame, 2);
    assert_eq!(controller.frame_timer, 0.05);
}

#[test]
fn airborne_states_do_not_loop() {
    let mut controller = AnimationController::default();

    controller.set_state(AnimationState::Jump);
    assert!(!controller.looping);
    assert_eq!(controller.total_frames, 2);

    controller.set_state(AnimationState::Fall);
    assert!(!controller.looping);

    controller.set_state(AnimationState::WallSlide);
    assert!(controller.looping);
}
