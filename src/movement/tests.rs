use super::components::{Facing, MovementState, WallSide};
use super::resources::MovementTuning;
use super::systems::locomotion::{
    jump_allowed, run_rate, wall_jump_allowed, wall_jump_direction, wall_slide_brake,
    wants_fast_fall,
};
use crate::content::MovementTuningDef;

fn airborne_state() -> MovementState {
    MovementState {
        on_ground: false,
        ..Default::default()
    }
}

// ============================================================================
// Tuning
// ============================================================================

#[test]
fn jump_height_follows_impulse() {
    let tuning = MovementTuning::default();
    let height = tuning.single_jump_height();

    // v^2 / 2g with the default impulse and world gravity
    assert!((height - 680.0 * 680.0 / (2.0 * 1400.0)).abs() < 0.01);
    assert_eq!(tuning.max_reachable_height(), height);
    assert!(tuning.safe_reachable_height() < tuning.max_reachable_height());
}

#[test]
fn extra_jumps_extend_reachable_height() {
    let tuning = MovementTuning {
        extra_jumps: 2,
        ..Default::default()
    };

    assert_eq!(
        tuning.max_reachable_height(),
        tuning.single_jump_height() * 3.0
    );
}

#[test]
fn tuning_def_converts_field_for_field() {
    let def = MovementTuningDef {
        max_speed: 250.0,
        accel: 8.0,
        decel: 9.0,
        air_accel_mult: 0.5,
        air_decel_mult: 0.4,
        jump_impulse: 700.0,
        coyote_time: 0.1,
        jump_buffer_time: 0.2,
        extra_jumps: 1,
        fast_fall_threshold: -25.0,
        fast_fall_multiplier: 1.8,
        ground_box_offset: (0.0, -20.0),
        ground_box_size: (18.0, 6.0),
        wall_jump_enabled: true,
        wall_check_distance: 14.0,
        wall_slide_duration: 0.5,
        wall_slide_decel: 800.0,
        wall_slide_min_fall: -50.0,
        max_wall_jumps: 3,
        wall_jump_impulse: (280.0, 560.0),
    };

    let tuning = MovementTuning::from(&def);
    assert_eq!(tuning.max_speed, 250.0);
    assert_eq!(tuning.extra_jumps, 1);
    assert_eq!(tuning.ground_box_offset.y, -20.0);
    assert_eq!(tuning.wall_jump_impulse.x, 280.0);
    assert_eq!(tuning.max_wall_jumps, 3);
}

// ============================================================================
// Run rates
// ============================================================================

#[test]
fn run_rate_keyed_by_ground_and_input() {
    let tuning = MovementTuning::default();

    assert_eq!(run_rate(&tuning, false, true), tuning.accel);
    assert_eq!(run_rate(&tuning, false, false), tuning.decel);
    assert_eq!(
        run_rate(&tuning, true, true),
        tuning.accel * tuning.air_accel_mult
    );
    assert_eq!(
        run_rate(&tuning, true, false),
        tuning.decel * tuning.air_decel_mult
    );
}

// ============================================================================
// Jump gating
// ============================================================================

#[test]
fn jump_needs_coyote_window() {
    let tuning = MovementTuning::default();
    let mut state = airborne_state();

    state.coyote_timer = 0.05;
    assert!(jump_allowed(&state, &tuning));

    state.coyote_timer = 0.0;
    assert!(!jump_allowed(&state, &tuning));
}

#[test]
fn jump_blocked_while_already_jumping() {
    let tuning = MovementTuning::default();
    let mut state = airborne_state();
    state.coyote_timer = 0.1;
    state.is_jumping = true;

    assert!(!jump_allowed(&state, &tuning));
}

#[test]
fn jump_lockout_blocks_every_path() {
    let mut tuning = MovementTuning::default();
    let mut state = airborne_state();
    state.coyote_timer = 0.1;
    state.jump_lockout = 0.05;

    assert!(!jump_allowed(&state, &tuning));

    tuning.extra_jumps = 3;
    assert!(!jump_allowed(&state, &tuning));
}

#[test]
fn extra_jumps_ignore_coyote_until_spent() {
    let tuning = MovementTuning {
        extra_jumps: 2,
        ..Default::default()
    };
    let mut state = airborne_state();
    state.is_jumping = true;

    // Three total jumps: the first plus two extra
    state.jumps_used = 0;
    assert!(jump_allowed(&state, &tuning));
    state.jumps_used = 2;
    assert!(jump_allowed(&state, &tuning));
    state.jumps_used = 3;
    assert!(!jump_allowed(&state, &tuning));
}

// ============================================================================
// Wall jumps
// ============================================================================

#[test]
fn wall_jump_requires_active_slide() {
    let tuning = MovementTuning::default();
    let mut state = airborne_state();

    state.is_wall_sliding = false;
    assert!(!wall_jump_allowed(&state, &tuning));

    state.is_wall_sliding = true;
    assert!(wall_jump_allowed(&state, &tuning));
}

#[test]
fn wall_jump_count_is_unlimited_at_zero() {
    let tuning = MovementTuning {
        max_wall_jumps: 0,
        ..Default::default()
    };
    let mut state = airborne_state();
    state.is_wall_sliding = true;
    state.wall_jumps_used = 200;

    assert!(wall_jump_allowed(&state, &tuning));
}

#[test]
fn wall_jump_count_caps_when_finite() {
    let tuning = MovementTuning {
        max_wall_jumps: 2,
        ..Default::default()
    };
    let mut state = airborne_state();
    state.is_wall_sliding = true;

    state.wall_jumps_used = 1;
    assert!(wall_jump_allowed(&state, &tuning));
    state.wall_jumps_used = 2;
    assert!(!wall_jump_allowed(&state, &tuning));
}

#[test]
fn wall_jump_pushes_away_from_wall() {
    assert_eq!(wall_jump_direction(WallSide::Left), 1.0);
    assert_eq!(wall_jump_direction(WallSide::Right), -1.0);
}

// ============================================================================
// Gravity and wall slide
// ============================================================================

#[test]
fn fast_fall_engages_below_threshold() {
    let tuning = MovementTuning::default();

    assert!(!wants_fast_fall(100.0, false, &tuning));
    assert!(!wants_fast_fall(tuning.fast_fall_threshold, false, &tuning));
    assert!(wants_fast_fall(tuning.fast_fall_threshold - 1.0, false, &tuning));
}

#[test]
fn wall_slide_suppresses_fast_fall() {
    let tuning = MovementTuning::default();

    assert!(!wants_fast_fall(-500.0, true, &tuning));
}

#[test]
fn wall_slide_brake_fades_over_window() {
    let tuning = MovementTuning {
        wall_slide_duration: 1.0,
        wall_slide_decel: 800.0,
        ..Default::default()
    };

    assert_eq!(wall_slide_brake(&tuning, 0.0), 800.0);
    assert_eq!(wall_slide_brake(&tuning, 0.5), 400.0);
    assert_eq!(wall_slide_brake(&tuning, 1.0), 0.0);
    assert_eq!(wall_slide_brake(&tuning, 5.0), 0.0);
}

#[test]
fn wall_slide_brake_handles_zero_duration() {
    let tuning = MovementTuning {
        wall_slide_duration: 0.0,
        ..Default::default()
    };

    assert_eq!(wall_slide_brake(&tuning, 0.0), 0.0);
}

// ============================================================================
// State resets
// ============================================================================

#[test]
fn reset_volatile_keeps_facing() {
    let mut state = MovementState {
        on_ground: true,
        on_wall: true,
        facing: Facing::Left,
        coyote_timer: 0.1,
        jump_lockout: 0.1,
        is_jumping: true,
        jumps_used: 2,
        wall_jumps_used: 3,
        last_wall_jump: Some(WallSide::Right),
        wall_slide_time: 0.4,
        is_wall_sliding: true,
    };

    state.reset_volatile();

    assert_eq!(state.facing, Facing::Left);
    assert!(!state.on_ground);
    assert!(!state.is_jumping);
    assert_eq!(state.jumps_used, 0);
    assert_eq!(state.wall_jumps_used, 0);
    assert!(state.last_wall_jump.is_none());
    assert_eq!(state.wall_slide_time, 0.0);
    assert!(!state.is_wall_sliding);
}
