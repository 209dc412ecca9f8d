//! Core domain: session flow systems, camera, and clock control.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::state::{GameState, PauseState};
use crate::levels::LevelBounds;
use crate::movement::Player;

/// Half of the 1280x720 window, in world units.
const HALF_VIEWPORT: Vec2 = Vec2::new(640.0, 360.0);
const CAMERA_FOLLOW_RATE: f32 = 6.0;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Content loading runs at Startup, so one Boot frame is enough.
pub(crate) fn finish_boot(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::MainMenu);
}

pub(crate) fn handle_pause_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    game_state: Res<State<GameState>>,
    pause_state: Res<State<PauseState>>,
    mut next_pause: ResMut<NextState<PauseState>>,
) {
    if *game_state.get() != GameState::InGame {
        return;
    }
    if keyboard.just_pressed(KeyCode::Escape) {
        match pause_state.get() {
            PauseState::Running => {
                info!("Game paused");
                next_pause.set(PauseState::Paused);
            }
            PauseState::Paused => {
                info!("Game resumed");
                next_pause.set(PauseState::Running);
            }
        }
    }
}

pub(crate) fn pause_clocks(
    mut virtual_time: ResMut<Time<Virtual>>,
    mut physics_time: ResMut<Time<Physics>>,
) {
    virtual_time.pause();
    physics_time.pause();
}

pub(crate) fn resume_clocks(
    mut virtual_time: ResMut<Time<Virtual>>,
    mut physics_time: ResMut<Time<Physics>>,
) {
    virtual_time.unpause();
    physics_time.unpause();
}

/// Leaving gameplay always lands in an unpaused state.
pub(crate) fn reset_pause_state(mut next_pause: ResMut<NextState<PauseState>>) {
    next_pause.set(PauseState::Running);
}

/// Eases the camera toward the player, clamped so the view never leaves
/// the level bounds. Axes smaller than the viewport stay centered.
pub(crate) fn follow_player_with_camera(
    time: Res<Time>,
    bounds: Res<LevelBounds>,
    player_query: Query<&Transform, With<Player>>,
    mut camera_query: Query<&mut Transform, (With<Camera2d>, Without<Player>)>,
) {
    let Ok(player_transform) = player_query.single() else {
        return;
    };
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let target = clamp_camera_target(
        player_transform.translation.truncate(),
        bounds.half_extents,
        HALF_VIEWPORT,
    );

    let blend = (CAMERA_FOLLOW_RATE * time.delta_secs()).min(1.0);
    let current = camera_transform.translation.truncate();
    let eased = current + (target - current) * blend;
    camera_transform.translation.x = eased.x;
    camera_transform.translation.y = eased.y;
}

pub(crate) fn clamp_camera_target(target: Vec2, level_half: Vec2, view_half: Vec2) -> Vec2 {
    let clamp_axis = |value: f32, level: f32, view: f32| {
        if level <= view {
            0.0
        } else {
            value.clamp(view - level, level - view)
        }
    };
    Vec2::new(
        clamp_axis(target.x, level_half.x, view_half.x),
        clamp_axis(target.y, level_half.y, view_half.y),
    )
}
