//! Core domain: session states, camera, and pause plumbing.

mod state;
mod systems;

pub use state::{gameplay_active, GameState, PauseState};

use bevy::prelude::*;

use crate::core::systems::{
    finish_boot, follow_player_with_camera, handle_pause_input, pause_clocks, reset_pause_state,
    resume_clocks, setup_camera,
};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_state::<PauseState>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, finish_boot.run_if(in_state(GameState::Boot)))
            .add_systems(Update, handle_pause_input)
            .add_systems(OnEnter(PauseState::Paused), pause_clocks)
            .add_systems(OnExit(PauseState::Paused), resume_clocks)
            .add_systems(OnExit(GameState::InGame), reset_pause_state)
            .add_systems(
                Update,
                follow_player_with_camera.run_if(in_state(GameState::InGame)),
            );
    }
}
