//! Core domain: game state definitions for the session flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    Boot,
    MainMenu,
    InGame,
}

/// Pause is tracked separately from GameState so pausing never tears down
/// the level. Entering Paused freezes the virtual and physics clocks.
#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum PauseState {
    #[default]
    Running,
    Paused,
}

/// Run condition for systems that should only run during unpaused play.
pub fn gameplay_active(
    game_state: Res<State<GameState>>,
    pause_state: Res<State<PauseState>>,
) -> bool {
    *game_state.get() == GameState::InGame && *pause_state.get() == PauseState::Running
}
