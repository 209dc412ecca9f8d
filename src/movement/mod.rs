//! Movement domain: player controller plugin wiring and public exports.

mod bootstrap;
mod components;
mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{Facing, GameLayer, MovementState, Player, WallSide};
pub use events::{PlayerJumped, PlayerLanded};
pub use resources::{MovementInput, MovementTuning, WORLD_GRAVITY};

pub(crate) use bootstrap::{bootstrap_player, despawn_player};

use bevy::prelude::*;

use crate::core::{gameplay_active, GameState};
use crate::movement::systems::{
    apply_gravity_scale, apply_jump, apply_run, apply_wall_jump, apply_wall_slide, probe_ground,
    probe_walls, read_input, tick_jump_timers, update_facing,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_message::<PlayerJumped>()
            .add_message::<PlayerLanded>()
            .add_systems(OnEnter(GameState::InGame), bootstrap_player)
            .add_systems(OnEnter(GameState::MainMenu), despawn_player)
            .add_systems(
                Update,
                (
                    read_input,
                    probe_ground,
                    probe_walls,
                    tick_jump_timers,
                    apply_run,
                    apply_wall_slide,
                    apply_wall_jump,
                    apply_jump,
                    apply_gravity_scale,
                    update_facing,
                )
                    .chain()
                    .run_if(gameplay_active),
            );
    }
}
