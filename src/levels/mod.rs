//! Levels domain: authored level layouts, the doors that connect them
//! and the hazards inside them.

mod components;
mod data;
mod events;
mod registry;
mod session;
mod spawn;
mod systems;
mod ui;

#[cfg(test)]
mod tests;

pub use components::{DoorEnabled, DoorGate, KillZone, LevelEntity};
pub use data::{
    BlockData, CollectibleData, DoorData, DoorRule, EnemySpawnData, LevelData, SurfaceKind,
    ZoneData,
};
pub use events::LevelTransition;
pub use registry::LevelLibrary;
pub use session::{CurrentLevel, LevelBounds, PlayerAtDoor, TransitionCooldown};

use bevy::prelude::*;

use crate::core::{gameplay_active, GameState};

pub struct LevelsPlugin;

impl Plugin for LevelsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CurrentLevel>()
            .init_resource::<LevelBounds>()
            .init_resource::<LevelLibrary>()
            .init_resource::<TransitionCooldown>()
            .add_message::<LevelTransition>()
            .add_systems(
                Startup,
                registry::setup_level_library.after(crate::content::load_game_content),
            )
            .add_systems(
                OnEnter(GameState::InGame),
                spawn::spawn_level.after(crate::movement::bootstrap_player),
            )
            .add_systems(
                OnExit(GameState::InGame),
                (spawn::cleanup_level, ui::cleanup_door_tooltip),
            )
            .add_systems(
                Update,
                (
                    systems::tick_transition_cooldown,
                    systems::track_player_door_zone,
                    systems::evaluate_door_rules,
                    systems::confirm_door_entry,
                    systems::resolve_kill_zone_contacts,
                    systems::enforce_fall_limit,
                    ui::update_door_tooltip,
                    systems::process_level_transitions,
                )
                    .chain()
                    .run_if(gameplay_active),
            );
    }
}
