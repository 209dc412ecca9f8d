//! Data-driven content: RON definitions, loading, and validation.

use bevy::prelude::*;

pub mod data;
pub mod loader;
pub mod validation;

#[cfg(test)]
mod tests;

pub use data::{
    BlockDef, CollectibleDef, DataFile, DoorDef, DoorRuleDef, EnemyDef, GameConfigDef, LevelDef,
    MovementTuningDef, SoundEntryDef, SoundManifestDef, SurfaceDef, ZoneDef,
};
pub use loader::{load_data_file, load_single_file, ContentLoadError, GameContent};
pub(crate) use loader::load_game_content;
pub use validation::{validate_content, ValidationError};

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameContent>()
            .add_systems(Startup, loader::load_game_content);
    }
}
