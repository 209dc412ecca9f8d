//! Loader for RON content files at startup.
//!
//! Content problems never crash the game. A missing or malformed file is
//! logged and the built-in defaults stay in place, so the game always has
//! something playable to run.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::data::{DataFile, GameConfigDef, LevelDef, SoundManifestDef};
use super::validation::validate_content;
use crate::movement::MovementTuning;

/// Root directory for data files, relative to the working directory.
const DATA_DIR: &str = "assets/data";

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Load a RON file containing a DataFile<T> wrapper.
pub fn load_data_file<T>(path: &Path) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    let data: DataFile<T> = ron_options().from_str(&contents).map_err(|e| ContentLoadError {
        file: file_name,
        message: format!("RON parse error: {}", e),
    })?;

    Ok(data.items)
}

/// Load a RON file containing a single bare value.
pub fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron_options().from_str(&contents).map_err(|e| ContentLoadError {
        file: file_name,
        message: format!("RON parse error: {}", e),
    })
}

/// Everything loaded from assets/data, with built-in defaults for any file
/// that failed to parse. Consumers read this lazily when building their own
/// runtime structures.
#[derive(Resource, Debug, Default)]
pub struct GameContent {
    pub config: GameConfigDef,
    pub levels: Vec<LevelDef>,
    pub sounds: SoundManifestDef,
}

impl GameContent {
    pub fn summary(&self) -> String {
        format!(
            "Content loaded: {} levels, {} sound kinds, {} music tracks",
            self.levels.len(),
            self.sounds.sounds.len(),
            self.sounds.music_tracks.len(),
        )
    }
}

/// Startup system: read the data files and apply any movement override.
pub(crate) fn load_game_content(
    mut content: ResMut<GameContent>,
    mut tuning: ResMut<MovementTuning>,
) {
    let base = Path::new(DATA_DIR);

    match load_single_file::<GameConfigDef>(&base.join("config.ron")) {
        Ok(config) => content.config = config,
        Err(e) => warn!("{}; keeping built-in config", e),
    }

    match load_data_file::<LevelDef>(&base.join("levels.ron")) {
        Ok(levels) => content.levels = levels,
        Err(e) => warn!("{}; keeping built-in levels", e),
    }

    match load_single_file::<SoundManifestDef>(&base.join("sounds.ron")) {
        Ok(sounds) => content.sounds = sounds,
        Err(e) => warn!("{}; keeping built-in sound manifest", e),
    }

    if let Some(def) = &content.config.movement {
        *tuning = MovementTuning::from(def);
        info!(
            "Movement tuning overridden from config.ron; safe jump rise {:.0} px",
            tuning.safe_reachable_height()
        );
    }

    for issue in validate_content(&content) {
        warn!("Content validation: {}", issue);
    }

    info!("{}", content.summary());
}
