//! Data definitions for the RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. The runtime modules convert them into their own
//! types (levels build LevelData, audio builds the SoundLibrary).

use serde::{Deserialize, Serialize};

use crate::audio::SoundKind;
use crate::items::ItemKind;

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Game config (config.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GameConfigDef {
    /// Level id the main menu launches into. None falls back to the first
    /// library level with a warning.
    pub start_level: Option<String>,
    pub player_max_health: f32,
    pub checkpoint_radius: f32,
    /// Full opening angle of the cone above an enemy that counts as a stomp.
    pub stomp_cone_angle_deg: f32,
    pub stomp_bounce_speed: f32,
    pub contact_invuln_seconds: f32,
    pub footstep_interval: f32,
    /// Optional full override of the movement tuning table.
    pub movement: Option<MovementTuningDef>,
}

impl Default for GameConfigDef {
    fn default() -> Self {
        Self {
            start_level: None,
            player_max_health: 30.0,
            checkpoint_radius: 48.0,
            stomp_cone_angle_deg: 100.0,
            stomp_bounce_speed: 420.0,
            contact_invuln_seconds: 0.8,
            footstep_interval: 0.32,
            movement: None,
        }
    }
}

/// Mirrors MovementTuning field for field so designers can retune the
/// controller without touching code.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MovementTuningDef {
    pub max_speed: f32,
    pub accel: f32,
    pub decel: f32,
    pub air_accel_mult: f32,
    pub air_decel_mult: f32,
    pub jump_impulse: f32,
    pub coyote_time: f32,
    pub jump_buffer_time: f32,
    pub extra_jumps: u8,
    pub fast_fall_threshold: f32,
    pub fast_fall_multiplier: f32,
    pub ground_box_offset: (f32, f32),
    pub ground_box_size: (f32, f32),
    pub wall_jump_enabled: bool,
    pub wall_check_distance: f32,
    pub wall_slide_duration: f32,
    pub wall_slide_decel: f32,
    pub wall_slide_min_fall: f32,
    pub max_wall_jumps: u8,
    pub wall_jump_impulse: (f32, f32),
}

// ============================================================================
// Levels (levels.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelDef {
    pub id: String,
    pub name: String,
    /// Full width/height of the level, centered on the origin.
    pub size: (f32, f32),
    pub player_spawn: (f32, f32),
    /// Falling below this y requests a respawn.
    #[serde(default = "default_fall_limit")]
    pub fall_limit: f32,
    /// Seed for decoration scatter. 0 derives a stable seed from the id.
    #[serde(default)]
    pub decor_seed: u64,
    /// Music track to switch to when this level starts. None keeps
    /// whatever is already playing.
    #[serde(default)]
    pub music_track: Option<usize>,
    #[serde(default)]
    pub blocks: Vec<BlockDef>,
    #[serde(default)]
    pub checkpoints: Vec<(f32, f32)>,
    #[serde(default)]
    pub collectibles: Vec<CollectibleDef>,
    #[serde(default)]
    pub enemies: Vec<EnemyDef>,
    #[serde(default)]
    pub kill_zones: Vec<ZoneDef>,
    pub exit: Option<DoorDef>,
}

fn default_fall_limit() -> f32 {
    -2000.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
pub enum SurfaceDef {
    #[default]
    Ground,
    Wall,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BlockDef {
    pub pos: (f32, f32),
    pub size: (f32, f32),
    #[serde(default)]
    pub surface: SurfaceDef,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZoneDef {
    pub pos: (f32, f32),
    pub size: (f32, f32),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CollectibleDef {
    pub pos: (f32, f32),
    pub kind: ItemKind,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EnemyDef {
    pub pos: (f32, f32),
    #[serde(default = "default_enemy_health")]
    pub max_health: f32,
    #[serde(default = "default_contact_damage")]
    pub contact_damage: f32,
}

fn default_enemy_health() -> f32 {
    20.0
}

fn default_contact_damage() -> f32 {
    10.0
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub enum DoorRuleDef {
    #[default]
    Always,
    RequiresKeys(u32),
    EnemiesCleared,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DoorDef {
    pub pos: (f32, f32),
    #[serde(default = "default_door_size")]
    pub size: (f32, f32),
    /// Level id this door leads to. None means the run is complete.
    pub target: Option<String>,
    #[serde(default)]
    pub rule: DoorRuleDef,
}

fn default_door_size() -> (f32, f32) {
    (36.0, 56.0)
}

// ============================================================================
// Sound manifest (sounds.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SoundManifestDef {
    pub play_music_on_start: bool,
    pub music_loop: bool,
    pub music_tracks: Vec<String>,
    pub sounds: Vec<SoundEntryDef>,
}

impl Default for SoundManifestDef {
    fn default() -> Self {
        Self {
            play_music_on_start: true,
            music_loop: true,
            music_tracks: Vec::new(),
            sounds: Vec::new(),
        }
    }
}

/// One sound kind with its pool of clips. Playback picks randomly when a
/// kind has several clips registered.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SoundEntryDef {
    pub kind: SoundKind,
    pub clips: Vec<String>,
}
