//! Validation for cross-references between content definitions.

use std::collections::HashSet;

use super::data::DoorRuleDef;
use super::loader::GameContent;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' field '{}': {}",
            self.source_type, self.source_id, self.field, self.message
        )
    }
}

/// Helper macro for checking a level reference exists
macro_rules! check_level_ref {
    ($errors:expr, $known:expr, $source_type:expr, $source_id:expr, $field:expr, $ref_id:expr) => {
        if !$known.contains($ref_id.as_str()) {
            $errors.push(ValidationError {
                source_type: $source_type,
                source_id: $source_id.to_string(),
                field: $field,
                message: format!("references missing level '{}'", $ref_id),
            });
        }
    };
}

/// Validate all cross-references in the loaded content.
/// Returns a list of validation errors, empty if all references are valid.
pub fn validate_content(content: &GameContent) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut known: HashSet<&str> = HashSet::new();
    for level in &content.levels {
        if !known.insert(level.id.as_str()) {
            errors.push(ValidationError {
                source_type: "Level",
                source_id: level.id.clone(),
                field: "id",
                message: "duplicate level id".to_string(),
            });
        }
    }

    if let Some(ref start) = content.config.start_level {
        check_level_ref!(errors, known, "Config", "config", "start_level", start);
    }

    for level in &content.levels {
        if let Some(track) = level.music_track {
            if track >= content.sounds.music_tracks.len() {
                errors.push(ValidationError {
                    source_type: "Level",
                    source_id: level.id.clone(),
                    field: "music_track",
                    message: format!(
                        "track {} out of range, manifest has {}",
                        track,
                        content.sounds.music_tracks.len()
                    ),
                });
            }
        }

        let Some(ref exit) = level.exit else { continue };

        if let Some(ref target) = exit.target {
            check_level_ref!(errors, known, "Level", level.id, "exit.target", target);
        }

        if exit.rule == DoorRuleDef::EnemiesCleared && level.enemies.is_empty() {
            errors.push(ValidationError {
                source_type: "Level",
                source_id: level.id.clone(),
                field: "exit.rule",
                message: "EnemiesCleared door in a level with no enemies".to_string(),
            });
        }

        if let DoorRuleDef::RequiresKeys(needed) = exit.rule {
            if needed == 0 {
                errors.push(ValidationError {
                    source_type: "Level",
                    source_id: level.id.clone(),
                    field: "exit.rule",
                    message: "RequiresKeys(0) should be Always".to_string(),
                });
            }
        }
    }

    for entry in &content.sounds.sounds {
        if entry.clips.is_empty() {
            errors.push(ValidationError {
                source_type: "SoundEntry",
                source_id: format!("{:?}", entry.kind),
                field: "clips",
                message: "no clips registered".to_string(),
            });
        }
    }

    errors
}
