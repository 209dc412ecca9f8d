use bevy::prelude::*;

use super::menu::chosen_start_level;
use crate::levels::{LevelData, LevelLibrary};

fn library_of(ids: &[&str]) -> LevelLibrary {
    LevelLibrary {
        levels: ids
            .iter()
            .map(|id| LevelData {
                id: id.to_string(),
                name: id.to_string(),
                size: Vec2::new(800.0, 600.0),
                player_spawn: Vec2::ZERO,
                fall_limit: -500.0,
                decor_seed: 0,
                music_track: None,
                blocks: Vec::new(),
                checkpoints: Vec::new(),
                collectibles: Vec::new(),
                enemies: Vec::new(),
                kill_zones: Vec::new(),
                exit: None,
            })
            .collect(),
    }
}

#[test]
fn configured_start_level_is_used_when_known() {
    let library = library_of(&["summit", "ravine"]);
    assert_eq!(
        chosen_start_level(Some("ravine"), &library),
        Some("ravine".to_string())
    );
}

#[test]
fn unknown_start_level_falls_back_to_first() {
    let library = library_of(&["summit", "ravine"]);
    assert_eq!(
        chosen_start_level(Some("missing"), &library),
        Some("summit".to_string())
    );
}

#[test]
fn missing_config_falls_back_to_first() {
    let library = library_of(&["summit"]);
    assert_eq!(chosen_start_level(None, &library), Some("summit".to_string()));
}

#[test]
fn empty_library_yields_no_start_level() {
    let library = library_of(&[]);
    assert_eq!(chosen_start_level(None, &library), None);
    assert_eq!(chosen_start_level(Some("summit"), &library), None);
}
