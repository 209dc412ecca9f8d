//! Levels domain: level library and lookup helpers.

use bevy::prelude::*;

use crate::content::GameContent;
use crate::items::ItemKind;
use crate::levels::data::{
    BlockData, CollectibleData, DoorData, DoorRule, EnemySpawnData, LevelData, SurfaceKind,
    ZoneData,
};

/// Available levels, converted from content definitions at startup.
#[derive(Resource, Debug, Default)]
pub struct LevelLibrary {
    pub levels: Vec<LevelData>,
}

impl LevelLibrary {
    pub fn get(&self, id: &str) -> Option<&LevelData> {
        self.levels.iter().find(|level| level.id == id)
    }

    pub fn first_id(&self) -> Option<&str> {
        self.levels.first().map(|level| level.id.as_str())
    }

    /// Next level in library order, wrapping around. Used by the dev warp.
    pub fn next_id_after(&self, id: &str) -> Option<&str> {
        if self.levels.is_empty() {
            return None;
        }
        let index = self.levels.iter().position(|level| level.id == id)?;
        let next = (index + 1) % self.levels.len();
        Some(self.levels[next].id.as_str())
    }

    pub fn summary(&self) -> String {
        let ids: Vec<&str> = self.levels.iter().map(|level| level.id.as_str()).collect();
        format!("Level library: {} levels [{}]", self.levels.len(), ids.join(", "))
    }
}

pub(crate) fn setup_level_library(
    mut library: ResMut<LevelLibrary>,
    content: Res<GameContent>,
) {
    if content.levels.is_empty() {
        error!("No level definitions loaded, falling back to built-in levels");
        library.levels = builtin_levels();
    } else {
        library.levels = content.levels.iter().map(LevelData::from).collect();
    }

    info!("{}", library.summary());
}

/// Minimal hand-built levels so the game stays playable when levels.ron
/// is missing or broken.
pub(crate) fn builtin_levels() -> Vec<LevelData> {
    vec![
        LevelData {
            id: "hollow_approach".to_string(),
            name: "Hollow Approach".to_string(),
            size: Vec2::new(1600.0, 900.0),
            player_spawn: Vec2::new(-680.0, -330.0),
            fall_limit: -700.0,
            decor_seed: 0,
            music_track: None,
            blocks: vec![
                BlockData {
                    pos: Vec2::new(0.0, -410.0),
                    size: Vec2::new(1600.0, 80.0),
                    surface: SurfaceKind::Ground,
                },
                BlockData {
                    pos: Vec2::new(-780.0, 0.0),
                    size: Vec2::new(40.0, 900.0),
                    surface: SurfaceKind::Wall,
                },
                BlockData {
                    pos: Vec2::new(780.0, 0.0),
                    size: Vec2::new(40.0, 900.0),
                    surface: SurfaceKind::Wall,
                },
                BlockData {
                    pos: Vec2::new(-200.0, -250.0),
                    size: Vec2::new(240.0, 24.0),
                    surface: SurfaceKind::Ground,
                },
                BlockData {
                    pos: Vec2::new(180.0, -130.0),
                    size: Vec2::new(220.0, 24.0),
                    surface: SurfaceKind::Ground,
                },
            ],
            checkpoints: vec![Vec2::new(-680.0, -352.0)],
            collectibles: vec![
                CollectibleData {
                    pos: Vec2::new(-200.0, -210.0),
                    kind: ItemKind::Gem,
                },
                CollectibleData {
                    pos: Vec2::new(180.0, -90.0),
                    kind: ItemKind::Gem,
                },
            ],
            enemies: vec![EnemySpawnData {
                pos: Vec2::new(300.0, -357.0),
                max_health: 20.0,
                contact_damage: 10.0,
            }],
            kill_zones: Vec::new(),
            exit: Some(DoorData {
                pos: Vec2::new(700.0, -342.0),
                size: Vec2::new(36.0, 56.0),
                target: Some("hollow_loop".to_string()),
                rule: DoorRule::Always,
            }),
        },
        LevelData {
            id: "hollow_loop".to_string(),
            name: "Hollow Loop".to_string(),
            size: Vec2::new(1400.0, 800.0),
            player_spawn: Vec2::new(-580.0, -280.0),
            fall_limit: -650.0,
            decor_seed: 0,
            music_track: None,
            blocks: vec![
                BlockData {
                    pos: Vec2::new(0.0, -360.0),
                    size: Vec2::new(1400.0, 80.0),
                    surface: SurfaceKind::Ground,
                },
                BlockData {
                    pos: Vec2::new(-680.0, 0.0),
                    size: Vec2::new(40.0, 800.0),
                    surface: SurfaceKind::Wall,
                },
                BlockData {
                    pos: Vec2::new(680.0, 0.0),
                    size: Vec2::new(40.0, 800.0),
                    surface: SurfaceKind::Wall,
                },
                BlockData {
                    pos: Vec2::new(100.0, -180.0),
                    size: Vec2::new(260.0, 24.0),
                    surface: SurfaceKind::Ground,
                },
            ],
            checkpoints: vec![Vec2::new(-580.0, -302.0)],
            collectibles: vec![CollectibleData {
                pos: Vec2::new(100.0, -140.0),
                kind: ItemKind::Gem,
            }],
            enemies: vec![EnemySpawnData {
                pos: Vec2::new(250.0, -307.0),
                max_health: 20.0,
                contact_damage: 10.0,
            }],
            kill_zones: Vec::new(),
            exit: Some(DoorData {
                pos: Vec2::new(600.0, -292.0),
                size: Vec2::new(36.0, 56.0),
                target: None,
                rule: DoorRule::EnemiesCleared,
            }),
        },
    ]
}
