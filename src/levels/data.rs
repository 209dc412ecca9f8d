//! Levels domain: runtime level data model.
//!
//! Content definitions use plain tuples; this is the Vec2 form the spawn
//! and transition systems work with.

use bevy::prelude::*;

use crate::content::{
    BlockDef, CollectibleDef, DoorDef, DoorRuleDef, EnemyDef, LevelDef, SurfaceDef, ZoneDef,
};
use crate::items::ItemKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DoorRule {
    Always,
    RequiresKeys(u32),
    EnemiesCleared,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    Ground,
    Wall,
}

#[derive(Debug, Clone)]
pub struct BlockData {
    pub pos: Vec2,
    pub size: Vec2,
    pub surface: SurfaceKind,
}

#[derive(Debug, Clone)]
pub struct ZoneData {
    pub pos: Vec2,
    pub size: Vec2,
}

#[derive(Debug, Clone)]
pub struct CollectibleData {
    pub pos: Vec2,
    pub kind: ItemKind,
}

#[derive(Debug, Clone)]
pub struct EnemySpawnData {
    pub pos: Vec2,
    pub max_health: f32,
    pub contact_damage: f32,
}

#[derive(Debug, Clone)]
pub struct DoorData {
    pub pos: Vec2,
    pub size: Vec2,
    pub target: Option<String>,
    pub rule: DoorRule,
}

#[derive(Debug, Clone)]
pub struct LevelData {
    pub id: String,
    pub name: String,
    pub size: Vec2,
    pub player_spawn: Vec2,
    pub fall_limit: f32,
    pub decor_seed: u64,
    pub music_track: Option<usize>,
    pub blocks: Vec<BlockData>,
    pub checkpoints: Vec<Vec2>,
    pub collectibles: Vec<CollectibleData>,
    pub enemies: Vec<EnemySpawnData>,
    pub kill_zones: Vec<ZoneData>,
    pub exit: Option<DoorData>,
}

impl LevelData {
    pub fn half_extents(&self) -> Vec2 {
        self.size * 0.5
    }

    /// Seed for the decoration scatter. An explicit nonzero seed wins,
    /// otherwise the id is hashed so layouts stay put across runs.
    pub fn decoration_seed(&self) -> u64 {
        if self.decor_seed != 0 {
            return self.decor_seed;
        }
        fnv1a(self.id.as_bytes())
    }
}

/// FNV-1a over the level id. Stable across runs and platforms, unlike the
/// std hasher.
pub(crate) fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for &byte in bytes {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

// ============================================================================
// Conversions from content definitions
// ============================================================================

fn vec2(pair: (f32, f32)) -> Vec2 {
    Vec2::new(pair.0, pair.1)
}

impl From<&DoorRuleDef> for DoorRule {
    fn from(def: &DoorRuleDef) -> Self {
        match def {
            DoorRuleDef::Always => DoorRule::Always,
            DoorRuleDef::RequiresKeys(n) => DoorRule::RequiresKeys(*n),
            DoorRuleDef::EnemiesCleared => DoorRule::EnemiesCleared,
        }
    }
}

impl From<&SurfaceDef> for SurfaceKind {
    fn from(def: &SurfaceDef) -> Self {
        match def {
            SurfaceDef::Ground => SurfaceKind::Ground,
            SurfaceDef::Wall => SurfaceKind::Wall,
        }
    }
}

impl From<&BlockDef> for BlockData {
    fn from(def: &BlockDef) -> Self {
        Self {
            pos: vec2(def.pos),
            size: vec2(def.size),
            surface: SurfaceKind::from(&def.surface),
        }
    }
}

impl From<&ZoneDef> for ZoneData {
    fn from(def: &ZoneDef) -> Self {
        Self {
            pos: vec2(def.pos),
            size: vec2(def.size),
        }
    }
}

impl From<&CollectibleDef> for CollectibleData {
    fn from(def: &CollectibleDef) -> Self {
        Self {
            pos: vec2(def.pos),
            kind: def.kind,
        }
    }
}

impl From<&EnemyDef> for EnemySpawnData {
    fn from(def: &EnemyDef) -> Self {
        Self {
            pos: vec2(def.pos),
            max_health: def.max_health,
            contact_damage: def.contact_damage,
        }
    }
}

impl From<&DoorDef> for DoorData {
    fn from(def: &DoorDef) -> Self {
        Self {
            pos: vec2(def.pos),
            size: vec2(def.size),
            target: def.target.clone(),
            rule: DoorRule::from(&def.rule),
        }
    }
}

impl From<&LevelDef> for LevelData {
    fn from(def: &LevelDef) -> Self {
        Self {
            id: def.id.clone(),
            name: def.name.clone(),
            size: vec2(def.size),
            player_spawn: vec2(def.player_spawn),
            fall_limit: def.fall_limit,
            decor_seed: def.decor_seed,
            music_track: def.music_track,
            blocks: def.blocks.iter().map(BlockData::from).collect(),
            checkpoints: def.checkpoints.iter().copied().map(vec2).collect(),
            collectibles: def.collectibles.iter().map(CollectibleData::from).collect(),
            enemies: def.enemies.iter().map(EnemySpawnData::from).collect(),
            kill_zones: def.kill_zones.iter().map(ZoneData::from).collect(),
            exit: def.exit.as_ref().map(DoorData::from),
        }
    }
}
