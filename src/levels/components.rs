//! Levels domain: markers for level geometry and interactive entities.

use bevy::prelude::*;

use crate::levels::data::DoorRule;

/// Everything spawned by level spawn carries this so cleanup can sweep it.
#[derive(Component, Debug)]
pub struct LevelEntity;

/// Exit door sensor. The rule decides when the door unlocks, the target
/// names the next level (None completes the run).
#[derive(Component, Debug)]
pub struct DoorGate {
    pub target: Option<String>,
    pub rule: DoorRule,
}

#[derive(Component, Debug)]
pub struct DoorEnabled;

#[derive(Component, Debug)]
pub struct DoorDisabled;

/// Sensor zone that sends the player back to the checkpoint on contact.
#[derive(Component, Debug)]
pub struct KillZone;
