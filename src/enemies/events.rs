//! Enemies domain: damage and death messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

#[derive(Debug)]
pub struct DamageEvent {
    pub source: Entity,
    pub target: Entity,
    pub amount: f32,
    pub knockback: Vec2,
}

impl Message for DamageEvent {}

#[derive(Debug)]
pub struct DeathEvent {
    pub entity: Entity,
}

impl Message for DeathEvent {}
