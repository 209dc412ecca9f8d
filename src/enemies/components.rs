//! Enemies domain: components for damageable and damaging entities.

use bevy::prelude::*;

/// Marks a hostile entity
#[derive(Component, Debug)]
pub struct Enemy;

/// Health component for damageable entities
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.min(self.current);
        self.current -= actual;
        actual
    }

    pub fn heal(&mut self, amount: f32) -> f32 {
        let actual = amount.min(self.max - self.current);
        self.current += actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    pub fn percent(&self) -> f32 {
        self.current / self.max
    }
}

/// Invulnerability frames - entity cannot take damage
#[derive(Component, Debug, Default)]
pub struct Invulnerable {
    pub timer: f32,
}

impl Invulnerable {
    pub fn is_invulnerable(&self) -> bool {
        self.timer > 0.0
    }
}

/// Marks an enemy that can be defeated by landing on it
#[derive(Component, Debug)]
pub struct Stompable;

/// Damage dealt to the player on side contact
#[derive(Component, Debug)]
pub struct ContactDamage(pub f32);

/// Knockback this entity deals on contact
#[derive(Component, Debug, Clone)]
pub struct Knockback {
    pub strength: f32,
}

impl Default for Knockback {
    fn default() -> Self {
        Self { strength: 260.0 }
    }
}
