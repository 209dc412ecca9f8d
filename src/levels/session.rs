//! Levels domain: per-session level state and transition tracking.

use bevy::prelude::*;

/// Id of the level to spawn on entering gameplay. The main menu sets it
/// before the run starts; transitions rewrite it.
#[derive(Resource, Debug, Default)]
pub struct CurrentLevel(pub String);

/// Extents of the active level, used by the camera clamp and the fall
/// limit check.
#[derive(Resource, Debug)]
pub struct LevelBounds {
    pub half_extents: Vec2,
    pub fall_limit: f32,
}

impl Default for LevelBounds {
    fn default() -> Self {
        Self {
            half_extents: Vec2::new(640.0, 360.0),
            fall_limit: -2000.0,
        }
    }
}

/// Cooldown timer to prevent rapid/double transitions between levels
#[derive(Resource, Debug)]
pub struct TransitionCooldown {
    pub timer: Timer,
}

impl Default for TransitionCooldown {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(0.3, TimerMode::Once),
        }
    }
}

impl TransitionCooldown {
    pub fn reset(&mut self) {
        self.timer.reset();
    }

    pub fn tick(&mut self, delta: std::time::Duration) {
        self.timer.tick(delta);
    }

    pub fn can_transition(&self) -> bool {
        self.timer.remaining_secs() == 0.0
    }
}

/// Tracks that the player is currently within a door's interaction zone
#[derive(Component, Debug)]
pub struct PlayerAtDoor {
    pub door: Entity,
}
