//! Enemies domain: hostile entities, stomps, damage and death flow.

mod components;
mod events;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{ContactDamage, Enemy, Health, Invulnerable, Knockback, Stompable};
pub use events::{DamageEvent, DeathEvent};

use bevy::prelude::*;

use crate::core::gameplay_active;

pub struct EnemiesPlugin;

impl Plugin for EnemiesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<DamageEvent>()
            .add_message::<DeathEvent>()
            .add_systems(
                Update,
                (
                    systems::tick_invulnerability,
                    systems::resolve_enemy_contacts,
                    systems::apply_damage,
                    systems::apply_knockback,
                    systems::process_deaths,
                )
                    .chain()
                    .run_if(gameplay_active),
            );
    }
}
