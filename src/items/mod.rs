//! Items domain: collectibles and the run inventory.

use std::collections::HashMap;

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::audio::{PlaySound, SoundKind};
use crate::core::{gameplay_active, GameState};
use crate::enemies::Health;
use crate::movement::Player;

#[cfg(test)]
mod tests;

/// How close the player must be to pick something up
const PICKUP_RADIUS: f32 = 28.0;
/// Health restored by a heart
const HEART_HEAL: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Gem,
    Key,
    Heart,
}

impl ItemKind {
    /// Stable listing order for UI readouts
    pub const ALL: [ItemKind; 3] = [ItemKind::Gem, ItemKind::Key, ItemKind::Heart];

    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Gem => "Gem",
            ItemKind::Key => "Key",
            ItemKind::Heart => "Heart",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            ItemKind::Gem => Color::srgb(0.35, 0.8, 0.85),
            ItemKind::Key => Color::srgb(0.92, 0.78, 0.25),
            ItemKind::Heart => Color::srgb(0.9, 0.35, 0.4),
        }
    }
}

/// A collectible waiting in the level
#[derive(Component, Debug)]
pub struct Collectible {
    pub kind: ItemKind,
}

/// Resource tracking everything collected within a run
#[derive(Resource, Debug, Default)]
pub struct Inventory {
    items: HashMap<ItemKind, u32>,
}

impl Inventory {
    pub fn add(&mut self, kind: ItemKind) {
        let count = self.items.entry(kind).or_insert(0);
        *count = count.saturating_add(1);
    }

    pub fn count(&self, kind: ItemKind) -> u32 {
        self.items.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.items.values().sum()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

pub struct ItemsPlugin;

impl Plugin for ItemsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Inventory>()
            .add_systems(OnEnter(GameState::InGame), reset_inventory)
            .add_systems(Update, collect_items.run_if(gameplay_active));
    }
}

fn reset_inventory(mut inventory: ResMut<Inventory>) {
    inventory.clear();
}

/// Distance poll against every collectible. Hearts heal on the spot,
/// everything else lands in the inventory.
pub(crate) fn collect_items(
    mut commands: Commands,
    mut inventory: ResMut<Inventory>,
    item_query: Query<(Entity, &Transform, &Collectible)>,
    mut player_query: Query<(&Transform, &mut Health), With<Player>>,
    mut sounds: MessageWriter<PlaySound>,
) {
    let Ok((player_transform, mut health)) = player_query.single_mut() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    for (entity, transform, collectible) in item_query.iter() {
        if transform.translation.truncate().distance(player_pos) > PICKUP_RADIUS {
            continue;
        }

        match collectible.kind {
            ItemKind::Heart => {
                let healed = health.heal(HEART_HEAL);
                info!("Picked up a heart, healed {:.0}", healed);
            }
            kind => {
                inventory.add(kind);
                info!("Picked up {} (total {})", kind.label(), inventory.count(kind));
            }
        }
        sounds.write(PlaySound::any(SoundKind::Pickup));
        commands.entity(entity).despawn();
    }
}
