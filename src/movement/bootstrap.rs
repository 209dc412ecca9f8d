//! Movement domain: player bootstrap and teardown.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::animation::AnimationController;
use crate::content::GameContent;
use crate::enemies::{Health, Invulnerable};
use crate::movement::{GameLayer, MovementState, Player};

const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

/// Spawns the player on entering gameplay. Levels position it afterwards,
/// so the spawn point here is only a pre-placement default.
pub(crate) fn bootstrap_player(
    mut commands: Commands,
    content: Res<GameContent>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let max_health = content.config.player_max_health;
    info!("Spawning player: health={}", max_health);

    commands.spawn((
        // Identity & Movement
        (
            Player,
            MovementState::default(),
            AnimationController::default(),
        ),
        // Health
        (Health::new(max_health), Invulnerable::default()),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, 100.0, 10.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            ExternalForce::new(Vec2::ZERO).with_persistence(false),
            GravityScale(1.0),
            Mass(1.0),
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [
                    GameLayer::Ground,
                    GameLayer::Wall,
                    GameLayer::Enemy,
                    GameLayer::Sensor,
                ],
            ),
        ),
    ));
}

/// A fresh player is spawned per run, so the menu clears any leftover one.
pub(crate) fn despawn_player(mut commands: Commands, player_query: Query<Entity, With<Player>>) {
    for entity in player_query.iter() {
        commands.entity(entity).despawn();
    }
}
