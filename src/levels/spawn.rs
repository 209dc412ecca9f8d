//! Levels domain: level spawning and teardown helpers.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::audio::ChangeMusic;
use crate::checkpoints::{Checkpoint, CheckpointTracker, CHECKPOINT_IDLE_COLOR};
use crate::enemies::{ContactDamage, Enemy, Health, Invulnerable, Knockback, Stompable};
use crate::items::Collectible;
use crate::levels::components::{DoorDisabled, DoorEnabled, DoorGate, KillZone, LevelEntity};
use crate::levels::data::{DoorRule, LevelData, SurfaceKind};
use crate::levels::registry::LevelLibrary;
use crate::levels::session::{CurrentLevel, LevelBounds, PlayerAtDoor};
use crate::movement::{GameLayer, MovementState, Player};

const GROUND_COLOR: Color = Color::srgb(0.42, 0.4, 0.38);
const WALL_COLOR: Color = Color::srgb(0.32, 0.3, 0.36);
const KILL_ZONE_COLOR: Color = Color::srgba(0.85, 0.25, 0.2, 0.35);
const ENEMY_COLOR: Color = Color::srgb(0.8, 0.3, 0.3);
const ENEMY_SIZE: Vec2 = Vec2::new(26.0, 26.0);
const CHECKPOINT_SIZE: Vec2 = Vec2::new(12.0, 36.0);
const COLLECTIBLE_SIZE: Vec2 = Vec2::new(14.0, 14.0);

pub(crate) const DOOR_ENABLED_COLOR: Color = Color::srgb(0.3, 0.7, 0.4);
pub(crate) const DOOR_DISABLED_COLOR: Color = Color::srgb(0.45, 0.45, 0.45);

pub(crate) const DECOR_PALETTE: [Color; 4] = [
    Color::srgba(0.3, 0.3, 0.36, 0.5),
    Color::srgba(0.26, 0.28, 0.33, 0.55),
    Color::srgba(0.34, 0.32, 0.38, 0.45),
    Color::srgba(0.22, 0.24, 0.3, 0.6),
];

/// Spawns the level named by CurrentLevel. An unknown or empty id falls
/// back to the first library level.
pub(crate) fn spawn_level(
    mut commands: Commands,
    library: Res<LevelLibrary>,
    mut current: ResMut<CurrentLevel>,
    mut bounds: ResMut<LevelBounds>,
    mut tracker: ResMut<CheckpointTracker>,
    mut player_query: Query<
        (&mut Transform, &mut LinearVelocity, &mut MovementState),
        With<Player>,
    >,
    mut music: MessageWriter<ChangeMusic>,
) {
    if library.get(&current.0).is_none() {
        let Some(first) = library.first_id() else {
            error!("Level library is empty, nothing to spawn");
            return;
        };
        warn!("Level '{}' not found, falling back to '{}'", current.0, first);
        current.0 = first.to_string();
    }
    let Some(level) = library.get(&current.0) else {
        return;
    };

    build_level(&mut commands, level);
    *bounds = LevelBounds {
        half_extents: level.half_extents(),
        fall_limit: level.fall_limit,
    };
    // The level's own spawn point is the respawn target until a
    // checkpoint is touched
    tracker.store(level.player_spawn);

    if let Ok((mut transform, mut velocity, mut state)) = player_query.single_mut() {
        place_player_at(&mut transform, &mut velocity, &mut state, level.player_spawn);
    } else {
        warn!("No player to position at level spawn");
    }

    if let Some(index) = level.music_track {
        music.write(ChangeMusic { index });
    }

    info!(
        "Spawned level '{}' ({}): {} blocks, {} enemies, {} collectibles",
        level.id,
        level.name,
        level.blocks.len(),
        level.enemies.len(),
        level.collectibles.len()
    );
}

pub(crate) fn cleanup_level(
    mut commands: Commands,
    level_query: Query<Entity, With<LevelEntity>>,
    zoned_query: Query<Entity, With<PlayerAtDoor>>,
) {
    for entity in level_query.iter() {
        commands.entity(entity).despawn();
    }
    for entity in zoned_query.iter() {
        commands.entity(entity).remove::<PlayerAtDoor>();
    }
}

pub(crate) fn place_player_at(
    transform: &mut Transform,
    velocity: &mut LinearVelocity,
    state: &mut MovementState,
    spawn: Vec2,
) {
    transform.translation.x = spawn.x;
    transform.translation.y = spawn.y;
    velocity.0 = Vec2::ZERO;
    state.reset_volatile();
}

/// Spawns every entity a level consists of, all tagged LevelEntity.
pub(crate) fn build_level(commands: &mut Commands, level: &LevelData) {
    let ground_layers =
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Enemy]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player, GameLayer::Enemy]);
    let sensor_layers = CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]);

    // Solid geometry. Ground and wall blocks differ only in color and
    // physics layer; the sensors tell them apart by layer mask.
    for block in &level.blocks {
        let (color, layers) = match block.surface {
            SurfaceKind::Ground => (GROUND_COLOR, ground_layers),
            SurfaceKind::Wall => (WALL_COLOR, wall_layers),
        };
        commands.spawn((
            LevelEntity,
            Sprite {
                color,
                custom_size: Some(block.size),
                ..default()
            },
            Transform::from_xyz(block.pos.x, block.pos.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(block.size.x, block.size.y),
            layers,
        ));
    }

    // Kill zones
    for zone in &level.kill_zones {
        commands.spawn((
            LevelEntity,
            KillZone,
            Sprite {
                color: KILL_ZONE_COLOR,
                custom_size: Some(zone.size),
                ..default()
            },
            Transform::from_xyz(zone.pos.x, zone.pos.y, 0.5),
            Collider::rectangle(zone.size.x, zone.size.y),
            Sensor,
            CollisionEventsEnabled,
            sensor_layers,
        ));
    }

    // Exit door
    if let Some(door) = &level.exit {
        let starts_open = door.rule == DoorRule::Always;
        let mut door_cmd = commands.spawn((
            LevelEntity,
            DoorGate {
                target: door.target.clone(),
                rule: door.rule.clone(),
            },
            Sprite {
                color: if starts_open {
                    DOOR_ENABLED_COLOR
                } else {
                    DOOR_DISABLED_COLOR
                },
                custom_size: Some(door.size),
                ..default()
            },
            Transform::from_xyz(door.pos.x, door.pos.y, 1.0),
            Collider::rectangle(door.size.x, door.size.y),
            Sensor,
            CollisionEventsEnabled,
            sensor_layers,
        ));
        if starts_open {
            door_cmd.insert(DoorEnabled);
        } else {
            door_cmd.insert(DoorDisabled);
        }
    }

    // Checkpoints (proximity triggers, no collider)
    for pos in &level.checkpoints {
        commands.spawn((
            LevelEntity,
            Checkpoint,
            Sprite {
                color: CHECKPOINT_IDLE_COLOR,
                custom_size: Some(CHECKPOINT_SIZE),
                ..default()
            },
            Transform::from_xyz(pos.x, pos.y, 1.0),
        ));
    }

    // Collectibles (proximity triggers, no collider)
    for collectible in &level.collectibles {
        commands.spawn((
            LevelEntity,
            Collectible {
                kind: collectible.kind,
            },
            Sprite {
                color: collectible.kind.color(),
                custom_size: Some(COLLECTIBLE_SIZE),
                ..default()
            },
            Transform::from_xyz(collectible.pos.x, collectible.pos.y, 2.0),
        ));
    }

    // Enemies
    for enemy in &level.enemies {
        commands.spawn((
            // Identity & Combat
            (
                LevelEntity,
                Enemy,
                Health::new(enemy.max_health),
                Invulnerable::default(),
                Stompable,
                ContactDamage(enemy.contact_damage),
                Knockback::default(),
            ),
            // Rendering
            Sprite {
                color: ENEMY_COLOR,
                custom_size: Some(ENEMY_SIZE),
                ..default()
            },
            Transform::from_xyz(enemy.pos.x, enemy.pos.y, 5.0),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(ENEMY_SIZE.x, ENEMY_SIZE.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(1.0),
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollisionLayers::new(
                    GameLayer::Enemy,
                    [GameLayer::Ground, GameLayer::Wall, GameLayer::Player],
                ),
            ),
        ));
    }

    // Backdrop decoration
    for (pos, size, palette) in decoration_rects(level.decoration_seed(), level.half_extents()) {
        commands.spawn((
            LevelEntity,
            Sprite {
                color: DECOR_PALETTE[palette],
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(pos.x, pos.y, -5.0),
        ));
    }
}

/// Deterministic scatter of backdrop rectangles. The same seed always
/// produces the same layout.
pub(crate) fn decoration_rects(seed: u64, half_extents: Vec2) -> Vec<(Vec2, Vec2, usize)> {
    if half_extents.x <= 120.0 || half_extents.y <= 80.0 {
        return Vec::new();
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let area = half_extents.x * half_extents.y * 4.0;
    let count = ((area / 140_000.0) as usize).clamp(6, 24);

    let mut rects = Vec::with_capacity(count);
    for _ in 0..count {
        let pos = Vec2::new(
            rng.random_range(-half_extents.x + 60.0..half_extents.x - 60.0),
            rng.random_range(-half_extents.y + 40.0..half_extents.y - 40.0),
        );
        let size = Vec2::new(
            rng.random_range(24.0..96.0),
            rng.random_range(16.0..64.0),
        );
        let palette = rng.random_range(0..DECOR_PALETTE.len());
        rects.push((pos, size, palette));
    }
    rects
}
