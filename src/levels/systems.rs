//! Levels domain: door gating, hazard handling and transition processing.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::audio::{ChangeMusic, PlaySound, SoundKind};
use crate::checkpoints::{CheckpointTracker, RespawnRequested};
use crate::core::GameState;
use crate::effects::FlashRequest;
use crate::items::{Inventory, ItemKind};
use crate::enemies::Enemy;
use crate::levels::components::{DoorDisabled, DoorEnabled, DoorGate, KillZone, LevelEntity};
use crate::levels::data::DoorRule;
use crate::levels::events::LevelTransition;
use crate::levels::registry::LevelLibrary;
use crate::levels::session::{CurrentLevel, LevelBounds, PlayerAtDoor, TransitionCooldown};
use crate::levels::spawn::{build_level, place_player_at, DOOR_DISABLED_COLOR, DOOR_ENABLED_COLOR};
use crate::movement::{MovementState, Player};

pub(crate) fn tick_transition_cooldown(
    time: Res<Time>,
    mut cooldown: ResMut<TransitionCooldown>,
) {
    cooldown.tick(time.delta());
}

/// Tracks whether the player is standing in a door's sensor zone.
pub(crate) fn track_player_door_zone(
    mut commands: Commands,
    mut collision_start: MessageReader<CollisionStart>,
    mut collision_end: MessageReader<CollisionEnd>,
    door_query: Query<(), With<DoorGate>>,
    player_query: Query<Entity, With<Player>>,
    zoned_query: Query<&PlayerAtDoor>,
) {
    let Ok(player) = player_query.single() else {
        return;
    };

    for event in collision_start.read() {
        let (door, other) = if door_query.get(event.collider1).is_ok() {
            (event.collider1, event.collider2)
        } else if door_query.get(event.collider2).is_ok() {
            (event.collider2, event.collider1)
        } else {
            continue;
        };
        if other != player {
            continue;
        }
        debug!("[DOOR] Player entered the exit zone");
        commands.entity(player).insert(PlayerAtDoor { door });
    }

    for event in collision_end.read() {
        let (door, other) = if door_query.get(event.collider1).is_ok() {
            (event.collider1, event.collider2)
        } else if door_query.get(event.collider2).is_ok() {
            (event.collider2, event.collider1)
        } else {
            continue;
        };
        if other != player {
            continue;
        }
        if zoned_query.get(player).is_ok_and(|at| at.door == door) {
            debug!("[DOOR] Player left the exit zone");
            commands.entity(player).remove::<PlayerAtDoor>();
        }
    }
}

/// Re-evaluates every door's rule against the current run state and
/// flips the enabled/disabled marker when the answer changes.
pub(crate) fn evaluate_door_rules(
    mut commands: Commands,
    inventory: Res<Inventory>,
    enemy_query: Query<(), With<Enemy>>,
    mut door_query: Query<(Entity, &DoorGate, &mut Sprite, Has<DoorEnabled>)>,
) {
    let enemies_alive = enemy_query.iter().count();
    let keys_held = inventory.count(ItemKind::Key);

    for (entity, gate, mut sprite, enabled) in door_query.iter_mut() {
        let open = door_open(&gate.rule, keys_held, enemies_alive);
        if open && !enabled {
            info!("[DOOR] Exit unlocked");
            sprite.color = DOOR_ENABLED_COLOR;
            commands
                .entity(entity)
                .insert(DoorEnabled)
                .remove::<DoorDisabled>();
        } else if !open && enabled {
            info!("[DOOR] Exit locked");
            sprite.color = DOOR_DISABLED_COLOR;
            commands
                .entity(entity)
                .insert(DoorDisabled)
                .remove::<DoorEnabled>();
        }
    }
}

/// Fires a transition when the player confirms entry at an enabled door.
pub(crate) fn confirm_door_entry(
    keyboard: Res<ButtonInput<KeyCode>>,
    cooldown: Res<TransitionCooldown>,
    player_query: Query<&PlayerAtDoor, With<Player>>,
    door_query: Query<&DoorGate, With<DoorEnabled>>,
    mut transitions: MessageWriter<LevelTransition>,
    mut sounds: MessageWriter<PlaySound>,
) {
    if !keyboard.just_pressed(KeyCode::KeyE) {
        return;
    }
    let Ok(at_door) = player_query.single() else {
        return;
    };
    if !cooldown.can_transition() {
        debug!("[DOOR] Transition on cooldown, ignoring");
        return;
    }
    let Ok(gate) = door_query.get(at_door.door) else {
        debug!("[DOOR] Exit is locked");
        return;
    };

    sounds.write(PlaySound::any(SoundKind::Door));
    match &gate.target {
        Some(target) => {
            transitions.write(LevelTransition::To(target.clone()));
        }
        None => {
            transitions.write(LevelTransition::Complete);
        }
    }
}

/// Swaps out the current level in response to a transition request.
/// Multiple requests in one frame collapse into the first one.
pub(crate) fn process_level_transitions(
    mut commands: Commands,
    mut transitions: MessageReader<LevelTransition>,
    library: Res<LevelLibrary>,
    mut current: ResMut<CurrentLevel>,
    mut bounds: ResMut<LevelBounds>,
    mut tracker: ResMut<CheckpointTracker>,
    mut cooldown: ResMut<TransitionCooldown>,
    mut next_state: ResMut<NextState<GameState>>,
    level_query: Query<Entity, With<LevelEntity>>,
    mut player_query: Query<
        (Entity, &mut Transform, &mut LinearVelocity, &mut MovementState),
        With<Player>,
    >,
    mut music: MessageWriter<ChangeMusic>,
) {
    let mut requested = None;
    for transition in transitions.read() {
        if requested.is_none() {
            requested = Some(transition.clone());
        }
    }
    let Some(transition) = requested else {
        return;
    };

    let next_id = match transition {
        LevelTransition::To(target) => {
            if library.get(&target).is_none() {
                warn!("[TRANSITION] Unknown target level '{}', ignoring", target);
                return;
            }
            info!("[TRANSITION] {} -> {}", current.0, target);
            target
        }
        LevelTransition::Reload => {
            info!("[TRANSITION] Reloading level '{}'", current.0);
            current.0.clone()
        }
        LevelTransition::Complete => {
            info!("[TRANSITION] Run complete, returning to menu");
            next_state.set(GameState::MainMenu);
            return;
        }
    };
    let Some(level) = library.get(&next_id) else {
        return;
    };

    for entity in level_query.iter() {
        commands.entity(entity).despawn();
    }
    current.0 = next_id;
    build_level(&mut commands, level);
    *bounds = LevelBounds {
        half_extents: level.half_extents(),
        fall_limit: level.fall_limit,
    };
    tracker.store(level.player_spawn);
    cooldown.reset();
    if let Some(index) = level.music_track {
        music.write(ChangeMusic { index });
    }

    if let Ok((entity, mut transform, mut velocity, mut state)) = player_query.single_mut() {
        place_player_at(&mut transform, &mut velocity, &mut state, level.player_spawn);
        commands.entity(entity).remove::<PlayerAtDoor>();
    } else {
        warn!("No player to position after transition");
    }
}

/// Kill zone contact sends the player back to the last checkpoint.
pub(crate) fn resolve_kill_zone_contacts(
    mut collision_start: MessageReader<CollisionStart>,
    zone_query: Query<(), With<KillZone>>,
    player_query: Query<Entity, With<Player>>,
    mut respawns: MessageWriter<RespawnRequested>,
    mut sounds: MessageWriter<PlaySound>,
    mut flashes: MessageWriter<FlashRequest>,
) {
    let Ok(player) = player_query.single() else {
        return;
    };

    for event in collision_start.read() {
        let other = if zone_query.get(event.collider1).is_ok() {
            event.collider2
        } else if zone_query.get(event.collider2).is_ok() {
            event.collider1
        } else {
            continue;
        };
        if other != player {
            continue;
        }
        info!("[HAZARD] Player touched a kill zone");
        sounds.write(PlaySound::any(SoundKind::PlayerHurt));
        flashes.write(FlashRequest::hit(player));
        respawns.write(RespawnRequested);
        return;
    }
}

/// Falling below the level's lower bound counts as a hazard hit. The
/// latch keeps one long fall from firing a respawn every frame.
pub(crate) fn enforce_fall_limit(
    bounds: Res<LevelBounds>,
    player_query: Query<&Transform, With<Player>>,
    mut respawns: MessageWriter<RespawnRequested>,
    mut sounds: MessageWriter<PlaySound>,
    mut was_below: Local<bool>,
) {
    let Ok(transform) = player_query.single() else {
        return;
    };

    let below = transform.translation.y < bounds.fall_limit;
    if below && !*was_below {
        warn!(
            "[HAZARD] Player fell out of the level at y={:.0}",
            transform.translation.y
        );
        sounds.write(PlaySound::any(SoundKind::PlayerHurt));
        respawns.write(RespawnRequested);
    }
    *was_below = below;
}

// ==== Decision helpers ======================================================

pub(crate) fn door_open(rule: &DoorRule, keys_held: u32, enemies_alive: usize) -> bool {
    match rule {
        DoorRule::Always => true,
        DoorRule::RequiresKeys(needed) => keys_held >= *needed,
        DoorRule::EnemiesCleared => enemies_alive == 0,
    }
}
