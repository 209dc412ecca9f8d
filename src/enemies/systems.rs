//! Enemies domain: contact resolution, damage, knockback and deaths.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::audio::{PlaySound, SoundKind};
use crate::checkpoints::RespawnRequested;
use crate::content::GameContent;
use crate::effects::FlashRequest;
use crate::enemies::components::{
    ContactDamage, Enemy, Health, Invulnerable, Knockback, Stompable,
};
use crate::enemies::events::{DamageEvent, DeathEvent};
use crate::movement::Player;

/// Damage a stomp deals to enemies that track health
const STOMP_DAMAGE: f32 = 20.0;
/// Short window so one contact cannot hit the same enemy twice
const ENEMY_HIT_IFRAMES: f32 = 0.2;
/// Maximum speed an entity can be left with after knockback
const MAX_KNOCKBACK_VELOCITY: f32 = 800.0;
/// Minimum upward knockback to give a small lift
const MIN_VERTICAL_KNOCKBACK: f32 = 80.0;

pub(crate) fn tick_invulnerability(time: Res<Time>, mut query: Query<&mut Invulnerable>) {
    let dt = time.delta_secs();
    for mut invuln in &mut query {
        if invuln.timer > 0.0 {
            invuln.timer -= dt;
        }
    }
}

/// Sorts player/enemy contacts into stomps and side hits.
pub(crate) fn resolve_enemy_contacts(
    mut collision_start: MessageReader<CollisionStart>,
    content: Res<GameContent>,
    enemy_query: Query<
        (
            &Transform,
            Option<&ContactDamage>,
            Option<&Knockback>,
            Has<Stompable>,
            Has<Health>,
            &Invulnerable,
        ),
        With<Enemy>,
    >,
    mut player_query: Query<
        (Entity, &Transform, &mut LinearVelocity, &Invulnerable),
        With<Player>,
    >,
    mut damage_events: MessageWriter<DamageEvent>,
    mut death_events: MessageWriter<DeathEvent>,
    mut sounds: MessageWriter<PlaySound>,
) {
    let Ok((player, player_transform, mut player_velocity, player_invuln)) =
        player_query.single_mut()
    else {
        return;
    };

    for event in collision_start.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (enemy_entity, other) in pairs {
            let Ok((enemy_transform, contact, knockback, stompable, has_health, enemy_invuln)) =
                enemy_query.get(enemy_entity)
            else {
                continue;
            };
            if other != player {
                continue;
            }

            let contact_dir =
                (player_transform.translation - enemy_transform.translation).truncate();
            let strength = knockback.map(|k| k.strength).unwrap_or_default();

            if stompable && stomped_from_above(contact_dir, content.config.stomp_cone_angle_deg) {
                info!("Enemy {:?} stomped", enemy_entity);
                sounds.write(PlaySound::any(SoundKind::Stomp));
                player_velocity.y = content.config.stomp_bounce_speed;

                if !has_health {
                    // No health pool means one stomp finishes it
                    death_events.write(DeathEvent {
                        entity: enemy_entity,
                    });
                } else if !enemy_invuln.is_invulnerable() {
                    let away = push_direction(-contact_dir);
                    damage_events.write(DamageEvent {
                        source: player,
                        target: enemy_entity,
                        amount: STOMP_DAMAGE,
                        knockback: away * strength,
                    });
                }
            } else if !player_invuln.is_invulnerable() {
                let Some(contact) = contact else {
                    break;
                };
                let push = push_direction(contact_dir);
                damage_events.write(DamageEvent {
                    source: enemy_entity,
                    target: player,
                    amount: contact.0,
                    knockback: push * strength,
                });
            }
            break;
        }
    }
}

pub(crate) fn apply_damage(
    content: Res<GameContent>,
    mut damage_events: MessageReader<DamageEvent>,
    mut death_events: MessageWriter<DeathEvent>,
    mut query: Query<(&mut Health, &mut Invulnerable, Has<Player>)>,
    mut sounds: MessageWriter<PlaySound>,
    mut flashes: MessageWriter<FlashRequest>,
) {
    for event in damage_events.read() {
        let Ok((mut health, mut invuln, is_player)) = query.get_mut(event.target) else {
            continue;
        };

        health.take_damage(event.amount);
        invuln.timer = if is_player {
            content.config.contact_invuln_seconds
        } else {
            ENEMY_HIT_IFRAMES
        };
        flashes.write(FlashRequest::hit(event.target));

        if is_player {
            info!(
                "Player took {:.0} damage ({:.0}/{:.0} left)",
                event.amount, health.current, health.max
            );
            sounds.write(PlaySound::any(SoundKind::PlayerHurt));
        } else {
            debug!("Enemy {:?} took {:.0} damage", event.target, event.amount);
            sounds.write(PlaySound::any(SoundKind::EnemyHurt));
        }

        if health.is_dead() {
            death_events.write(DeathEvent {
                entity: event.target,
            });
        }
    }
}

/// Shoves the hit entity, harder for hits that bite off a larger share
/// of its health pool.
pub(crate) fn apply_knockback(
    mut damage_events: MessageReader<DamageEvent>,
    mut query: Query<(&mut LinearVelocity, Option<&Health>)>,
) {
    for event in damage_events.read() {
        if event.knockback == Vec2::ZERO {
            continue;
        }
        let Ok((mut velocity, health)) = query.get_mut(event.target) else {
            continue;
        };

        let fraction = knockback_fraction(event.amount, health.map(|h| h.max));
        velocity.x += event.knockback.x * fraction;
        velocity.y += (event.knockback.y * fraction).max(MIN_VERTICAL_KNOCKBACK);

        let speed = (velocity.x * velocity.x + velocity.y * velocity.y).sqrt();
        if speed > MAX_KNOCKBACK_VELOCITY {
            let scale = MAX_KNOCKBACK_VELOCITY / speed;
            velocity.x *= scale;
            velocity.y *= scale;
        }

        debug!(
            "Knockback applied: knockback={:?}, final_velocity=({:.1}, {:.1})",
            event.knockback, velocity.x, velocity.y
        );
    }
}

/// Dead enemies despawn; a dead player goes back to the checkpoint at
/// full health.
pub(crate) fn process_deaths(
    mut commands: Commands,
    mut death_events: MessageReader<DeathEvent>,
    mut respawns: MessageWriter<RespawnRequested>,
    enemy_query: Query<(), With<Enemy>>,
    mut player_query: Query<&mut Health, With<Player>>,
) {
    for event in death_events.read() {
        if enemy_query.get(event.entity).is_ok() {
            debug!("Enemy {:?} defeated", event.entity);
            commands.entity(event.entity).despawn();
        } else if let Ok(mut health) = player_query.get_mut(event.entity) {
            info!("Player died, returning to checkpoint");
            let missing = health.max - health.current;
            health.heal(missing);
            respawns.write(RespawnRequested);
        }
    }
}

// ==== Decision helpers ======================================================

/// True when the contact direction (enemy to player) lies within the
/// stomp cone around the enemy's up axis.
pub(crate) fn stomped_from_above(contact_dir: Vec2, cone_angle_deg: f32) -> bool {
    let len = contact_dir.length();
    if len <= f32::EPSILON {
        return false;
    }
    let cos_half = (cone_angle_deg * 0.5).to_radians().cos();
    contact_dir.y / len >= cos_half
}

pub(crate) fn push_direction(dir: Vec2) -> Vec2 {
    let normalized = dir.normalize_or_zero();
    if normalized == Vec2::ZERO {
        Vec2::X
    } else {
        normalized
    }
}

pub(crate) fn knockback_fraction(amount: f32, max_health: Option<f32>) -> f32 {
    let Some(max) = max_health else {
        return 1.0;
    };
    if max <= 0.0 {
        return 1.0;
    }
    (amount / max).clamp(0.25, 1.0)
}
