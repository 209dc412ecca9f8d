//! Checkpoints domain: respawn position cache and respawn handling.

use avian2d::prelude::*;
use bevy::ecs::message::{Message, MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::audio::{PlaySound, SoundKind};
use crate::content::GameContent;
use crate::core::gameplay_active;
use crate::effects::FlashRequest;
use crate::levels::LevelTransition;
use crate::movement::{MovementState, Player};

#[cfg(test)]
mod tests;

pub(crate) const CHECKPOINT_IDLE_COLOR: Color = Color::srgb(0.45, 0.45, 0.5);
pub(crate) const CHECKPOINT_ACTIVE_COLOR: Color = Color::srgb(0.3, 0.8, 0.4);

/// Cached respawn position. Level spawn seeds it with the player spawn
/// point, so None only survives until the first level loads.
#[derive(Resource, Debug, Default)]
pub struct CheckpointTracker {
    pub last: Option<Vec2>,
}

impl CheckpointTracker {
    pub fn store(&mut self, position: Vec2) {
        self.last = Some(position);
    }

    pub fn clear(&mut self) {
        self.last = None;
    }
}

/// Marker for checkpoint posts placed by level spawn.
#[derive(Component, Debug)]
pub struct Checkpoint;

/// Added once a checkpoint has been touched so it only fires once.
#[derive(Component, Debug)]
pub struct CheckpointActivated;

/// Request to put the player back at the cached checkpoint. With nothing
/// cached the level reloads instead.
#[derive(Debug, Clone, Copy)]
pub struct RespawnRequested;

impl Message for RespawnRequested {}

pub struct CheckpointsPlugin;

impl Plugin for CheckpointsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CheckpointTracker>()
            .add_message::<RespawnRequested>()
            .add_systems(
                Update,
                (activate_checkpoints, handle_respawns)
                    .chain()
                    .run_if(gameplay_active),
            );
    }
}

/// Checkpoints are proximity triggers, not colliders. The first time the
/// player comes close enough the position is cached and the post lights up.
pub(crate) fn activate_checkpoints(
    mut commands: Commands,
    content: Res<GameContent>,
    mut tracker: ResMut<CheckpointTracker>,
    mut sounds: MessageWriter<PlaySound>,
    mut flashes: MessageWriter<FlashRequest>,
    player_query: Query<&Transform, With<Player>>,
    mut checkpoint_query: Query<
        (Entity, &Transform, &mut Sprite),
        (With<Checkpoint>, Without<CheckpointActivated>),
    >,
) {
    let Ok(player_transform) = player_query.single() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();
    let radius = content.config.checkpoint_radius;

    for (entity, transform, mut sprite) in &mut checkpoint_query {
        let pos = transform.translation.truncate();
        if player_pos.distance(pos) > radius {
            continue;
        }

        tracker.store(pos);
        sprite.color = CHECKPOINT_ACTIVE_COLOR;
        commands.entity(entity).insert(CheckpointActivated);
        flashes.write(FlashRequest::pulse(entity));
        sounds.write(PlaySound::any(SoundKind::Checkpoint));
        info!("Checkpoint activated at ({:.0}, {:.0})", pos.x, pos.y);
    }
}

pub(crate) fn handle_respawns(
    mut respawns: MessageReader<RespawnRequested>,
    tracker: Res<CheckpointTracker>,
    mut transitions: MessageWriter<LevelTransition>,
    mut player_query: Query<
        (
            &mut Transform,
            &mut LinearVelocity,
            &mut MovementState,
            &mut GravityScale,
        ),
        With<Player>,
    >,
) {
    if respawns.is_empty() {
        return;
    }
    // Several requests in one frame collapse into a single respawn
    respawns.clear();

    match tracker.last {
        Some(pos) => {
            let Ok((mut transform, mut velocity, mut state, mut gravity_scale)) =
                player_query.single_mut()
            else {
                warn!("Respawn requested but no player exists");
                return;
            };
            transform.translation.x = pos.x;
            transform.translation.y = pos.y;
            velocity.0 = Vec2::ZERO;
            state.reset_volatile();
            gravity_scale.0 = 1.0;
            info!("Respawned player at ({:.0}, {:.0})", pos.x, pos.y);
        }
        None => {
            warn!("No checkpoint stored, reloading level");
            transitions.write(LevelTransition::Reload);
        }
    }
}
