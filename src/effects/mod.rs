//! Effects domain: transient sprite color flashes for hit and pickup feedback.

use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;

#[cfg(test)]
mod tests;

const HIT_FLASH_COLOR: Color = Color::srgb(1.0, 0.95, 0.9);
const HIT_FLASH_COUNT: u32 = 3;
const HIT_FLASH_DURATION: f32 = 0.3;

const PULSE_FLASH_COLOR: Color = Color::srgb(0.85, 1.0, 0.9);
const PULSE_FLASH_COUNT: u32 = 2;
const PULSE_FLASH_DURATION: f32 = 0.5;

/// Request a color flash on an entity's sprite. Requests against an entity
/// that is already flashing are dropped, so overlapping hits do not restart
/// the flicker.
#[derive(Debug, Clone, Copy)]
pub struct FlashRequest {
    pub entity: Entity,
    pub color: Color,
    pub flashes: u32,
    pub duration: f32,
}

impl Message for FlashRequest {}

impl FlashRequest {
    /// Quick bright flicker for hurt feedback.
    pub fn hit(entity: Entity) -> Self {
        Self {
            entity,
            color: HIT_FLASH_COLOR,
            flashes: HIT_FLASH_COUNT,
            duration: HIT_FLASH_DURATION,
        }
    }

    /// Slower double pulse for checkpoint activation.
    pub fn pulse(entity: Entity) -> Self {
        Self {
            entity,
            color: PULSE_FLASH_COLOR,
            flashes: PULSE_FLASH_COUNT,
            duration: PULSE_FLASH_DURATION,
        }
    }
}

/// Running flash. Holds the color to restore once it finishes.
#[derive(Component, Debug)]
pub struct SpriteFlash {
    timer: Timer,
    flash_color: Color,
    base_color: Color,
    flashes: u32,
}

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<FlashRequest>()
            .add_systems(Update, (start_flashes, update_flashes).chain());
    }
}

pub(crate) fn start_flashes(
    mut commands: Commands,
    mut requests: MessageReader<FlashRequest>,
    query: Query<&Sprite, Without<SpriteFlash>>,
) {
    for request in requests.read() {
        // A sprite mid-flash keeps its current run; restarting would capture
        // the flash color as the base.
        let Ok(sprite) = query.get(request.entity) else {
            continue;
        };
        if request.flashes == 0 || request.duration <= 0.0 {
            warn!("Ignoring degenerate flash request: {request:?}");
            continue;
        }
        commands.entity(request.entity).insert(SpriteFlash {
            timer: Timer::from_seconds(request.duration, TimerMode::Once),
            flash_color: request.color,
            base_color: sprite.color,
            flashes: request.flashes,
        });
    }
}

pub(crate) fn update_flashes(
    time: Res<Time>,
    mut commands: Commands,
    mut query: Query<(Entity, &mut Sprite, &mut SpriteFlash)>,
) {
    for (entity, mut sprite, mut flash) in &mut query {
        flash.timer.tick(time.delta());

        if flash.timer.finished() {
            sprite.color = flash.base_color;
            commands.entity(entity).remove::<SpriteFlash>();
            continue;
        }

        let lit = flash_segment_lit(
            flash.timer.elapsed_secs(),
            flash.timer.duration().as_secs_f32(),
            flash.flashes,
        );
        sprite.color = if lit {
            flash.flash_color
        } else {
            flash.base_color
        };
    }
}

/// Splits the flash window into `2n - 1` equal segments, alternating lit and
/// unlit starting lit, so n lit pulses fill the total duration evenly.
pub(crate) fn flash_segment_lit(elapsed: f32, duration: f32, flashes: u32) -> bool {
    let segments = (flashes * 2).saturating_sub(1).max(1);
    let interval = duration / segments as f32;
    let index = ((elapsed / interval) as u32).min(segments - 1);
    index % 2 == 0
}
