//! Animation domain: player sprite state machine and frame playback.

use avian2d::prelude::*;
use bevy::ecs::message::{Message, MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::gameplay_active;
use crate::movement::{Facing, MovementState, Player};

#[cfg(test)]
mod tests;

/// Horizontal speed below which the player reads as standing still.
const RUN_ANIMATION_THRESHOLD: f32 = 10.0;

/// Animation states for the player character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Run,
    Jump,
    Fall,
    WallSlide,
}

impl AnimationState {
    /// Short name for readouts and logs.
    pub fn label(&self) -> &'static str {
        match self {
            AnimationState::Idle => "idle",
            AnimationState::Run => "run",
            AnimationState::Jump => "jump",
            AnimationState::Fall => "fall",
            AnimationState::WallSlide => "wall_slide",
        }
    }
}

/// Component for animation playback on the player sprite.
#[derive(Component, Debug)]
pub struct AnimationController {
    /// Current animation state.
    pub state: AnimationState,
    /// Previous state (for detecting transitions).
    pub previous_state: AnimationState,
    /// Current frame index (0-based).
    pub current_frame: u32,
    /// Total frames in current animation.
    pub total_frames: u32,
    /// Time accumulator for frame timing.
    pub frame_timer: f32,
    /// Seconds per frame.
    pub frame_duration: f32,
    /// Whether the animation should loop.
    pub looping: bool,
    /// Whether the animation has finished (for non-looping).
    pub finished: bool,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self {
            state: AnimationState::Idle,
            previous_state: AnimationState::Idle,
            current_frame: 0,
            total_frames: 4,
            frame_timer: 0.0,
            frame_duration: 0.18,
            looping: true,
            finished: false,
        }
    }
}

impl AnimationController {
    /// Set the animation state, resetting frame progress if it changed.
    pub fn set_state(&mut self, state: AnimationState) {
        if self.state == state {
            return;
        }
        self.previous_state = self.state;
        self.state = state;
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.finished = false;

        // Airborne poses hold their last frame instead of looping
        self.looping = matches!(
            state,
            AnimationState::Idle | AnimationState::Run | AnimationState::WallSlide
        );

        // Frame count per state (could be data-driven)
        self.total_frames = match state {
            AnimationState::Idle => 4,
            AnimationState::Run => 6,
            AnimationState::Jump => 2,
            AnimationState::Fall => 2,
            AnimationState::WallSlide => 2,
        };

        self.frame_duration = match state {
            AnimationState::Run => 0.1,
            AnimationState::Jump | AnimationState::Fall => 0.12,
            AnimationState::WallSlide => 0.2,
            AnimationState::Idle => 0.18,
        };
    }
}

/// Message fired when animation state changes.
#[derive(Debug)]
pub struct AnimationStateChanged {
    pub entity: Entity,
    pub from: AnimationState,
    pub to: AnimationState,
}

impl Message for AnimationStateChanged {}

/// Message fired when a non-looping animation completes.
#[derive(Debug)]
pub struct AnimationFinished {
    pub entity: Entity,
    pub state: AnimationState,
}

impl Message for AnimationFinished {}

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AnimationStateChanged>()
            .add_message::<AnimationFinished>()
            .add_systems(
                Update,
                (
                    player_animation_states,
                    update_animation_frames,
                    sync_sprite_facing,
                    log_animation_events,
                )
                    .chain()
                    .run_if(gameplay_active),
            );
    }
}

/// Picks the animation for the current movement situation. Airborne states
/// split on vertical velocity so the apex flips jump into fall.
pub(crate) fn target_animation(
    on_ground: bool,
    wall_sliding: bool,
    velocity: Vec2,
) -> AnimationState {
    if !on_ground {
        if wall_sliding {
            AnimationState::WallSlide
        } else if velocity.y > 0.0 {
            AnimationState::Jump
        } else {
            AnimationState::Fall
        }
    } else if velocity.x.abs() > RUN_ANIMATION_THRESHOLD {
        AnimationState::Run
    } else {
        AnimationState::Idle
    }
}

/// System that applies animation state based on movement state.
pub(crate) fn player_animation_states(
    mut query: Query<
        (
            Entity,
            &MovementState,
            &LinearVelocity,
            &mut AnimationController,
        ),
        With<Player>,
    >,
    mut changed_events: MessageWriter<AnimationStateChanged>,
) {
    for (entity, state, velocity, mut controller) in &mut query {
        let next = target_animation(state.on_ground, state.is_wall_sliding, velocity.0);
        if controller.state != next {
            let from = controller.state;
            controller.set_state(next);
            changed_events.write(AnimationStateChanged {
                entity,
                from,
                to: next,
            });
        }
    }
}

/// System that updates animation frames based on time.
pub(crate) fn update_animation_frames(
    time: Res<Time>,
    mut query: Query<(Entity, &mut AnimationController)>,
    mut finished_events: MessageWriter<AnimationFinished>,
) {
    for (entity, mut controller) in &mut query {
        if controller.finished {
            continue;
        }

        controller.frame_timer += time.delta_secs();

        if controller.frame_timer >= controller.frame_duration {
            controller.frame_timer -= controller.frame_duration;
            controller.current_frame += 1;

            if controller.current_frame >= controller.total_frames {
                if controller.looping {
                    controller.current_frame = 0;
                } else {
                    controller.current_frame = controller.total_frames - 1;
                    controller.finished = true;
                    finished_events.write(AnimationFinished {
                        entity,
                        state: controller.state,
                    });
                }
            }
        }
    }
}

/// System that mirrors the player sprite to match facing.
pub(crate) fn sync_sprite_facing(
    mut query: Query<(&MovementState, &mut Sprite), With<Player>>,
) {
    for (state, mut sprite) in &mut query {
        sprite.flip_x = state.facing == Facing::Left;
    }
}

/// Trace-level record of animation transitions, useful when tuning the
/// state thresholds.
pub(crate) fn log_animation_events(
    mut changes: MessageReader<AnimationStateChanged>,
    mut finishes: MessageReader<AnimationFinished>,
) {
    for change in changes.read() {
        debug!("[ANIM] {} -> {}", change.from.label(), change.to.label());
    }
    for finish in finishes.read() {
        debug!("[ANIM] {} held on its last frame", finish.state.label());
    }
}
