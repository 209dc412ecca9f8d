//! Movement domain: run, jump, wall jump, and gravity systems.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::events::PlayerJumped;
use crate::movement::systems::sensors::resolve_wall_side;
use crate::movement::{Facing, MovementInput, MovementState, MovementTuning, Player, WallSide};

pub(crate) fn tick_jump_timers(
    time: Res<Time>,
    mut query: Query<&mut MovementState, With<Player>>,
) {
    let dt = time.delta_secs();

    for mut state in &mut query {
        // Coyote window only drains in the air; grounded frames refresh it
        if !state.on_ground && state.coyote_timer > 0.0 {
            state.coyote_timer -= dt;
        }

        if state.jump_lockout > 0.0 {
            state.jump_lockout -= dt;
        }
    }
}

/// Pushes the player toward the input speed with a force proportional to
/// the velocity difference. Ground and air use separate rates.
pub(crate) fn apply_run(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&MovementState, &LinearVelocity, &mut ExternalForce), With<Player>>,
) {
    for (state, velocity, mut force) in &mut query {
        let has_input = input.axis.x.abs() > 0.1;
        let target_vx = input.axis.x * tuning.max_speed;
        let rate = run_rate(&tuning, !state.on_ground, has_input);

        force.apply_force(Vec2::new((target_vx - velocity.x) * rate, 0.0));
    }
}

/// Wall slide braking: while airborne against a wall, falling speed is
/// eased back toward the minimum fall rate. The assist fades out over the
/// slide duration, after which gravity takes over fully.
pub(crate) fn apply_wall_slide(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut MovementState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut state, mut velocity) in &mut query {
        let sliding =
            state.on_wall && !state.on_ground && state.wall_slide_time <= tuning.wall_slide_duration;
        state.is_wall_sliding = sliding;
        if !sliding {
            continue;
        }

        state.is_jumping = false;
        state.wall_slide_time += dt;

        if velocity.y < tuning.wall_slide_min_fall {
            let brake = wall_slide_brake(&tuning, state.wall_slide_time);
            velocity.y = (velocity.y + brake * dt).min(tuning.wall_slide_min_fall);
        }
    }
}

pub(crate) fn apply_wall_jump(
    spatial_query: SpatialQuery,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut jumped: MessageWriter<PlayerJumped>,
    mut query: Query<(&Transform, &mut MovementState, &mut LinearVelocity), With<Player>>,
) {
    if !input.jump_just_pressed {
        return;
    }

    for (transform, mut state, mut velocity) in &mut query {
        if !wall_jump_allowed(&state, &tuning) {
            continue;
        }

        let side = resolve_wall_side(&spatial_query, transform.translation.truncate(), &tuning);
        if state.last_wall_jump == Some(side) {
            debug!("Wall jump rejected: same side {:?} twice in a row", side);
            continue;
        }

        let dir = wall_jump_direction(side);
        velocity.x += tuning.wall_jump_impulse.x * dir;
        velocity.y = tuning.wall_jump_impulse.y;

        state.coyote_timer = 0.0;
        state.wall_slide_time = 0.0;
        state.is_wall_sliding = false;
        state.is_jumping = true;
        state.wall_jumps_used += 1;
        state.last_wall_jump = Some(side);
        state.facing = match side {
            WallSide::Right => Facing::Left,
            WallSide::Left => Facing::Right,
        };

        jumped.write(PlayerJumped { wall_jump: true });
        debug!(
            "Wall jump: side={:?}, wall_jumps_used={}",
            side, state.wall_jumps_used
        );
    }
}

/// Held-key jump. The lockout timer spaces jumps out, so holding the key
/// hops continuously on the ground and consumes air jumps one interval
/// apart when extra jumps are tuned in.
pub(crate) fn apply_jump(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut jumped: MessageWriter<PlayerJumped>,
    mut query: Query<(&mut MovementState, &mut LinearVelocity), With<Player>>,
) {
    if !input.jump_held {
        return;
    }

    for (mut state, mut velocity) in &mut query {
        if !jump_allowed(&state, &tuning) {
            continue;
        }

        velocity.y = tuning.jump_impulse;
        state.coyote_timer = 0.0;
        state.jump_lockout = tuning.jump_buffer_time;
        state.is_jumping = true;
        state.jumps_used += 1;

        jumped.write(PlayerJumped { wall_jump: false });
        debug!(
            "Jump: jumps_used={}, lockout={:.2}",
            state.jumps_used, state.jump_lockout
        );
    }
}

/// Switches the body's gravity scale to the fast-fall multiplier once the
/// player is falling past the threshold. Wall slides keep normal gravity.
pub(crate) fn apply_gravity_scale(
    tuning: Res<MovementTuning>,
    mut query: Query<(&MovementState, &LinearVelocity, &mut GravityScale), With<Player>>,
) {
    for (state, velocity, mut gravity_scale) in &mut query {
        let scale = if wants_fast_fall(velocity.y, state.is_wall_sliding, &tuning) {
            tuning.fast_fall_multiplier
        } else {
            1.0
        };
        if gravity_scale.0 != scale {
            gravity_scale.0 = scale;
        }
    }
}

pub(crate) fn update_facing(
    input: Res<MovementInput>,
    mut query: Query<&mut MovementState, With<Player>>,
) {
    for mut state in &mut query {
        if input.axis.x > 0.1 {
            state.facing = Facing::Right;
        } else if input.axis.x < -0.1 {
            state.facing = Facing::Left;
        }
    }
}

// ============================================================================
// Decision helpers
// ============================================================================

pub(crate) fn run_rate(tuning: &MovementTuning, airborne: bool, has_input: bool) -> f32 {
    let base = if has_input { tuning.accel } else { tuning.decel };
    if airborne {
        let mult = if has_input {
            tuning.air_accel_mult
        } else {
            tuning.air_decel_mult
        };
        base * mult
    } else {
        base
    }
}

pub(crate) fn jump_allowed(state: &MovementState, tuning: &MovementTuning) -> bool {
    if state.jump_lockout > 0.0 {
        return false;
    }
    if tuning.extra_jumps > 0 {
        state.jumps_used <= tuning.extra_jumps
    } else {
        state.coyote_timer > 0.0 && !state.is_jumping
    }
}

pub(crate) fn wall_jump_allowed(state: &MovementState, tuning: &MovementTuning) -> bool {
    state.is_wall_sliding
        && (tuning.max_wall_jumps == 0 || state.wall_jumps_used < tuning.max_wall_jumps)
}

/// Horizontal sign of a wall jump: always away from the wall.
pub(crate) fn wall_jump_direction(side: WallSide) -> f32 {
    match side {
        WallSide::Left => 1.0,
        WallSide::Right => -1.0,
    }
}

pub(crate) fn wants_fast_fall(vy: f32, wall_sliding: bool, tuning: &MovementTuning) -> bool {
    !wall_sliding && vy < tuning.fast_fall_threshold
}

/// Braking strength for the current point in the slide window, fading
/// linearly from the full decel to zero.
pub(crate) fn wall_slide_brake(tuning: &MovementTuning, elapsed: f32) -> f32 {
    if tuning.wall_slide_duration <= 0.0 {
        return 0.0;
    }
    let remaining = (1.0 - elapsed / tuning.wall_slide_duration).clamp(0.0, 1.0);
    tuning.wall_slide_decel * remaining
}
