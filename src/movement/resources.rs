//! Movement domain: tuning and input resources.

use bevy::prelude::*;

use crate::content::MovementTuningDef;

/// World gravity in px/s^2. The controller layers fast-fall scaling on top
/// of this through each body's GravityScale.
pub const WORLD_GRAVITY: f32 = 1400.0;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub max_speed: f32,
    /// Run force rate on the ground. Applied as (target - current) * rate.
    pub accel: f32,
    pub decel: f32,
    /// Multipliers applied to accel/decel while airborne.
    pub air_accel_mult: f32,
    pub air_decel_mult: f32,
    pub jump_impulse: f32,
    pub coyote_time: f32,
    /// Minimum interval between held-key jumps.
    pub jump_buffer_time: f32,
    /// Total jumps while this is nonzero is extra_jumps + 1, grounded or not.
    pub extra_jumps: u8,
    /// Falling faster than this switches gravity to the fast-fall scale.
    pub fast_fall_threshold: f32,
    pub fast_fall_multiplier: f32,
    /// Foot sensor box, relative to the player center.
    pub ground_box_offset: Vec2,
    pub ground_box_size: Vec2,
    /// Master switch for the whole wall interaction set: probe, slide,
    /// and wall jump.
    pub wall_jump_enabled: bool,
    /// Half-width of the wall sensor box and the side probe ray length.
    pub wall_check_distance: f32,
    /// How long the slide assists braking before gravity wins again.
    pub wall_slide_duration: f32,
    /// Upward braking in px/s^2 at the start of a slide, fading to zero
    /// over the slide duration.
    pub wall_slide_decel: f32,
    /// Braking only engages once the player falls at least this fast.
    pub wall_slide_min_fall: f32,
    /// Wall jumps per airborne stretch (0 = unlimited).
    pub max_wall_jumps: u8,
    pub wall_jump_impulse: Vec2,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            max_speed: 320.0,
            accel: 10.0,
            decel: 12.0,
            air_accel_mult: 0.65,
            air_decel_mult: 0.65,
            jump_impulse: 680.0,
            coyote_time: 0.12,
            jump_buffer_time: 0.15,
            extra_jumps: 0, // No double jump by default
            fast_fall_threshold: -30.0,
            fast_fall_multiplier: 2.0,
            ground_box_offset: Vec2::new(0.0, -26.0),
            ground_box_size: Vec2::new(20.0, 8.0),
            wall_jump_enabled: true,
            wall_check_distance: 16.0,
            wall_slide_duration: 0.75,
            wall_slide_decel: 900.0,
            wall_slide_min_fall: -60.0,
            max_wall_jumps: 0, // Unlimited as long as sides alternate
            wall_jump_impulse: Vec2::new(300.0, 600.0),
        }
    }
}

impl MovementTuning {
    /// Calculate the maximum height reachable from a single ground jump.
    /// Uses physics formula: h = v^2 / (2g)
    pub fn single_jump_height(&self) -> f32 {
        self.jump_impulse * self.jump_impulse / (2.0 * WORLD_GRAVITY)
    }

    /// Calculate the maximum height reachable with all available jumps.
    /// This is a conservative estimate - actual height may vary with timing.
    pub fn max_reachable_height(&self) -> f32 {
        self.single_jump_height() * (1.0 + self.extra_jumps as f32)
    }

    /// Calculate max reachable height with a safety margin for comfortable
    /// platforming. The margin accounts for imperfect jump timing and the
    /// player collision box.
    pub fn safe_reachable_height(&self) -> f32 {
        self.max_reachable_height() * 0.8
    }
}

impl From<&MovementTuningDef> for MovementTuning {
    fn from(def: &MovementTuningDef) -> Self {
        Self {
            max_speed: def.max_speed,
            accel: def.accel,
            decel: def.decel,
            air_accel_mult: def.air_accel_mult,
            air_decel_mult: def.air_decel_mult,
            jump_impulse: def.jump_impulse,
            coyote_time: def.coyote_time,
            jump_buffer_time: def.jump_buffer_time,
            extra_jumps: def.extra_jumps,
            fast_fall_threshold: def.fast_fall_threshold,
            fast_fall_multiplier: def.fast_fall_multiplier,
            ground_box_offset: Vec2::new(def.ground_box_offset.0, def.ground_box_offset.1),
            ground_box_size: Vec2::new(def.ground_box_size.0, def.ground_box_size.1),
            wall_jump_enabled: def.wall_jump_enabled,
            wall_check_distance: def.wall_check_distance,
            wall_slide_duration: def.wall_slide_duration,
            wall_slide_decel: def.wall_slide_decel,
            wall_slide_min_fall: def.wall_slide_min_fall,
            max_wall_jumps: def.max_wall_jumps,
            wall_jump_impulse: Vec2::new(def.wall_jump_impulse.0, def.wall_jump_impulse.1),
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub jump_held: bool,
}
