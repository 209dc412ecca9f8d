//! Movement domain: system modules for locomotion updates.

pub(crate) mod input;
pub(crate) mod locomotion;
pub(crate) mod sensors;

pub(crate) use input::read_input;
pub(crate) use locomotion::{
    apply_gravity_scale, apply_jump, apply_run, apply_wall_jump, apply_wall_slide,
    tick_jump_timers, update_facing,
};
pub(crate) use sensors::{probe_ground, probe_walls};
