//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
    /// Enemy characters
    Enemy,
    /// Sensors (doors, kill zones) - should not block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Per-frame movement state for the player controller. Volatile fields are
/// reset on respawn, the facing survives.
#[derive(Component, Debug, Default)]
pub struct MovementState {
    pub on_ground: bool,
    pub on_wall: bool,
    pub facing: Facing,
    /// Counts down after leaving the ground; jumping is allowed while > 0.
    pub coyote_timer: f32,
    /// Counts down after a jump fires; the held key cannot fire again
    /// until it reaches zero.
    pub jump_lockout: f32,
    pub is_jumping: bool,
    pub jumps_used: u8,
    pub wall_jumps_used: u8,
    /// Side of the last wall jump. Jumping off the same side twice in a
    /// row is rejected until the player grounds or switches walls.
    pub last_wall_jump: Option<WallSide>,
    /// Seconds spent in the current wall slide. The braking assist fades
    /// out as this approaches the slide duration.
    pub wall_slide_time: f32,
    pub is_wall_sliding: bool,
}

impl MovementState {
    /// Clears everything transient after a teleport or respawn.
    pub fn reset_volatile(&mut self) {
        self.on_ground = false;
        self.on_wall = false;
        self.coyote_timer = 0.0;
        self.jump_lockout = 0.0;
        self.is_jumping = false;
        self.jumps_used = 0;
        self.wall_jumps_used = 0;
        self.last_wall_jump = None;
        self.wall_slide_time = 0.0;
        self.is_wall_sliding = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSide {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}
