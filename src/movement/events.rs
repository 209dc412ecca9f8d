//! Movement domain: messages other domains react to (audio, animation).

use bevy::ecs::message::Message;

#[derive(Debug, Clone, Copy)]
pub struct PlayerJumped {
    pub wall_jump: bool,
}

impl Message for PlayerJumped {}

#[derive(Debug, Clone, Copy)]
pub struct PlayerLanded;

impl Message for PlayerLanded {}
