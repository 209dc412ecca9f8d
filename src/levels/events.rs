//! Levels domain: level transition messages.

use bevy::ecs::message::Message;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelTransition {
    /// Swap to the named level.
    To(String),
    /// Rebuild the current level from scratch.
    Reload,
    /// Final door entered; the run is over.
    Complete,
}

impl Message for LevelTransition {}
