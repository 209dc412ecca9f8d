//! Debug domain: state and action definitions for debug tooling.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the debug panel is visible
    pub ui_visible: bool,
    /// Whether the player is invincible
    pub invincible: bool,
    /// Whether to show the movement info overlay
    pub show_info: bool,
    /// Message to display temporarily in the debug panel
    pub status_message: Option<(String, f32)>,
}

impl DebugState {
    /// Set a status message that will fade after a duration
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }
}

/// Actions that can be triggered from the debug panel or its hotkeys.
/// Both input paths write the same message, one executor applies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugAction {
    ToggleInvincible,
    FullHeal,
    Respawn,
    ReloadLevel,
    WarpNextLevel,
    KillAllEnemies,
    GiveKey,
    DumpSnapshot,
    ToggleInfo,
    Close,
}

impl Message for DebugAction {}
