//! Debug domain: developer tooling for fast iteration.
//!
//! Behind the `dev-tools` feature. F1 or backtick opens a panel of
//! buttons; every button has a Ctrl-chord twin that works with the
//! panel closed. Both paths write the same [`DebugAction`] message and
//! one executor applies them, so panel and hotkeys cannot drift apart.

use bevy::prelude::*;

mod state;
mod systems;
mod ui;

pub use state::{DebugAction, DebugState};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_message::<DebugAction>()
            .add_systems(
                Update,
                (
                    systems::toggle_debug_ui,
                    systems::handle_debug_hotkeys,
                    systems::handle_debug_buttons,
                    systems::execute_debug_actions,
                    systems::update_status_message,
                    systems::apply_invincibility,
                    systems::update_debug_info_overlay,
                )
                    .chain(),
            );
    }
}
