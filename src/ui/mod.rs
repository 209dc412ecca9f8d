//! UI domain: menus, pause overlay and the in-run HUD.

mod hud;
mod inventory;
mod menu;
mod pause;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::core::{GameState, PauseState};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::MainMenu), menu::spawn_main_menu)
            .add_systems(OnExit(GameState::MainMenu), menu::cleanup_main_menu)
            .add_systems(
                Update,
                (menu::handle_menu_keyboard, menu::handle_menu_buttons)
                    .run_if(in_state(GameState::MainMenu)),
            )
            .add_systems(OnEnter(GameState::InGame), hud::spawn_hud)
            .add_systems(
                OnExit(GameState::InGame),
                (hud::cleanup_hud, inventory::cleanup_inventory_panel),
            )
            .add_systems(
                Update,
                (
                    hud::update_health_bar,
                    hud::update_item_counts,
                    inventory::toggle_inventory_panel,
                )
                    .run_if(in_state(GameState::InGame)),
            )
            .add_systems(OnEnter(PauseState::Paused), pause::spawn_pause_menu)
            .add_systems(OnExit(PauseState::Paused), pause::cleanup_pause_menu)
            .add_systems(
                Update,
                pause::handle_pause_menu_buttons.run_if(in_state(PauseState::Paused)),
            );
    }
}
