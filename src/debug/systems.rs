//! Debug domain: input handling and action execution.

use avian2d::prelude::LinearVelocity;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::checkpoints::RespawnRequested;
use crate::debug::state::{DebugAction, DebugState};
use crate::debug::ui::{
    DebugButton, DebugInfoOverlay, DebugStatusMessage, DebugUI, refresh_debug_ui,
    spawn_debug_info_overlay, spawn_debug_ui,
};
use crate::enemies::{DeathEvent, Enemy, Health, Invulnerable};
use crate::items::{Inventory, ItemKind};
use crate::levels::{CurrentLevel, LevelLibrary, LevelTransition};
use crate::movement::{MovementState, Player};

/// Serialized to JSON when a snapshot dump is requested.
#[derive(serde::Serialize)]
struct StateSnapshot<'a> {
    level: &'a str,
    position: [f32; 2],
    velocity: [f32; 2],
    health: f32,
    max_health: f32,
    on_ground: bool,
    on_wall: bool,
    wall_sliding: bool,
    jumps_used: u8,
    wall_jumps_used: u8,
    gems: u32,
    keys: u32,
    invincible: bool,
}

/// Toggle debug UI with F1 or backtick key
pub(crate) fn toggle_debug_ui(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing_ui: Query<Entity, With<DebugUI>>,
) {
    let toggle = keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote);

    if toggle {
        debug_state.ui_visible = !debug_state.ui_visible;

        if debug_state.ui_visible {
            spawn_debug_ui(&mut commands, &debug_state);
        } else {
            for entity in existing_ui.iter() {
                commands.entity(entity).despawn();
            }
        }

        info!(
            "[DEBUG] Debug UI {}",
            if debug_state.ui_visible { "opened" } else { "closed" }
        );
    }
}

/// Keyboard shortcuts for debug actions. Ctrl-chords work even while the
/// panel is closed; everything routes through the same action message.
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut actions: MessageWriter<DebugAction>,
) {
    let ctrl =
        keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);

    if !ctrl {
        return;
    }

    if keyboard.just_pressed(KeyCode::KeyI) {
        actions.write(DebugAction::ToggleInvincible);
    }
    if keyboard.just_pressed(KeyCode::KeyH) {
        actions.write(DebugAction::FullHeal);
    }
    if keyboard.just_pressed(KeyCode::KeyR) {
        actions.write(DebugAction::Respawn);
    }
    if keyboard.just_pressed(KeyCode::KeyL) {
        actions.write(DebugAction::ReloadLevel);
    }
    if keyboard.just_pressed(KeyCode::KeyN) {
        actions.write(DebugAction::WarpNextLevel);
    }
    if keyboard.just_pressed(KeyCode::KeyK) {
        actions.write(DebugAction::KillAllEnemies);
    }
    if keyboard.just_pressed(KeyCode::KeyG) {
        actions.write(DebugAction::GiveKey);
    }
    if keyboard.just_pressed(KeyCode::KeyS) {
        actions.write(DebugAction::DumpSnapshot);
    }
    if keyboard.just_pressed(KeyCode::KeyD) {
        actions.write(DebugAction::ToggleInfo);
    }
}

/// Panel buttons write the same actions the hotkeys do.
pub(crate) fn handle_debug_buttons(
    interaction_query: Query<(&Interaction, &DebugButton), Changed<Interaction>>,
    mut actions: MessageWriter<DebugAction>,
) {
    for (interaction, button) in interaction_query.iter() {
        if *interaction == Interaction::Pressed {
            actions.write(button.action);
        }
    }
}

/// Single executor for all debug actions, whether they came from a hotkey
/// or a panel button.
pub(crate) fn execute_debug_actions(
    mut commands: Commands,
    mut actions: MessageReader<DebugAction>,
    mut debug_state: ResMut<DebugState>,
    current_level: Res<CurrentLevel>,
    library: Res<LevelLibrary>,
    mut respawns: MessageWriter<RespawnRequested>,
    mut transitions: MessageWriter<LevelTransition>,
    mut deaths: MessageWriter<DeathEvent>,
    mut inventory: ResMut<Inventory>,
    enemies: Query<Entity, With<Enemy>>,
    mut player_query: Query<
        (&Transform, &LinearVelocity, &MovementState, &mut Health),
        With<Player>,
    >,
    existing_ui: Query<Entity, With<DebugUI>>,
) {
    for action in actions.read() {
        match action {
            DebugAction::ToggleInvincible => {
                debug_state.invincible = !debug_state.invincible;
                let label = if debug_state.invincible { "ON" } else { "OFF" };
                debug_state.set_message(format!("Invincibility {}", label), 2.0);
                info!("[DEBUG] Invincibility {}", label);
                refresh_debug_ui(&mut commands, &debug_state, &existing_ui);
            }
            DebugAction::FullHeal => {
                if let Ok((_, _, _, mut health)) = player_query.single_mut() {
                    let missing = health.max - health.current;
                    health.heal(missing);
                    debug_state.set_message("Healed to full", 2.0);
                    info!("[DEBUG] Player healed to {}", health.max);
                }
            }
            DebugAction::Respawn => {
                respawns.write(RespawnRequested);
                debug_state.set_message("Respawning", 2.0);
                info!("[DEBUG] Respawn requested");
            }
            DebugAction::ReloadLevel => {
                transitions.write(LevelTransition::Reload);
                debug_state.set_message(format!("Reloading '{}'", current_level.0), 2.0);
                info!("[DEBUG] Level reload requested");
            }
            DebugAction::WarpNextLevel => {
                if let Some(next_id) = library.next_id_after(&current_level.0) {
                    debug_state.set_message(format!("Warping to '{}'", next_id), 2.0);
                    info!("[DEBUG] Warping to level '{}'", next_id);
                    transitions.write(LevelTransition::To(next_id.to_string()));
                } else {
                    debug_state.set_message("No other level to warp to", 2.0);
                    warn!("[DEBUG] Warp requested but library has no other level");
                }
            }
            DebugAction::KillAllEnemies => {
                let mut count = 0;
                for entity in enemies.iter() {
                    deaths.write(DeathEvent { entity });
                    count += 1;
                }
                debug_state.set_message(format!("Killed {} enemies", count), 2.0);
                info!("[DEBUG] Killed {} enemies", count);
            }
            DebugAction::GiveKey => {
                inventory.add(ItemKind::Key);
                debug_state.set_message(
                    format!("Key added ({} held)", inventory.count(ItemKind::Key)),
                    2.0,
                );
                info!("[DEBUG] Key added to inventory");
            }
            DebugAction::DumpSnapshot => {
                if let Ok((transform, velocity, movement, health)) = player_query.single() {
                    let snapshot = StateSnapshot {
                        level: &current_level.0,
                        position: [transform.translation.x, transform.translation.y],
                        velocity: [velocity.x, velocity.y],
                        health: health.current,
                        max_health: health.max,
                        on_ground: movement.on_ground,
                        on_wall: movement.on_wall,
                        wall_sliding: movement.is_wall_sliding,
                        jumps_used: movement.jumps_used,
                        wall_jumps_used: movement.wall_jumps_used,
                        gems: inventory.count(ItemKind::Gem),
                        keys: inventory.count(ItemKind::Key),
                        invincible: debug_state.invincible,
                    };
                    match serde_json::to_string_pretty(&snapshot) {
                        Ok(json) => {
                            debug_state.set_message("Snapshot dumped to log", 2.0);
                            info!("[DEBUG] State snapshot:\n{}", json);
                        }
                        Err(err) => warn!("[DEBUG] Snapshot serialization failed: {}", err),
                    }
                } else {
                    debug_state.set_message("No player to snapshot", 2.0);
                }
            }
            DebugAction::ToggleInfo => {
                debug_state.show_info = !debug_state.show_info;
                info!(
                    "[DEBUG] Info overlay {}",
                    if debug_state.show_info { "on" } else { "off" }
                );
            }
            DebugAction::Close => {
                debug_state.ui_visible = false;
                for entity in existing_ui.iter() {
                    commands.entity(entity).despawn();
                }
            }
        }
    }
}

/// Count the status message down and mirror it into the panel text.
pub(crate) fn update_status_message(
    time: Res<Time>,
    mut debug_state: ResMut<DebugState>,
    mut text_query: Query<&mut Text, With<DebugStatusMessage>>,
) {
    let mut expired = false;
    if let Some((_, remaining)) = debug_state.status_message.as_mut() {
        *remaining -= time.delta_secs();
        if *remaining <= 0.0 {
            expired = true;
        }
    }
    if expired {
        debug_state.status_message = None;
    }

    for mut text in text_query.iter_mut() {
        let wanted = debug_state
            .status_message
            .as_ref()
            .map(|(message, _)| message.as_str())
            .unwrap_or("");
        if text.as_str() != wanted {
            **text = wanted.to_string();
        }
    }
}

/// While invincible, pin the player's damage grace timer and undo any
/// health loss that slipped through in the same frame.
pub(crate) fn apply_invincibility(
    debug_state: Res<DebugState>,
    mut player_query: Query<(&mut Health, Option<&mut Invulnerable>), With<Player>>,
) {
    if !debug_state.invincible {
        return;
    }

    let Ok((mut health, invulnerable)) = player_query.single_mut() else {
        return;
    };

    if health.current < health.max {
        let missing = health.max - health.current;
        health.heal(missing);
    }

    if let Some(mut invulnerable) = invulnerable {
        invulnerable.timer = 1.0;
    }
}

/// Live readout of player movement state, bottom-left.
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    current_level: Res<CurrentLevel>,
    player_query: Query<(&Transform, &LinearVelocity, &MovementState, &Health), With<Player>>,
    mut overlay_query: Query<(Entity, &mut Text), With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for (entity, _) in overlay_query.iter_mut() {
            commands.entity(entity).despawn();
        }
        return;
    }

    if overlay_query.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    let Ok((transform, velocity, movement, health)) = player_query.single() else {
        return;
    };

    for (_, mut text) in overlay_query.iter_mut() {
        **text = format!(
            "level: {}\npos: ({:.0}, {:.0})\nvel: ({:.0}, {:.0})\nhp: {:.0}/{:.0}\nground: {}  wall: {}  slide: {}\njumps: {}  wall jumps: {}\ninvincible: {}",
            current_level.0,
            transform.translation.x,
            transform.translation.y,
            velocity.x,
            velocity.y,
            health.current,
            health.max,
            movement.on_ground,
            movement.on_wall,
            movement.is_wall_sliding,
            movement.jumps_used,
            movement.wall_jumps_used,
            debug_state.invincible,
        );
    }
}
