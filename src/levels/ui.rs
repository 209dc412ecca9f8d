//! Levels domain: door prompt overlay.

use bevy::prelude::*;

use crate::items::{Inventory, ItemKind};
use crate::levels::components::{DoorEnabled, DoorGate};
use crate::levels::data::DoorRule;
use crate::levels::session::PlayerAtDoor;
use crate::movement::Player;

#[derive(Component)]
pub(crate) struct DoorTooltip;

#[derive(Component)]
pub(crate) struct DoorTooltipText;

/// Shows a prompt while the player stands at a door, with the lock
/// reason when the door is not usable yet.
pub(crate) fn update_door_tooltip(
    mut commands: Commands,
    inventory: Res<Inventory>,
    player_query: Query<&PlayerAtDoor, With<Player>>,
    door_query: Query<(&DoorGate, Has<DoorEnabled>)>,
    tooltip_query: Query<Entity, With<DoorTooltip>>,
    mut text_query: Query<&mut Text, With<DoorTooltipText>>,
) {
    let wanted = player_query
        .single()
        .ok()
        .and_then(|at| door_query.get(at.door).ok())
        .map(|(gate, enabled)| tooltip_text(gate, enabled, inventory.count(ItemKind::Key)));

    match (wanted, tooltip_query.single()) {
        (Some(text), Ok(_)) => {
            let Ok(mut existing) = text_query.single_mut() else {
                return;
            };
            if existing.0 != text {
                existing.0 = text;
            }
        }
        (Some(text), Err(_)) => {
            spawn_tooltip(&mut commands, text);
        }
        (None, Ok(entity)) => {
            commands.entity(entity).despawn();
        }
        (None, Err(_)) => {}
    }
}

pub(crate) fn cleanup_door_tooltip(
    mut commands: Commands,
    tooltip_query: Query<Entity, With<DoorTooltip>>,
) {
    for entity in tooltip_query.iter() {
        commands.entity(entity).despawn();
    }
}

fn spawn_tooltip(commands: &mut Commands, text: String) {
    commands
        .spawn((
            DoorTooltip,
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(96.0),
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
            ZIndex(5),
        ))
        .with_children(|parent| {
            parent.spawn((
                DoorTooltipText,
                Text::new(text),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.92, 0.92, 0.92)),
                Node {
                    padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
                    ..default()
                },
                BackgroundColor(Color::srgba(0.05, 0.05, 0.08, 0.75)),
            ));
        });
}

pub(crate) fn tooltip_text(gate: &DoorGate, enabled: bool, keys_held: u32) -> String {
    if enabled {
        return "Press [E] to enter".to_string();
    }
    match &gate.rule {
        DoorRule::RequiresKeys(needed) => {
            format!("Locked: {}/{} keys", keys_held.min(*needed), needed)
        }
        DoorRule::EnemiesCleared => "Locked: enemies remain".to_string(),
        DoorRule::Always => "Press [E] to enter".to_string(),
    }
}
