//! UI domain: inventory panel toggled during a run.

use bevy::prelude::*;

use crate::items::{Inventory, ItemKind};

/// Marker for the inventory panel root
#[derive(Component, Debug)]
pub struct InventoryPanelUI;

/// Opens or closes the panel with I. The listing is rebuilt each time the
/// panel opens, so counts reflect the moment of opening.
pub(crate) fn toggle_inventory_panel(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    inventory: Res<Inventory>,
    panel_query: Query<Entity, With<InventoryPanelUI>>,
) {
    if !keyboard.just_pressed(KeyCode::KeyI) {
        return;
    }
    // Ctrl+I belongs to the dev tooling
    if keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight) {
        return;
    }

    if let Ok(panel) = panel_query.single() {
        commands.entity(panel).despawn();
        return;
    }

    spawn_inventory_panel(&mut commands, &inventory);
}

fn spawn_inventory_panel(commands: &mut Commands, inventory: &Inventory) {
    commands
        .spawn((
            InventoryPanelUI,
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(16.0),
                top: Val::Px(16.0),
                width: Val::Px(220.0),
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(14.0)),
                row_gap: Val::Px(10.0),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.08, 0.09, 0.12, 0.95)),
            BorderColor::all(Color::srgb(0.35, 0.42, 0.5)),
            ZIndex(50),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("INVENTORY"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
            ));

            for kind in ItemKind::ALL {
                spawn_item_line(parent, kind, inventory.count(kind));
            }

            parent.spawn((
                Text::new("[I] close"),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::srgb(0.5, 0.5, 0.55)),
            ));
        });
}

fn spawn_item_line(parent: &mut ChildSpawnerCommands, kind: ItemKind, count: u32) {
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            column_gap: Val::Px(10.0),
            ..default()
        })
        .with_children(|row| {
            row.spawn((
                Node {
                    width: Val::Px(14.0),
                    height: Val::Px(14.0),
                    ..default()
                },
                BackgroundColor(kind.color()),
            ));
            row.spawn((
                Text::new(format!("{} x{}", kind.label(), count)),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.85)),
            ));
        });
}

pub(crate) fn cleanup_inventory_panel(
    mut commands: Commands,
    query: Query<Entity, With<InventoryPanelUI>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
