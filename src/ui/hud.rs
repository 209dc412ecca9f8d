//! UI domain: in-run HUD with the player health bar and item counters.

use bevy::prelude::*;

use crate::enemies::Health;
use crate::items::{Inventory, ItemKind};
use crate::movement::Player;

const HEALTHBAR_WIDTH: f32 = 200.0;
const HEALTHBAR_HEIGHT: f32 = 20.0;
const HUD_PADDING: f32 = 16.0;

/// Marker for the HUD root container
#[derive(Component)]
pub struct HudRoot;

/// Marker for the health bar fill element
#[derive(Component)]
pub struct HealthBarFill;

/// Count text for one item kind
#[derive(Component)]
pub struct ItemCountText {
    pub kind: ItemKind,
}

/// Item kinds with a HUD counter. Hearts heal on pickup and are never held.
const COUNTED_KINDS: [ItemKind; 2] = [ItemKind::Gem, ItemKind::Key];

pub(crate) fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            HudRoot,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(8.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            // Health bar with a fill element resized by percent
            parent
                .spawn((
                    Node {
                        width: Val::Px(HEALTHBAR_WIDTH),
                        height: Val::Px(HEALTHBAR_HEIGHT),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
                    BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
                ))
                .with_child((
                    HealthBarFill,
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Percent(100.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.2, 0.8, 0.3)),
                ));

            for kind in COUNTED_KINDS {
                spawn_item_row(parent, kind);
            }
        });
}

fn spawn_item_row(parent: &mut ChildSpawnerCommands, kind: ItemKind) {
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            column_gap: Val::Px(8.0),
            ..default()
        })
        .with_children(|row| {
            // Icon (colored square)
            row.spawn((
                Node {
                    width: Val::Px(16.0),
                    height: Val::Px(16.0),
                    ..default()
                },
                BackgroundColor(kind.color()),
            ));
            row.spawn((
                ItemCountText { kind },
                Text::new("0"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.85, 0.85)),
            ));
        });
}

pub(crate) fn cleanup_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

pub(crate) fn update_health_bar(
    player_query: Query<&Health, With<Player>>,
    mut fill_query: Query<(&mut Node, &mut BackgroundColor), With<HealthBarFill>>,
) {
    let Ok(health) = player_query.single() else {
        return;
    };

    for (mut node, mut bg_color) in &mut fill_query {
        let percent = health.percent();
        node.width = Val::Percent(percent * 100.0);

        // Color gradient: green -> yellow -> red
        let color = if percent > 0.5 {
            let t = (percent - 0.5) * 2.0;
            Color::srgb(1.0 - t * 0.8, 0.8, 0.3 * (1.0 - t))
        } else {
            let t = percent * 2.0;
            Color::srgb(0.9, 0.2 + t * 0.6, 0.2)
        };
        bg_color.0 = color;
    }
}

pub(crate) fn update_item_counts(
    inventory: Res<Inventory>,
    mut query: Query<(&ItemCountText, &mut Text)>,
) {
    if !inventory.is_changed() {
        return;
    }
    for (counter, mut text) in &mut query {
        **text = format!("{}", inventory.count(counter.kind));
    }
}
