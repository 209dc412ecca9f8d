//! UI domain: pause overlay shown while the clocks stand still.

use bevy::app::AppExit;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::PauseState;

/// Marker for the pause overlay root
#[derive(Component, Debug)]
pub struct PauseMenuUI;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseAction {
    Resume,
    Quit,
}

/// Button on the pause overlay
#[derive(Component, Debug)]
pub struct PauseButton {
    pub action: PauseAction,
}

const PAUSE_BUTTON_COLOR: Color = Color::srgb(0.2, 0.2, 0.25);
const PAUSE_BUTTON_HOVER_COLOR: Color = Color::srgb(0.28, 0.28, 0.35);

pub(crate) fn spawn_pause_menu(mut commands: Commands) {
    commands
        .spawn((
            PauseMenuUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            // Translucent so the frozen scene stays visible behind it
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("PAUSED"),
                TextFont {
                    font_size: 56.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                },
            ));

            spawn_pause_button(parent, PauseAction::Resume, "RESUME");
            spawn_pause_button(parent, PauseAction::Quit, "QUIT");

            parent.spawn((
                Text::new("Press [Esc] to resume"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.5, 0.5, 0.55)),
                Node {
                    margin: UiRect::top(Val::Px(24.0)),
                    ..default()
                },
            ));
        });
}

fn spawn_pause_button(parent: &mut ChildSpawnerCommands, action: PauseAction, label: &str) {
    parent
        .spawn((
            PauseButton { action },
            Button,
            Node {
                width: Val::Px(220.0),
                padding: UiRect::axes(Val::Px(30.0), Val::Px(12.0)),
                margin: UiRect::bottom(Val::Px(14.0)),
                border: UiRect::all(Val::Px(2.0)),
                justify_content: JustifyContent::Center,
                ..default()
            },
            BackgroundColor(PAUSE_BUTTON_COLOR),
            BorderColor::all(Color::srgb(0.5, 0.5, 0.6)),
        ))
        .with_child((
            Text::new(label),
            TextFont {
                font_size: 24.0,
                ..default()
            },
            TextColor(Color::srgb(0.9, 0.9, 0.9)),
        ));
}

pub(crate) fn cleanup_pause_menu(mut commands: Commands, query: Query<Entity, With<PauseMenuUI>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

pub(crate) fn handle_pause_menu_buttons(
    mut button_query: Query<
        (&PauseButton, &Interaction, &mut BackgroundColor),
        Changed<Interaction>,
    >,
    mut next_pause: ResMut<NextState<PauseState>>,
    mut exit: MessageWriter<AppExit>,
) {
    for (button, interaction, mut bg_color) in &mut button_query {
        match interaction {
            Interaction::Pressed => match button.action {
                PauseAction::Resume => {
                    info!("Game resumed");
                    next_pause.set(PauseState::Running);
                }
                PauseAction::Quit => {
                    info!("Quit requested from the pause menu");
                    exit.write(AppExit::Success);
                }
            },
            Interaction::Hovered => {
                *bg_color = BackgroundColor(PAUSE_BUTTON_HOVER_COLOR);
            }
            Interaction::None => {
                *bg_color = BackgroundColor(PAUSE_BUTTON_COLOR);
            }
        }
    }
}
