//! UI domain: main menu presentation and run start flow.

use bevy::app::AppExit;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::content::GameContent;
use crate::core::GameState;
use crate::levels::{CurrentLevel, LevelLibrary};

/// Marker for the main menu root
#[derive(Component, Debug)]
pub struct MainMenuUI;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Start,
    Quit,
}

/// Button on the main menu
#[derive(Component, Debug)]
pub struct MenuButton {
    pub action: MenuAction,
}

const MENU_PANEL_COLOR: Color = Color::srgb(0.12, 0.14, 0.18);
const MENU_PANEL_HOVER_COLOR: Color = Color::srgb(0.18, 0.21, 0.27);
const MENU_BORDER_COLOR: Color = Color::srgb(0.35, 0.42, 0.5);
const MENU_BORDER_HOVER_COLOR: Color = Color::srgb(0.6, 0.75, 0.85);

pub(crate) fn spawn_main_menu(mut commands: Commands, library: Res<LevelLibrary>) {
    let text_color = Color::srgb(0.9, 0.9, 0.9);
    let muted_text = Color::srgb(0.55, 0.6, 0.68);
    let title_color = Color::srgb(0.6, 0.8, 0.88);

    commands
        .spawn((
            MainMenuUI,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgb(0.04, 0.05, 0.08)),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("CRAGFALL"),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(title_color),
                Node {
                    margin: UiRect::bottom(Val::Px(10.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new("Climb. Fall. Climb again."),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(text_color),
                Node {
                    margin: UiRect::bottom(Val::Px(50.0)),
                    ..default()
                },
            ));

            spawn_menu_button(parent, MenuAction::Start, "START", "[Enter]", muted_text);
            spawn_menu_button(parent, MenuAction::Quit, "QUIT", "[Q]", muted_text);

            parent.spawn((
                Text::new(format!("{} levels loaded", library.levels.len())),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(muted_text),
                Node {
                    margin: UiRect::top(Val::Px(40.0)),
                    ..default()
                },
            ));
        });
}

fn spawn_menu_button(
    parent: &mut ChildSpawnerCommands,
    action: MenuAction,
    label: &str,
    key_hint: &str,
    hint_color: Color,
) {
    parent
        .spawn((
            MenuButton { action },
            Button,
            Node {
                width: Val::Px(260.0),
                padding: UiRect::axes(Val::Px(30.0), Val::Px(14.0)),
                margin: UiRect::bottom(Val::Px(16.0)),
                border: UiRect::all(Val::Px(2.0)),
                justify_content: JustifyContent::SpaceBetween,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Row,
                ..default()
            },
            BackgroundColor(MENU_PANEL_COLOR),
            BorderColor::all(MENU_BORDER_COLOR),
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(label),
                TextFont {
                    font_size: 26.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
            ));
            button.spawn((
                Text::new(key_hint),
                TextFont {
                    font_size: 15.0,
                    ..default()
                },
                TextColor(hint_color),
            ));
        });
}

pub(crate) fn cleanup_main_menu(mut commands: Commands, query: Query<Entity, With<MainMenuUI>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

pub(crate) fn handle_menu_keyboard(
    keyboard: Res<ButtonInput<KeyCode>>,
    content: Res<GameContent>,
    library: Res<LevelLibrary>,
    mut current_level: ResMut<CurrentLevel>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Enter) || keyboard.just_pressed(KeyCode::NumpadEnter) {
        start_run(&content, &library, &mut current_level, &mut next_state);
    }
    if keyboard.just_pressed(KeyCode::KeyQ) {
        info!("Quit requested from the main menu");
        exit.write(AppExit::Success);
    }
}

pub(crate) fn handle_menu_buttons(
    mut button_query: Query<
        (
            &MenuButton,
            &Interaction,
            &mut BackgroundColor,
            &mut BorderColor,
        ),
        Changed<Interaction>,
    >,
    content: Res<GameContent>,
    library: Res<LevelLibrary>,
    mut current_level: ResMut<CurrentLevel>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<AppExit>,
) {
    for (button, interaction, mut bg_color, mut border_color) in &mut button_query {
        match interaction {
            Interaction::Pressed => match button.action {
                MenuAction::Start => {
                    start_run(&content, &library, &mut current_level, &mut next_state);
                }
                MenuAction::Quit => {
                    info!("Quit requested from the main menu");
                    exit.write(AppExit::Success);
                }
            },
            Interaction::Hovered => {
                *bg_color = BackgroundColor(MENU_PANEL_HOVER_COLOR);
                *border_color = BorderColor::all(MENU_BORDER_HOVER_COLOR);
            }
            Interaction::None => {
                *bg_color = BackgroundColor(MENU_PANEL_COLOR);
                *border_color = BorderColor::all(MENU_BORDER_COLOR);
            }
        }
    }
}

fn start_run(
    content: &GameContent,
    library: &LevelLibrary,
    current_level: &mut CurrentLevel,
    next_state: &mut NextState<GameState>,
) {
    let Some(id) = chosen_start_level(content.config.start_level.as_deref(), library) else {
        error!("No levels available, staying in the menu");
        return;
    };
    info!("Starting run at '{}'", id);
    current_level.0 = id;
    next_state.set(GameState::InGame);
}

/// Resolves which level a fresh run begins in. A missing or unknown
/// configured id falls back to the first library level with a warning.
pub(crate) fn chosen_start_level(
    configured: Option<&str>,
    library: &LevelLibrary,
) -> Option<String> {
    match configured {
        Some(id) if library.get(id).is_some() => Some(id.to_string()),
        Some(id) => {
            warn!("Start level '{}' is not in the library, using the first level", id);
            library.first_id().map(str::to_string)
        }
        None => {
            warn!("No start level configured, using the first level");
            library.first_id().map(str::to_string)
        }
    }
}
