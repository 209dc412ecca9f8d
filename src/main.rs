mod animation;
mod audio;
mod checkpoints;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod effects;
mod enemies;
mod items;
mod levels;
mod movement;
mod ui;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::WORLD_GRAVITY;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Cragfall".to_string(),
            resolution: (1280.0, 720.0).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .insert_resource(Gravity(Vec2::NEG_Y * WORLD_GRAVITY))
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        movement::MovementPlugin,
        checkpoints::CheckpointsPlugin,
        levels::LevelsPlugin,
        enemies::EnemiesPlugin,
        items::ItemsPlugin,
        animation::AnimationPlugin,
        effects::EffectsPlugin,
        audio::AudioPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
