mod abilities;
mod actors;
mod combat;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod level;
mod movement;
mod physics;
mod render;
mod save;
mod world;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::WindowResolution;
use std::path::Path;

fn main() {
    let (config, config_error) = core::GameConfig::load_or_default(Path::new(core::CONFIG_PATH));

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: config.window.title.clone(),
                    resolution: WindowResolution::new(config.window.width, config.window.height),
                    resizable: config.window.resizable,
                    ..default()
                }),
                ..default()
            })
            .set(LogPlugin {
                level: config.level(),
                filter: config.log_filter.clone(),
                ..default()
            }),
    )
    .insert_resource(Time::<Fixed>::from_hz(config.tick_hz))
    .insert_resource(core::ConfigStatus {
        error: config_error.map(|e| e.to_string()),
    })
    .insert_resource(config)
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        movement::MovementPlugin,
        world::WorldPlugin,
        render::RenderPlugin,
        save::SavePlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
