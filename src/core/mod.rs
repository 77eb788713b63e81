//! Core domain: configuration, top-level state, pause and camera.

mod config;
mod resources;
mod state;
mod systems;
#[cfg(test)]
mod tests;

pub use config::{CONFIG_PATH, ConfigLoadError, ConfigStatus, GameConfig, WindowConfig};
pub use resources::{GameplayPaused, gameplay_active};
pub use state::GameState;

use bevy::prelude::*;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<GameplayPaused>()
            .init_resource::<ConfigStatus>()
            .add_systems(
                Startup,
                (systems::setup_camera, config::report_config_status),
            )
            .add_systems(
                Update,
                systems::toggle_pause.run_if(in_state(GameState::Playing)),
            );
    }
}
