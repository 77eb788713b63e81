//! Render domain: sprites that follow the simulation. Purely a view; nothing
//! here writes back into the world.

mod components;
mod hud;
mod systems;

pub use hud::health_color;
pub use systems::{camera_target, to_translation};

use bevy::prelude::*;

use crate::core::GameState;

pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::srgb(0.08, 0.08, 0.12)))
            .add_systems(
                OnEnter(GameState::Playing),
                (systems::spawn_player_sprite, hud::spawn_hud),
            )
            .add_systems(
                Update,
                (
                    systems::rebuild_level,
                    systems::sync_player,
                    systems::sync_actors,
                    systems::despawn_collected,
                    systems::follow_player,
                    hud::update_hud,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
