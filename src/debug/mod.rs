//! Debug tooling for fast iteration, built with the `dev-tools` feature.
//!
//! Hotkeys (hold Ctrl):
//! - I: toggle invincibility
//! - L: toggle periodic player state logging
//! - H: full heal
//! - G: grant every ability
//! - 1..9: warp to a level

mod state;
mod systems;

pub use state::DebugState;

use bevy::prelude::*;

use crate::core::GameState;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                systems::handle_debug_hotkeys.run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                FixedUpdate,
                (systems::apply_invincibility, systems::log_player_state)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
