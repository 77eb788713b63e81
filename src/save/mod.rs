//! Save domain: progress persisted as JSON.

mod data;
mod systems;
#[cfg(test)]
mod tests;

pub use data::{SAVE_VERSION, SaveData, SaveError, load_progress, save_progress};

use bevy::prelude::*;

use crate::core::GameState;

pub struct SavePlugin;

impl Plugin for SavePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (systems::quick_save, systems::quick_load).run_if(in_state(GameState::Playing)),
        );
    }
}
