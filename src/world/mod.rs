//! World domain: the level, player and actors advanced together each tick.

mod events;
mod sim;
mod systems;

pub use events::LevelEnteredEvent;
pub use sim::{GameplayTuning, PlayerSnapshot, SimWorld, TickReport, WorldError};

use bevy::prelude::*;

use crate::core::{GameState, gameplay_active};

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<LevelEnteredEvent>()
            .add_systems(PostStartup, systems::setup_world)
            .add_systems(
                FixedUpdate,
                systems::run_tick.run_if(in_state(GameState::Playing).and(gameplay_active)),
            )
            .add_systems(
                Update,
                systems::interact_with_npc.run_if(in_state(GameState::Playing)),
            );
    }
}
