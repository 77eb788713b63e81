//! Movement domain: the player's kinematic state machine and input.

mod components;
pub mod controller;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{Facing, KinematicState, WallContact};
pub use controller::MotionContext;
pub use resources::{MovementTuning, PlayerInput};
pub use systems::InputLatch;

use bevy::prelude::*;

use crate::core::{GameState, gameplay_active};
use crate::movement::systems::{drop_paused_input, read_input};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputLatch>().add_systems(
            Update,
            (
                read_input.run_if(in_state(GameState::Playing).and(gameplay_active)),
                drop_paused_input.run_if(not(gameplay_active)),
            ),
        );
    }
}
