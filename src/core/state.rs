//! Core domain: top-level game state.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Config and content are loading; the world does not exist yet.
    #[default]
    Boot,
    Playing,
}
