//! World domain: messages for level changes.

use bevy::ecs::message::Message;

/// Sent whenever the world swaps in a level, including the first one.
#[derive(Debug)]
pub struct LevelEnteredEvent {
    pub level_id: String,
}

impl Message for LevelEnteredEvent {}
