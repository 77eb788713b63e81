//! Render domain: marker components for drawn entities.

use bevy::prelude::*;

/// Anything spawned for the current level; despawned on level change.
#[derive(Component, Debug)]
pub struct LevelSprite;

#[derive(Component, Debug)]
pub struct CollectibleSprite {
    pub id: String,
}

#[derive(Component, Debug)]
pub struct PlayerSprite;

/// Drawn copy of the actor at this index in the world's actor list.
#[derive(Component, Debug)]
pub struct ActorSprite(pub usize);
