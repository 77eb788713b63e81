//! Data definitions for all RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. The ContentRegistry provides lookup by id.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::abilities::{Ability, CollectibleKind};
use crate::actors::ActorTuning;
use crate::combat::CombatTuning;
use crate::movement::MovementTuning;
use crate::physics::Aabb;

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Levels (levels.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelDef {
    pub id: String,
    pub name: String,
    pub player_spawn: (f32, f32),
    pub obstacles: Vec<ObstacleDef>,
    #[serde(default)]
    pub transitions: Vec<TransitionDef>,
    #[serde(default)]
    pub collectibles: Vec<CollectibleDef>,
    #[serde(default)]
    pub actors: Vec<ActorSpawnDef>,
}

/// Static geometry. Runs lay out `count` square tiles of side `tile`
/// starting at (x, y).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub enum ObstacleDef {
    Rect { x: f32, y: f32, w: f32, h: f32 },
    Row { x: f32, y: f32, count: u32, tile: f32 },
    Column { x: f32, y: f32, count: u32, tile: f32 },
}

impl ObstacleDef {
    /// Expand into the rectangles the resolver works with.
    pub fn rects(&self) -> Vec<Aabb> {
        match *self {
            ObstacleDef::Rect { x, y, w, h } => vec![Aabb::new(x, y, w, h)],
            ObstacleDef::Row { x, y, count, tile } => (0..count)
                .map(|i| Aabb::new(x + i as f32 * tile, y, tile, tile))
                .collect(),
            ObstacleDef::Column { x, y, count, tile } => (0..count)
                .map(|i| Aabb::new(x, y + i as f32 * tile, tile, tile))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransitionDef {
    pub rect: Aabb,
    pub target: String,
    pub spawn: (f32, f32),
    #[serde(default)]
    pub requires: Option<Ability>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CollectibleDef {
    /// Unique across all levels; saves record collected pickups by id.
    pub id: String,
    pub rect: Aabb,
    pub kind: CollectibleKind,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum ActorSpawnKind {
    Enemy,
    Boss,
    Npc {
        name: String,
        #[serde(default)]
        dialog_key: Option<String>,
    },
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ActorSpawnDef {
    pub kind: ActorSpawnKind,
    pub x: f32,
    pub y: f32,
}

// ============================================================================
// Gameplay Defaults (gameplay_defaults.ron) - Single struct, not a list
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Resource)]
pub struct GameplayDefaults {
    pub schema_version: u32,
    pub start_level: String,
    #[serde(default)]
    pub starting_abilities: Vec<Ability>,
    #[serde(default)]
    pub movement: MovementTuning,
    #[serde(default)]
    pub combat: CombatTuning,
    #[serde(default)]
    pub actors: ActorTuning,
}

impl GameplayDefaults {
    pub fn builtin(start_level: impl Into<String>) -> Self {
        Self {
            schema_version: 1,
            start_level: start_level.into(),
            starting_abilities: Vec::new(),
            movement: MovementTuning::default(),
            combat: CombatTuning::default(),
            actors: ActorTuning::default(),
        }
    }
}
