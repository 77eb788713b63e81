//! ContentRegistry resource providing HashMap lookups for loaded levels.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::*;

/// Id of the room used when no level content could be loaded.
pub const FALLBACK_LEVEL_ID: &str = "fallback_room";

/// Central registry for all loaded level content.
#[derive(Resource, Default, Debug, Clone)]
pub struct ContentRegistry {
    pub levels: HashMap<String, LevelDef>,
}

impl ContentRegistry {
    pub fn level(&self, id: &str) -> Option<&LevelDef> {
        self.levels.get(id)
    }

    /// Returns a summary of loaded content counts for logging.
    pub fn summary(&self) -> String {
        let obstacles: usize = self.levels.values().map(|l| l.obstacles.len()).sum();
        let collectibles: usize = self.levels.values().map(|l| l.collectibles.len()).sum();
        let actors: usize = self.levels.values().map(|l| l.actors.len()).sum();
        format!(
            "ContentRegistry loaded:\n\
             - Levels: {}\n\
             - Obstacle definitions: {}\n\
             - Collectibles: {}\n\
             - Actor spawns: {}",
            self.levels.len(),
            obstacles,
            collectibles,
            actors,
        )
    }

    /// A single walled room, used when content fails to load so the game
    /// still starts.
    pub fn fallback() -> Self {
        let room = LevelDef {
            id: FALLBACK_LEVEL_ID.to_string(),
            name: "Fallback Room".to_string(),
            player_spawn: (100.0, 400.0),
            obstacles: vec![
                ObstacleDef::Rect { x: 0.0, y: 550.0, w: 1280.0, h: 50.0 },
                ObstacleDef::Rect { x: 0.0, y: 0.0, w: 40.0, h: 550.0 },
                ObstacleDef::Rect { x: 1240.0, y: 0.0, w: 40.0, h: 550.0 },
            ],
            transitions: Vec::new(),
            collectibles: Vec::new(),
            actors: Vec::new(),
        };
        let mut registry = Self::default();
        registry.levels.insert(room.id.clone(), room);
        registry
    }
}
