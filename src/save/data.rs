//! Save domain: the progress snapshot written to disk.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::abilities::{Ability, AbilityFlags};
use crate::content::ContentRegistry;
use crate::world::{SimWorld, WorldError};

pub const SAVE_VERSION: u32 = 1;

#[derive(Debug)]
pub enum SaveError {
    Io(std::io::Error),
    Format(serde_json::Error),
    UnsupportedVersion(u32),
    UnknownLevel(String),
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "Save file IO error: {}", e),
            SaveError::Format(e) => write!(f, "Save file is malformed: {}", e),
            SaveError::UnsupportedVersion(v) => {
                write!(f, "Save version {} is not supported (expected {})", v, SAVE_VERSION)
            }
            SaveError::UnknownLevel(id) => write!(f, "Saved level '{}' does not exist", id),
        }
    }
}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        SaveError::Io(e)
    }
}

impl From<serde_json::Error> for SaveError {
    fn from(e: serde_json::Error) -> Self {
        SaveError::Format(e)
    }
}

impl From<WorldError> for SaveError {
    fn from(e: WorldError) -> Self {
        match e {
            WorldError::UnknownLevel(id) => SaveError::UnknownLevel(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SaveData {
    pub version: u32,
    pub level_id: String,
    pub health: f32,
    pub abilities: Vec<Ability>,
    /// Sorted so identical progress writes identical files
    pub collected: Vec<String>,
}

impl SaveData {
    pub fn from_world(world: &SimWorld) -> Self {
        let mut collected: Vec<String> = world.collected.iter().cloned().collect();
        collected.sort();
        Self {
            version: SAVE_VERSION,
            level_id: world.level.id.clone(),
            health: world.player.health.current,
            abilities: world.abilities.unlocked(),
            collected,
        }
    }

    /// Restore progress into a running world. Ability flags and collected
    /// pickups only ever gain entries, so anything taken since the save is
    /// kept.
    pub fn apply(&self, world: &mut SimWorld, registry: &ContentRegistry) -> Result<(), SaveError> {
        if registry.level(&self.level_id).is_none() {
            return Err(SaveError::UnknownLevel(self.level_id.clone()));
        }

        world.abilities.absorb(&AbilityFlags::with(&self.abilities));
        world.collected.extend(self.collected.iter().cloned());
        world.enter_level(registry, &self.level_id, None)?;

        let health = &mut world.player.health;
        health.current = if self.health > 0.0 {
            self.health.min(health.max)
        } else {
            health.max
        };
        Ok(())
    }
}

pub fn save_progress(world: &SimWorld, path: &Path) -> Result<SaveData, SaveError> {
    let data = SaveData::from_world(world);
    let json = serde_json::to_string_pretty(&data)?;
    fs::write(path, json)?;
    Ok(data)
}

pub fn load_progress(path: &Path) -> Result<SaveData, SaveError> {
    let json = fs::read_to_string(path)?;
    let data: SaveData = serde_json::from_str(&json)?;
    if data.version != SAVE_VERSION {
        return Err(SaveError::UnsupportedVersion(data.version));
    }
    Ok(data)
}
