//! Level domain: the runtime form of a level definition.
//!
//! Obstacles are fixed for the lifetime of a `Level`; the resolver borrows
//! them read-only for every tick.

mod spawn;

pub use spawn::spawn_actors;

use bevy::prelude::*;
use std::collections::HashSet;

use crate::abilities::{Ability, AbilityFlags, Collectible};
use crate::content::LevelDef;
use crate::physics::{Aabb, Obstacle};

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub rect: Aabb,
    pub target: String,
    pub spawn: Vec2,
    pub requires: Option<Ability>,
}

impl Transition {
    pub fn is_open(&self, abilities: &AbilityFlags) -> bool {
        self.requires.is_none_or(|ability| abilities.has(ability))
    }
}

#[derive(Debug, Clone)]
pub struct Level {
    pub id: String,
    pub name: String,
    pub player_spawn: Vec2,
    pub transitions: Vec<Transition>,
    pub collectibles: Vec<Collectible>,
    obstacles: Vec<Obstacle>,
}

impl Level {
    /// Build from a definition. Pickups whose id is in `collected` are left
    /// out.
    pub fn from_def(def: &LevelDef, collected: &HashSet<String>) -> Self {
        let obstacles = def.obstacles.iter().flat_map(|o| o.rects()).collect();
        let transitions = def
            .transitions
            .iter()
            .map(|t| Transition {
                rect: t.rect,
                target: t.target.clone(),
                spawn: Vec2::new(t.spawn.0, t.spawn.1),
                requires: t.requires,
            })
            .collect();
        let collectibles = def
            .collectibles
            .iter()
            .filter(|c| !collected.contains(&c.id))
            .map(|c| Collectible::new(c.id.clone(), c.rect, c.kind))
            .collect();

        Self {
            id: def.id.clone(),
            name: def.name.clone(),
            player_spawn: Vec2::new(def.player_spawn.0, def.player_spawn.1),
            transitions,
            collectibles,
            obstacles,
        }
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// First open transition the player box overlaps.
    pub fn transition_at(&self, player: &Aabb, abilities: &AbilityFlags) -> Option<&Transition> {
        self.transitions
            .iter()
            .find(|t| t.rect.overlaps(player) && t.is_open(abilities))
    }

    /// Union of all obstacles, for camera limits.
    pub fn bounds(&self) -> Option<Aabb> {
        let first = self.obstacles.first()?;
        let (mut left, mut top, mut right, mut bottom) =
            (first.left(), first.top(), first.right(), first.bottom());
        for obstacle in &self.obstacles[1..] {
            left = left.min(obstacle.left());
            top = top.min(obstacle.top());
            right = right.max(obstacle.right());
            bottom = bottom.max(obstacle.bottom());
        }
        Some(Aabb::new(left, top, right - left, bottom - top))
    }
}
