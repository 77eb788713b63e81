//! Actors domain: everything that moves and updates once per tick.
//!
//! The player is the one actor driven by input; enemies, bosses and NPCs are
//! a closed set held in [`ActorKind`]. All of them expose the same
//! capabilities through [`Actor`], so the world never has to probe what a
//! given actor can do.

mod boss;
mod enemy;
mod npc;
mod player;
mod stats;
mod walker;

pub use boss::{Boss, BossPattern};
pub use enemy::{Enemy, EnemyMode};
pub use npc::Npc;
pub use player::Player;
pub use stats::{ActorTuning, BossStats, EnemyStats};
pub use walker::Walker;

use bevy::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::abilities::AbilityFlags;
use crate::combat::{CombatTuning, Strike};
use crate::movement::{MovementTuning, PlayerInput};
use crate::physics::{Aabb, Obstacle};

/// Everything an actor may read during its update.
///
/// `player_box` is the player's box as committed earlier in the same tick;
/// actors never see a half-updated player.
pub struct TickContext<'a> {
    pub obstacles: &'a [Obstacle],
    pub input: &'a PlayerInput,
    pub abilities: &'a AbilityFlags,
    pub movement: &'a MovementTuning,
    pub combat: &'a CombatTuning,
    pub actors: &'a ActorTuning,
    pub player_box: Aabb,
    pub rng: &'a mut ChaCha8Rng,
}

/// How an actor wants to be drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub rect: Aabb,
    pub color: Color,
    pub visible: bool,
}

pub trait Actor {
    /// Advance one tick. A returned strike is resolved by the world after
    /// every actor has updated.
    fn update(&mut self, ctx: &mut TickContext<'_>) -> Option<Strike>;

    fn bounding_box(&self) -> Aabb;

    fn appearance(&self) -> Appearance;
}

/// Non-player actors.
#[derive(Debug, Clone)]
pub enum ActorKind {
    Enemy(Enemy),
    Boss(Boss),
    Npc(Npc),
}

impl ActorKind {
    /// Apply damage from a player strike. NPCs cannot be hurt.
    pub fn receive_damage(&mut self, amount: f32) -> Option<f32> {
        match self {
            ActorKind::Enemy(enemy) => Some(enemy.health.take_damage(amount)),
            ActorKind::Boss(boss) => Some(boss.health.take_damage(amount)),
            ActorKind::Npc(_) => None,
        }
    }

    pub fn is_dead(&self) -> bool {
        match self {
            ActorKind::Enemy(enemy) => enemy.health.is_dead(),
            ActorKind::Boss(boss) => boss.health.is_dead(),
            ActorKind::Npc(_) => false,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ActorKind::Enemy(_) => "enemy",
            ActorKind::Boss(_) => "boss",
            ActorKind::Npc(npc) => &npc.name,
        }
    }
}

impl Actor for ActorKind {
    fn update(&mut self, ctx: &mut TickContext<'_>) -> Option<Strike> {
        match self {
            ActorKind::Enemy(enemy) => enemy.update(ctx),
            ActorKind::Boss(boss) => boss.update(ctx),
            ActorKind::Npc(npc) => npc.update(ctx),
        }
    }

    fn bounding_box(&self) -> Aabb {
        match self {
            ActorKind::Enemy(enemy) => enemy.bounding_box(),
            ActorKind::Boss(boss) => boss.bounding_box(),
            ActorKind::Npc(npc) => npc.bounding_box(),
        }
    }

    fn appearance(&self) -> Appearance {
        match self {
            ActorKind::Enemy(enemy) => enemy.appearance(),
            ActorKind::Boss(boss) => boss.appearance(),
            ActorKind::Npc(npc) => npc.appearance(),
        }
    }
}
