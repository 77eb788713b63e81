//! Abilities domain: collectible pickups placed in levels.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::{Ability, AbilityFlags};
use crate::combat::Health;
use crate::physics::Aabb;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Reflect)]
pub enum CollectibleKind {
    /// Restores this much health.
    Health(f32),
    Ability(Ability),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Collectible {
    pub id: String,
    pub rect: Aabb,
    pub kind: CollectibleKind,
    pub collected: bool,
}

/// What happened when a pickup was applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickupOutcome {
    Healed(f32),
    Unlocked(Ability),
    /// The ability was already owned; the pickup is consumed anyway.
    AlreadyOwned(Ability),
}

impl Collectible {
    pub fn new(id: impl Into<String>, rect: Aabb, kind: CollectibleKind) -> Self {
        Self {
            id: id.into(),
            rect,
            kind,
            collected: false,
        }
    }

    /// Collect if `player_box` touches this pickup. Each pickup applies once.
    pub fn try_collect(
        &mut self,
        player_box: &Aabb,
        health: &mut Health,
        abilities: &mut AbilityFlags,
    ) -> Option<PickupOutcome> {
        if self.collected || !self.rect.overlaps(player_box) {
            return None;
        }
        self.collected = true;

        let outcome = match self.kind {
            CollectibleKind::Health(amount) => PickupOutcome::Healed(health.heal(amount)),
            CollectibleKind::Ability(ability) => {
                if abilities.unlock(ability) {
                    info!("{} ability acquired!", ability.display_name());
                    PickupOutcome::Unlocked(ability)
                } else {
                    PickupOutcome::AlreadyOwned(ability)
                }
            }
        };
        debug!("Collected '{}': {:?}", self.id, outcome);
        Some(outcome)
    }
}
