//! Abilities domain: monotonic upgrade flags and the pickups that grant them.

mod collectibles;
#[cfg(test)]
mod tests;

pub use collectibles::{Collectible, CollectibleKind, PickupOutcome};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Reflect)]
pub enum Ability {
    DoubleJump,
    WallJump,
    Dash,
    ChargedAttack,
}

impl Ability {
    pub const ALL: [Ability; 4] = [
        Ability::DoubleJump,
        Ability::WallJump,
        Ability::Dash,
        Ability::ChargedAttack,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Ability::DoubleJump => "Double Jump",
            Ability::WallJump => "Wall Jump",
            Ability::Dash => "Dash",
            Ability::ChargedAttack => "Charged Attack",
        }
    }
}

/// Which abilities the player has picked up.
///
/// Flags only ever go from locked to unlocked. There is deliberately no way
/// to clear one, so a snapshot taken at any point is a subset of every later
/// snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, Reflect)]
pub struct AbilityFlags {
    double_jump: bool,
    wall_jump: bool,
    dash: bool,
    charged_attack: bool,
}

impl AbilityFlags {
    pub fn with(abilities: &[Ability]) -> Self {
        let mut flags = Self::default();
        for ability in abilities {
            flags.unlock(*ability);
        }
        flags
    }

    pub fn has(&self, ability: Ability) -> bool {
        match ability {
            Ability::DoubleJump => self.double_jump,
            Ability::WallJump => self.wall_jump,
            Ability::Dash => self.dash,
            Ability::ChargedAttack => self.charged_attack,
        }
    }

    /// Unlock `ability`. Returns true if it was not unlocked before.
    pub fn unlock(&mut self, ability: Ability) -> bool {
        let slot = match ability {
            Ability::DoubleJump => &mut self.double_jump,
            Ability::WallJump => &mut self.wall_jump,
            Ability::Dash => &mut self.dash,
            Ability::ChargedAttack => &mut self.charged_attack,
        };
        let newly = !*slot;
        *slot = true;
        newly
    }

    /// Merge another snapshot in; never removes anything.
    pub fn absorb(&mut self, other: &AbilityFlags) {
        for ability in other.unlocked() {
            self.unlock(ability);
        }
    }

    pub fn unlocked(&self) -> Vec<Ability> {
        Ability::ALL
            .into_iter()
            .filter(|ability| self.has(*ability))
            .collect()
    }
}
