//! Combat domain: vitals and per-actor combat timers.

use serde::{Deserialize, Serialize};

use crate::combat::resources::CombatTuning;

/// Health for anything that can be damaged
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.min(self.current);
        self.current -= actual;
        actual
    }

    pub fn heal(&mut self, amount: f32) -> f32 {
        let actual = amount.min(self.max - self.current);
        self.current += actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    pub fn percent(&self) -> f32 {
        self.current / self.max
    }
}

/// Shared resource pool paid by dashes, attacks and parries.
#[derive(Debug, Clone, PartialEq)]
pub struct Stamina {
    pub current: f32,
    pub max: f32,
    pub regen: f32,
}

impl Stamina {
    pub fn new(max: f32, regen: f32) -> Self {
        Self {
            current: max,
            max,
            regen,
        }
    }

    pub fn regenerate(&mut self) {
        self.current = (self.current + self.regen).min(self.max);
    }

    /// Spend `cost` if there is enough; otherwise leave the pool untouched.
    pub fn try_spend(&mut self, cost: f32) -> bool {
        if self.current < cost {
            return false;
        }
        self.current -= cost;
        true
    }
}

/// Result of a strike landing on a defender.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrikeOutcome {
    Hit(f32),
    Parried,
    /// Defender is inside its invulnerability window.
    Ignored,
}

/// Attack, parry and invulnerability timers. All durations are in ticks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CombatState {
    pub is_attacking: bool,
    pub attack_cooldown: u32,
    pub is_parrying: bool,
    pub parry_cooldown: u32,
    pub parry_window: u32,
    pub invulnerable: bool,
    pub invulnerable_timer: u32,
    /// Ticks the attack button has been held with charging available.
    pub charge: u32,
}

impl CombatState {
    pub fn tick_timers(&mut self) {
        if self.attack_cooldown > 0 {
            self.attack_cooldown -= 1;
            if self.attack_cooldown == 0 {
                self.is_attacking = false;
            }
        }

        if self.parry_window > 0 {
            self.parry_window -= 1;
            if self.parry_window == 0 {
                self.is_parrying = false;
            }
        }

        if self.parry_cooldown > 0 {
            self.parry_cooldown -= 1;
        }

        if self.invulnerable_timer > 0 {
            self.invulnerable_timer -= 1;
            if self.invulnerable_timer == 0 {
                self.invulnerable = false;
            }
        }
    }

    pub fn can_attack(&self) -> bool {
        self.attack_cooldown == 0
    }

    /// Start an attack paying `cost`. Refusals are silent.
    pub fn try_attack(&mut self, stamina: &mut Stamina, cost: f32, tuning: &CombatTuning) -> bool {
        if !self.can_attack() || !stamina.try_spend(cost) {
            return false;
        }
        self.is_attacking = true;
        self.attack_cooldown = tuning.attack_cooldown;
        true
    }

    /// Open a parry window. Refusals are silent.
    pub fn try_parry(&mut self, stamina: &mut Stamina, tuning: &CombatTuning) -> bool {
        if self.parry_cooldown > 0 || !stamina.try_spend(tuning.parry_cost) {
            return false;
        }
        self.parry_cooldown = tuning.parry_cooldown;
        self.parry_window = tuning.parry_window;
        self.is_parrying = self.parry_window > 0;
        true
    }

    pub fn receive_strike(
        &mut self,
        health: &mut Health,
        damage: f32,
        tuning: &CombatTuning,
    ) -> StrikeOutcome {
        if self.is_parrying {
            return StrikeOutcome::Parried;
        }
        if self.invulnerable {
            return StrikeOutcome::Ignored;
        }
        let dealt = health.take_damage(damage);
        self.invulnerable_timer = tuning.invulnerability_ticks;
        self.invulnerable = self.invulnerable_timer > 0;
        StrikeOutcome::Hit(dealt)
    }
}
