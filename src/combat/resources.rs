//! Combat domain: tuning values, loaded from gameplay defaults.

use serde::{Deserialize, Serialize};

/// Combat tuning. Durations are ticks, amounts are raw points.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CombatTuning {
    pub max_health: f32,
    pub max_stamina: f32,
    pub stamina_regen: f32,
    pub attack_damage: f32,
    pub attack_cost: f32,
    pub attack_cooldown: u32,
    pub attack_width: f32,
    pub attack_height: f32,
    /// Hold time before a release fires the charged attack
    pub charge_ticks: u32,
    pub charged_damage_mult: f32,
    pub charged_cost: f32,
    pub parry_cost: f32,
    pub parry_cooldown: u32,
    pub parry_window: u32,
    pub invulnerability_ticks: u32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            max_health: 100.0,
            max_stamina: 100.0,
            stamina_regen: 0.5,
            attack_damage: 20.0,
            attack_cost: 10.0,
            attack_cooldown: 20,
            attack_width: 70.0,
            attack_height: 50.0,
            charge_ticks: 30,
            charged_damage_mult: 2.5,
            charged_cost: 25.0,
            parry_cost: 15.0,
            parry_cooldown: 30,
            parry_window: 10,
            invulnerability_ticks: 60,
        }
    }
}
