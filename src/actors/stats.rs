//! Actors domain: data-driven stats for enemies and bosses.

use serde::{Deserialize, Serialize};

/// Enemy stats. Speeds are pixels per tick, cooldowns are ticks.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EnemyStats {
    pub width: f32,
    pub height: f32,
    pub max_health: f32,
    pub speed: f32,
    pub damage: f32,
    pub aggro_range: f32,
    pub attack_range: f32,
    /// Maximum vertical center offset for an attack to be attempted
    pub vertical_reach: f32,
    pub attack_cooldown: u32,
    pub attack_width: f32,
    pub attack_height: f32,
    /// Patrol legs last a random number of ticks in this inclusive range
    pub patrol_ticks: (u32, u32),
}

impl Default for EnemyStats {
    fn default() -> Self {
        Self {
            width: 50.0,
            height: 50.0,
            max_health: 50.0,
            speed: 2.0,
            damage: 10.0,
            aggro_range: 300.0,
            attack_range: 70.0,
            vertical_reach: 50.0,
            attack_cooldown: 60,
            attack_width: 60.0,
            attack_height: 40.0,
            patrol_ticks: (60, 120),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BossStats {
    pub base: EnemyStats,
    pub charge_speed: f32,
    pub charge_ticks: u32,
    pub jump_impulse: f32,
    /// Health fraction below which the second phase starts
    pub phase_two_threshold: f32,
    pub phase_two_speed_bonus: f32,
    pub phase_two_damage_bonus: f32,
}

impl Default for BossStats {
    fn default() -> Self {
        Self {
            base: EnemyStats {
                width: 100.0,
                height: 100.0,
                max_health: 200.0,
                speed: 1.5,
                damage: 25.0,
                aggro_range: 500.0,
                attack_range: 120.0,
                vertical_reach: 70.0,
                attack_cooldown: 90,
                attack_width: 120.0,
                attack_height: 80.0,
                patrol_ticks: (60, 120),
            },
            charge_speed: 8.0,
            charge_ticks: 20,
            jump_impulse: -15.0,
            phase_two_threshold: 0.5,
            phase_two_speed_bonus: 1.0,
            phase_two_damage_bonus: 10.0,
        }
    }
}

/// Stats for every non-player actor kind.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ActorTuning {
    pub enemy: EnemyStats,
    pub boss: BossStats,
    pub npc_walk_speed: f32,
    pub npc_interaction_radius: f32,
}

impl Default for ActorTuning {
    fn default() -> Self {
        Self {
            enemy: EnemyStats::default(),
            boss: BossStats::default(),
            npc_walk_speed: 0.2,
            npc_interaction_radius: 80.0,
        }
    }
}
