//! Actors domain: boss with two phases and randomized attack patterns.

use bevy::prelude::*;
use rand::Rng;

use super::{Actor, Appearance, BossStats, TickContext, Walker};
use crate::combat::{Health, Strike, Team};
use crate::physics::Aabb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossPattern {
    /// Hitbox centered on the boss
    Slam,
    /// Rush toward the player for a few ticks
    Charge,
    /// Leap if standing on the ground
    Leap,
}

impl BossPattern {
    fn roll(rng: &mut impl Rng) -> Self {
        match rng.random_range(0..3) {
            0 => BossPattern::Slam,
            1 => BossPattern::Charge,
            _ => BossPattern::Leap,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Boss {
    pub walker: Walker,
    pub health: Health,
    pub stats: BossStats,
    pub phase: u8,
    pub last_pattern: Option<BossPattern>,
    pub attack_cooldown: u32,
    pub charge_timer: u32,
}

impl Boss {
    pub fn new(x: f32, y: f32, stats: BossStats) -> Self {
        Self {
            walker: Walker::new(x, y, stats.base.width, stats.base.height),
            health: Health::new(stats.base.max_health),
            stats,
            phase: 1,
            last_pattern: None,
            attack_cooldown: 0,
            charge_timer: 0,
        }
    }

    fn enter_phase_two_if_needed(&mut self) {
        if self.phase == 1 && self.health.percent() < self.stats.phase_two_threshold {
            self.phase = 2;
            self.stats.base.speed += self.stats.phase_two_speed_bonus;
            self.stats.base.damage += self.stats.phase_two_damage_bonus;
            info!(
                "Boss enters phase 2: speed={}, damage={}",
                self.stats.base.speed, self.stats.base.damage
            );
        }
    }

    fn in_attack_range(&self, player: &Aabb) -> bool {
        let own = self.walker.body.center();
        let target = player.center();
        (own.x - target.x).abs() < self.stats.base.attack_range
            && (own.y - target.y).abs() < self.stats.base.vertical_reach
    }

    pub(super) fn execute_pattern(&mut self, pattern: BossPattern) -> Option<Strike> {
        let base = &self.stats.base;
        match pattern {
            BossPattern::Slam => Some(Strike {
                hitbox: Aabb::new(0.0, 0.0, base.attack_width, base.attack_height)
                    .centered_on(self.walker.body.center()),
                damage: base.damage,
                team: Team::Enemy,
            }),
            BossPattern::Charge => {
                self.charge_timer = self.stats.charge_ticks;
                None
            }
            BossPattern::Leap => {
                if self.walker.on_ground {
                    self.walker.velocity.y = self.stats.jump_impulse;
                    self.walker.on_ground = false;
                }
                None
            }
        }
    }
}

impl Actor for Boss {
    fn update(&mut self, ctx: &mut TickContext<'_>) -> Option<Strike> {
        if self.attack_cooldown > 0 {
            self.attack_cooldown -= 1;
        }
        self.enter_phase_two_if_needed();

        let mut strike = None;
        if self.charge_timer > 0 {
            self.charge_timer -= 1;
            self.walker.velocity.x = self.walker.facing.sign() * self.stats.charge_speed;
        } else if self.in_attack_range(&ctx.player_box) {
            self.walker.velocity.x = 0.0;
            self.walker.face(self.walker.toward(&ctx.player_box));
            if self.attack_cooldown == 0 {
                self.attack_cooldown = self.stats.base.attack_cooldown;
                let pattern = BossPattern::roll(&mut *ctx.rng);
                self.last_pattern = Some(pattern);
                debug!("Boss pattern: {:?}", pattern);
                strike = self.execute_pattern(pattern);
            }
        } else {
            // Bosses always know where the player is
            let sign = self.walker.toward(&ctx.player_box);
            self.walker.velocity.x = self.stats.base.speed * sign;
            self.walker.face(sign);
        }

        let result = self.walker.step(ctx.obstacles, ctx.movement);
        if result.collided_x {
            self.charge_timer = 0;
        }

        strike
    }

    fn bounding_box(&self) -> Aabb {
        self.walker.body
    }

    fn appearance(&self) -> Appearance {
        Appearance {
            rect: self.walker.body,
            color: Color::srgb(1.0, 0.0, 0.4),
            visible: true,
        }
    }
}
