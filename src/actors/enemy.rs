//! Actors domain: patrolling melee enemy.

use bevy::prelude::*;
use rand::Rng;

use super::{Actor, Appearance, EnemyStats, TickContext, Walker};
use crate::combat::{Health, Strike, Team, attack_hitbox};
use crate::physics::Aabb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnemyMode {
    #[default]
    Patrol,
    Chase,
    Attack,
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub walker: Walker,
    pub health: Health,
    pub stats: EnemyStats,
    pub mode: EnemyMode,
    /// Patrol direction, +1 or -1
    pub direction: f32,
    pub patrol_timer: u32,
    pub attack_cooldown: u32,
}

impl Enemy {
    pub fn new(x: f32, y: f32, stats: EnemyStats) -> Self {
        Self {
            walker: Walker::new(x, y, stats.width, stats.height),
            health: Health::new(stats.max_health),
            stats,
            mode: EnemyMode::Patrol,
            direction: 1.0,
            patrol_timer: 0,
            attack_cooldown: 0,
        }
    }

    fn choose_mode(&self, player: &Aabb) -> EnemyMode {
        let own = self.walker.body.center();
        let target = player.center();
        let dx = (own.x - target.x).abs();
        let dy = (own.y - target.y).abs();

        if dx < self.stats.attack_range && dy < self.stats.vertical_reach {
            EnemyMode::Attack
        } else if dx < self.stats.aggro_range {
            EnemyMode::Chase
        } else {
            EnemyMode::Patrol
        }
    }

    fn patrol(&mut self, rng: &mut impl Rng) {
        if self.patrol_timer == 0 {
            self.direction = -self.direction;
            let (min, max) = self.stats.patrol_ticks;
            self.patrol_timer = rng.random_range(min..=max.max(min));
        }
        self.patrol_timer = self.patrol_timer.saturating_sub(1);
        self.walker.velocity.x = self.stats.speed * self.direction;
        self.walker.face(self.direction);
    }
}

impl Actor for Enemy {
    fn update(&mut self, ctx: &mut TickContext<'_>) -> Option<Strike> {
        if self.attack_cooldown > 0 {
            self.attack_cooldown -= 1;
        }

        self.mode = self.choose_mode(&ctx.player_box);
        let mut strike = None;

        match self.mode {
            EnemyMode::Patrol => self.patrol(&mut *ctx.rng),
            EnemyMode::Chase => {
                let sign = self.walker.toward(&ctx.player_box);
                self.walker.velocity.x = self.stats.speed * sign;
                self.walker.face(sign);
            }
            EnemyMode::Attack => {
                self.walker.velocity.x = 0.0;
                self.walker.face(self.walker.toward(&ctx.player_box));
                if self.attack_cooldown == 0 {
                    self.attack_cooldown = self.stats.attack_cooldown;
                    strike = Some(Strike {
                        hitbox: attack_hitbox(
                            &self.walker.body,
                            self.walker.facing,
                            self.stats.attack_width,
                            self.stats.attack_height,
                        ),
                        damage: self.stats.damage,
                        team: Team::Enemy,
                    });
                }
            }
        }

        let result = self.walker.step(ctx.obstacles, ctx.movement);
        if result.collided_x && self.mode == EnemyMode::Patrol {
            // Turn around at walls instead of pushing into them
            self.direction = -self.direction;
        }

        strike
    }

    fn bounding_box(&self) -> Aabb {
        self.walker.body
    }

    fn appearance(&self) -> Appearance {
        Appearance {
            rect: self.walker.body,
            color: Color::srgb(0.2, 0.3, 0.9),
            visible: true,
        }
    }
}
