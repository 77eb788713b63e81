//! Actors domain: gravity-bound body shared by enemies, bosses and NPCs.

use bevy::prelude::*;

use crate::movement::{Facing, MovementTuning};
use crate::physics::{self, Aabb, Obstacle, SweepResult};

#[derive(Debug, Clone, PartialEq)]
pub struct Walker {
    pub body: Aabb,
    pub velocity: Vec2,
    pub on_ground: bool,
    pub facing: Facing,
}

impl Walker {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            body: Aabb::new(x, y, width, height),
            velocity: Vec2::ZERO,
            on_ground: false,
            facing: Facing::default(),
        }
    }

    /// Fall, resolve against the level and refresh ground contact. Velocity
    /// on a clamped axis is zeroed.
    pub fn step(&mut self, obstacles: &[Obstacle], tuning: &MovementTuning) -> SweepResult {
        if !self.on_ground {
            self.velocity.y = (self.velocity.y + tuning.gravity).min(tuning.terminal_velocity);
        }

        let result = physics::resolve(&self.body, self.velocity, obstacles);
        self.body.x = result.x;
        self.body.y = result.y;
        self.on_ground = physics::is_grounded(&self.body, obstacles, tuning.ground_probe);

        if result.collided_x {
            self.velocity.x = 0.0;
        }
        if result.collided_y {
            self.velocity.y = 0.0;
        }
        result
    }

    /// Horizontal sign toward `target`, or zero when aligned.
    pub fn toward(&self, target: &Aabb) -> f32 {
        let dx = target.center().x - self.body.center().x;
        if dx > 0.0 {
            1.0
        } else if dx < 0.0 {
            -1.0
        } else {
            0.0
        }
    }

    pub fn face(&mut self, sign: f32) {
        if let Some(facing) = Facing::from_sign(sign) {
            self.facing = facing;
        }
    }
}
