//! Actors domain: wandering non-player characters.

use bevy::prelude::*;
use rand::Rng;

use super::{Actor, Appearance, TickContext, Walker};
use crate::combat::Strike;
use crate::physics::Aabb;

#[derive(Debug, Clone)]
pub struct Npc {
    pub walker: Walker,
    pub name: String,
    pub dialog_key: Option<String>,
    pub interaction_radius: f32,
    pub walk_speed: f32,
    /// -1 left, 0 standing, 1 right
    pub idle_direction: i8,
    pub idle_timer: u32,
    pub idle_change_at: u32,
}

impl Npc {
    pub fn new(
        x: f32,
        y: f32,
        name: impl Into<String>,
        dialog_key: Option<String>,
        walk_speed: f32,
        interaction_radius: f32,
    ) -> Self {
        Self {
            walker: Walker::new(x, y, 40.0, 70.0),
            name: name.into(),
            dialog_key,
            interaction_radius,
            walk_speed,
            idle_direction: 0,
            idle_timer: 0,
            idle_change_at: 60,
        }
    }

    /// Player center within the interaction radius of this NPC's center.
    pub fn can_interact(&self, player: &Aabb) -> bool {
        self.walker.body.center().distance(player.center()) <= self.interaction_radius
    }

    fn wander(&mut self, rng: &mut impl Rng) {
        self.idle_timer += 1;
        if self.idle_timer >= self.idle_change_at {
            self.idle_timer = 0;
            self.idle_change_at = rng.random_range(60..=120);
            // Mostly stand still
            self.idle_direction = match rng.random_range(0..5) {
                0 => -1,
                1 => 1,
                _ => 0,
            };
        }
    }
}

impl Actor for Npc {
    fn update(&mut self, ctx: &mut TickContext<'_>) -> Option<Strike> {
        self.wander(&mut *ctx.rng);

        let direction = f32::from(self.idle_direction);
        self.walker.velocity.x = direction * self.walk_speed;
        self.walker.face(direction);

        let result = self.walker.step(ctx.obstacles, ctx.movement);
        if result.collided_x {
            self.idle_direction = -self.idle_direction;
        }
        None
    }

    fn bounding_box(&self) -> Aabb {
        self.walker.body
    }

    fn appearance(&self) -> Appearance {
        Appearance {
            rect: self.walker.body,
            color: Color::srgb(0.0, 0.8, 0.4),
            visible: true,
        }
    }
}
