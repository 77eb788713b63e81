//! Combat domain: hitboxes produced by attacks.

use crate::movement::Facing;
use crate::physics::Aabb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    Player,
    Enemy,
}

/// A single-tick damage volume. Strikes resolve on the tick they are made.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strike {
    pub hitbox: Aabb,
    pub damage: f32,
    pub team: Team,
}

/// Hitbox beside `body` on the `facing` side, aligned with its top edge.
pub fn attack_hitbox(body: &Aabb, facing: Facing, width: f32, height: f32) -> Aabb {
    match facing {
        Facing::Right => Aabb::new(body.right(), body.y, width, height),
        Facing::Left => Aabb::new(body.left() - width, body.y, width, height),
    }
}
