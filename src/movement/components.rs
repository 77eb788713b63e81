//! Movement domain: kinematic state owned by the player.

use bevy::prelude::*;

/// Which side of the body is pressed against a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallContact {
    #[default]
    None,
    Left,
    Right,
}

impl WallContact {
    pub fn is_touching(&self) -> bool {
        *self != WallContact::None
    }

    /// Horizontal sign pointing away from the wall.
    pub fn away_sign(&self) -> f32 {
        match self {
            WallContact::Left => 1.0,
            WallContact::Right => -1.0,
            WallContact::None => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(&self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn from_sign(sign: f32) -> Option<Facing> {
        if sign > 0.0 {
            Some(Facing::Right)
        } else if sign < 0.0 {
            Some(Facing::Left)
        } else {
            None
        }
    }
}

/// Velocity and contact flags for the player body.
///
/// Ground/air is the primary mode; dashing and wall-sliding are orthogonal
/// flags layered on top (a wall-slide is always airborne). Only the player's
/// own update writes to this.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KinematicState {
    pub velocity: Vec2,
    pub on_ground: bool,
    pub touching_wall: WallContact,
    pub is_wall_sliding: bool,
    pub is_dashing: bool,
    /// Ticks of dash remaining
    pub dash_timer: u32,
    pub dash_cooldown_timer: u32,
    pub facing: Facing,
    pub air_jumps_remaining: u8,
}

impl KinematicState {
    pub fn tick_timers(&mut self) {
        if self.dash_timer > 0 {
            self.dash_timer -= 1;
            if self.dash_timer == 0 {
                self.is_dashing = false;
            }
        }

        if self.dash_cooldown_timer > 0 {
            self.dash_cooldown_timer -= 1;
        }
    }

    pub fn is_airborne(&self) -> bool {
        !self.on_ground
    }
}
