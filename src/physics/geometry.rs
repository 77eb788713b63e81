//! Physics domain: rectangle primitive shared by bodies and level geometry.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle: top-left corner plus extents.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize, Reflect)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// A static piece of level geometry. Width and height must be positive;
/// content validation enforces this before a level is built.
pub type Obstacle = Aabb;

impl Aabb {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// Strict overlap test: boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn translated(&self, dx: f32, dy: f32) -> Aabb {
        Aabb {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    pub fn with_position(&self, x: f32, y: f32) -> Aabb {
        Aabb { x, y, ..*self }
    }

    /// Same extents, centered on `center`.
    pub fn centered_on(&self, center: Vec2) -> Aabb {
        Aabb {
            x: center.x - self.w * 0.5,
            y: center.y - self.h * 0.5,
            ..*self
        }
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.w > 0.0 && self.h > 0.0)
    }
}
