//! Physics domain: axis-aligned boxes and the swept collision resolver.
//!
//! Coordinates are pixels with the origin at the top-left and y growing
//! downward. Every moving body resolves against the level's static obstacle
//! list, which is never mutated during a tick.

mod geometry;
mod sweep;

pub use geometry::{Aabb, Obstacle};
pub use sweep::{SweepResult, ground_probe, is_grounded, resolve};
