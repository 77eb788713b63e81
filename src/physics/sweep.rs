//! Physics domain: per-axis swept resolution against static obstacles.

use bevy::prelude::*;

use super::geometry::{Aabb, Obstacle};

/// Outcome of resolving one tick of movement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepResult {
    pub x: f32,
    pub y: f32,
    pub collided_x: bool,
    pub collided_y: bool,
}

/// Move `bbox` by `velocity`, clamping each axis against `obstacles`.
///
/// Both axes are tested from the original position: the X candidate keeps the
/// starting Y and the Y candidate keeps the starting X. A box approaching a
/// corner diagonally can therefore end the tick slightly inside it; the
/// following tick pushes it out. Moving platforms and fast projectiles were
/// never considered when this trade-off was made.
///
/// When several obstacles overlap a candidate, the nearest edge in the
/// direction of travel wins. A zero component still reports a collision if
/// the unmoved box already overlaps something, but leaves that axis as is.
pub fn resolve(bbox: &Aabb, velocity: Vec2, obstacles: &[Obstacle]) -> SweepResult {
    let mut result = SweepResult {
        x: bbox.x + velocity.x,
        y: bbox.y + velocity.y,
        collided_x: false,
        collided_y: false,
    };

    if obstacles.is_empty() {
        return result;
    }

    let moved_x = bbox.translated(velocity.x, 0.0);
    let moved_y = bbox.translated(0.0, velocity.y);

    for obstacle in obstacles {
        if !moved_x.overlaps(obstacle) {
            continue;
        }
        result.collided_x = true;
        if velocity.x > 0.0 {
            result.x = result.x.min(obstacle.left() - bbox.w);
        } else if velocity.x < 0.0 {
            result.x = result.x.max(obstacle.right());
        }
    }

    for obstacle in obstacles {
        if !moved_y.overlaps(obstacle) {
            continue;
        }
        result.collided_y = true;
        if velocity.y > 0.0 {
            result.y = result.y.min(obstacle.top() - bbox.h);
        } else if velocity.y < 0.0 {
            result.y = result.y.max(obstacle.bottom());
        }
    }

    result
}

/// Thin strip directly under `bbox`, `probe_distance` tall.
pub fn ground_probe(bbox: &Aabb, probe_distance: f32) -> Aabb {
    Aabb::new(bbox.x, bbox.bottom(), bbox.w, probe_distance)
}

/// True when the strip under `bbox` touches any obstacle.
pub fn is_grounded(bbox: &Aabb, obstacles: &[Obstacle], probe_distance: f32) -> bool {
    let probe = ground_probe(bbox, probe_distance);
    obstacles.iter().any(|obstacle| probe.overlaps(obstacle))
}
