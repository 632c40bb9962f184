//! Target acquisition for homing projectiles.
//!
//! A lock-on round sees an isosceles triangle: apex at its own center, base
//! `depth` units ahead along its facing, `half_width` units either side. It
//! steers toward the closest non-asteroid enemy whose center is inside.

use glam::Vec2;

use shooter_core::constants::VISION_EDGE_EPSILON;
use shooter_core::enums::{EnemyKind, EntityKind};

use crate::entity::{Entity, EntityId};

/// Triangular field of view. Edges and vertices count as inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisionCone {
    apex: Vec2,
    left: Vec2,
    right: Vec2,
}

/// The enemy a homing projectile has locked onto this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LockTarget {
    pub id: EntityId,
    pub position: Vec2,
    pub distance: f32,
}

impl VisionCone {
    pub fn new(apex: Vec2, rotation: f32, half_width: f32, depth: f32) -> Self {
        let forward = Vec2::from_angle(rotation);
        let side = forward.perp();
        let base = apex + forward * depth;
        Self {
            apex,
            left: base + side * half_width,
            right: base - side * half_width,
        }
    }

    pub fn apex(&self) -> Vec2 {
        self.apex
    }

    pub fn vertices(&self) -> [Vec2; 3] {
        [self.apex, self.left, self.right]
    }

    /// Inclusive containment: points on an edge, within `VISION_EDGE_EPSILON`
    /// of its supporting line, are visible.
    pub fn contains(&self, point: Vec2) -> bool {
        let sides = [
            edge_side(self.apex, self.left, point),
            edge_side(self.left, self.right, point),
            edge_side(self.right, self.apex, point),
        ];
        let any_negative = sides.iter().any(|&s| s < -VISION_EDGE_EPSILON);
        let any_positive = sides.iter().any(|&s| s > VISION_EDGE_EPSILON);
        !(any_negative && any_positive)
    }
}

/// Signed area telling which side of `a -> b` the point lies on.
fn edge_side(a: Vec2, b: Vec2, point: Vec2) -> f32 {
    (b - a).perp_dot(point - a)
}

/// Closest visible enemy to `origin`, excluding asteroids.
///
/// Ties keep the first candidate in `entities` order, so results follow
/// insertion order. Returns `None` when nothing qualifies.
pub fn nearest_visible_enemy(
    cone: &VisionCone,
    origin: Vec2,
    entities: &[Entity],
) -> Option<LockTarget> {
    let mut best: Option<LockTarget> = None;

    for entity in entities {
        match entity.kind() {
            EntityKind::Enemy(EnemyKind::Asteroid) => continue,
            EntityKind::Enemy(_) => {}
            _ => continue,
        }

        let center = entity.center();
        if !cone.contains(center) {
            continue;
        }

        let distance = origin.distance(center);
        if best.map_or(true, |b| distance < b.distance) {
            best = Some(LockTarget {
                id: entity.id(),
                position: center,
                distance,
            });
        }
    }

    best
}

/// Target for a homing entity from its current (already refreshed) cone.
pub fn acquire(homing: &Entity, entities: &[Entity]) -> Option<LockTarget> {
    let cone = homing.vision()?;
    nearest_visible_enemy(cone, homing.center(), entities)
}
