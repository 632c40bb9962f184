//! Kinematic state and hit points shared by every entity.

use glam::Vec2;

use shooter_core::types::{bearing, Bounds};

/// Below this distance a target is treated as "here" and facing is kept.
const FACING_DEAD_ZONE: f32 = 1e-4;

/// Position, size, facing and speed of an entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Center position in world units.
    pub position: Vec2,
    pub size: Vec2,
    /// Facing in radians (0 = +x, counter-clockwise).
    pub rotation: f32,
    /// Units per second.
    pub speed: f32,
}

/// Hit points. `current` always stays within `0..=max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    current: i32,
    max: i32,
}

impl Body {
    pub fn new(position: Vec2, size: Vec2, rotation: f32, speed: f32) -> Self {
        Self {
            position,
            size,
            rotation,
            speed,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_center(self.position, self.size)
    }

    /// Unit vector along the current facing.
    pub fn facing(&self) -> Vec2 {
        Vec2::from_angle(self.rotation)
    }

    pub fn distance_to(&self, point: Vec2) -> f32 {
        self.position.distance(point)
    }

    /// Advance `distance` units along the current facing.
    pub fn move_forward(&mut self, distance: f32) {
        self.position += self.facing() * distance;
    }

    /// Face `point` without moving.
    pub fn rotate_towards(&mut self, point: Vec2) {
        if self.position.distance_squared(point) > FACING_DEAD_ZONE * FACING_DEAD_ZONE {
            self.rotation = bearing(self.position, point);
        }
    }

    /// Face `target` and advance `speed * delta_secs` towards it.
    pub fn move_towards(&mut self, target: Vec2, delta_secs: f32) {
        self.rotate_towards(target);
        self.move_forward(self.speed * delta_secs);
    }
}

impl Health {
    /// Full health. A non-positive `max` is raised to 1.
    pub fn new(max: i32) -> Self {
        let max = max.max(1);
        Self { current: max, max }
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0
    }

    pub fn fraction(&self) -> f32 {
        self.current as f32 / self.max as f32
    }

    /// Subtract `amount`, clamping at zero. Returns the damage actually taken.
    pub fn damage(&mut self, amount: i32) -> i32 {
        let before = self.current;
        self.current = (self.current - amount.max(0)).max(0);
        before - self.current
    }

    /// Add `amount`, clamping at `max`. Returns the health actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.current;
        self.current = self.current.saturating_add(amount.max(0)).min(self.max);
        self.current - before
    }
}
