//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in world units.
///
/// World space has +x to the right and +y up. Every entity's box is
/// derived from its center position and size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks that actually advanced the simulation.
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Bounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box of the given size centered on `center`.
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// The playfield, anchored at the origin.
    pub fn world() -> Self {
        Self::new(
            Vec2::ZERO,
            Vec2::new(crate::constants::WORLD_WIDTH, crate::constants::WORLD_HEIGHT),
        )
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Strict overlap test: boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// Inclusive point containment.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Grow the box by `margin` on every side.
    pub fn expanded(&self, margin: f32) -> Self {
        Self {
            min: self.min - Vec2::splat(margin),
            max: self.max + Vec2::splat(margin),
        }
    }

    /// Clamp a center point so that a box of `size` stays inside these bounds.
    pub fn clamp_center(&self, center: Vec2, size: Vec2) -> Vec2 {
        let half = size * 0.5;
        let lo = self.min + half;
        let hi = (self.max - half).max(lo);
        center.clamp(lo, hi)
    }
}

impl SimTime {
    /// Advance by one tick of `delta_secs`.
    pub fn advance(&mut self, delta_secs: f32) {
        self.tick += 1;
        self.elapsed_secs += f64::from(delta_secs);
    }

    /// Elapsed time in minutes, for difficulty curves.
    pub fn elapsed_minutes(&self) -> f32 {
        (self.elapsed_secs / 60.0) as f32
    }
}

/// Heading in radians from `from` to `to` (0 = +x, counter-clockwise).
pub fn bearing(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}
