//! Animation ledger: draw-only sequences with a bounded lifetime.
//!
//! Nothing here touches gameplay state; the renderer reads `views()`.

use glam::Vec2;

use shooter_core::constants::EXPLOSION_DURATION;
use shooter_core::enums::AnimationKind;
use shooter_core::state::AnimationView;

#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    kind: AnimationKind,
    position: Vec2,
    size: Vec2,
    duration: f32,
    elapsed: f32,
}

impl Animation {
    pub fn new(kind: AnimationKind, position: Vec2, size: Vec2, duration: f32) -> Self {
        Self {
            kind,
            position,
            size,
            duration: duration.max(0.0),
            elapsed: 0.0,
        }
    }

    /// Explosion covering the destroyed entity's footprint.
    pub fn explosion(position: Vec2, size: Vec2) -> Self {
        Self::new(AnimationKind::Explosion, position, size, EXPLOSION_DURATION)
    }

    pub fn kind(&self) -> AnimationKind {
        self.kind
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Fraction of the animation played, in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    pub fn view(&self) -> AnimationView {
        AnimationView {
            kind: self.kind,
            position: self.position,
            size: self.size,
            progress: self.progress(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AnimationLedger {
    active: Vec<Animation>,
}

impl AnimationLedger {
    pub fn register(&mut self, animation: Animation) {
        self.active.push(animation);
    }

    /// Advance all animations and drop finished ones. Returns how many were removed.
    pub fn tick(&mut self, delta_secs: f32) -> usize {
        let before = self.active.len();
        self.active.retain_mut(|a| {
            a.elapsed += delta_secs;
            !a.is_finished()
        });
        before - self.active.len()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn views(&self) -> Vec<AnimationView> {
        self.active.iter().map(Animation::view).collect()
    }
}
