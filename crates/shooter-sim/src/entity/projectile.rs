//! Projectiles: straight shots and lock-on homing rounds.

use shooter_core::constants::{LOCK_ON_VIEW_DEPTH, LOCK_ON_VIEW_HALF_WIDTH};
use shooter_core::enums::{EnemyKind, EntityKind, Faction, ProjectileKind};

use super::{Behavior, Body, Contact, Health, SimContext, SpawnRequest, UpdateContext};
use crate::systems::targeting::VisionCone;

#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    kind: ProjectileKind,
    faction: Faction,
    damage: i32,
    /// Current vision cone. Lock-on only; rebuilt every tick, never reused.
    vision: Option<VisionCone>,
}

impl Projectile {
    pub fn new(kind: ProjectileKind, faction: Faction, damage: i32) -> Self {
        Self {
            kind,
            faction,
            damage,
            vision: None,
        }
    }

    pub fn projectile_kind(&self) -> ProjectileKind {
        self.kind
    }

    pub fn faction(&self) -> Faction {
        self.faction
    }

    pub fn is_homing(&self) -> bool {
        self.kind == ProjectileKind::LockOn
    }

    pub fn vision(&self) -> Option<&VisionCone> {
        self.vision.as_ref()
    }

    pub fn refresh_vision(&mut self, body: &Body) {
        if self.is_homing() {
            self.vision = Some(VisionCone::new(
                body.position,
                body.rotation,
                LOCK_ON_VIEW_HALF_WIDTH,
                LOCK_ON_VIEW_DEPTH,
            ));
        }
    }
}

impl Behavior for Projectile {
    fn kind(&self) -> EntityKind {
        EntityKind::Projectile {
            kind: self.kind,
            faction: self.faction,
        }
    }

    fn damage(&self) -> i32 {
        self.damage
    }

    fn update(
        &mut self,
        body: &mut Body,
        delta_secs: f32,
        ctx: &UpdateContext,
    ) -> Option<SpawnRequest> {
        match (self.is_homing(), ctx.target) {
            (true, Some(target)) => body.move_towards(target, delta_secs),
            _ => body.move_forward(body.speed * delta_secs),
        }
        None
    }

    /// A shot is spent on anything its faction can hurt, and on terrain.
    fn on_collision(
        &mut self,
        _body: &Body,
        _health: Option<&mut Health>,
        other: &Contact,
        _ctx: &mut SimContext<'_>,
    ) -> bool {
        match (self.faction, other.kind) {
            (_, EntityKind::Obstacle) => true,
            (Faction::Player, EntityKind::Enemy(_)) => true,
            (Faction::Enemy, EntityKind::Player) => true,
            (Faction::Enemy, EntityKind::Enemy(EnemyKind::Asteroid)) => true,
            _ => false,
        }
    }

    fn on_destroy(&mut self, _body: &Body, _ctx: &mut SimContext<'_>) {}
}
