//! Entity model.
//!
//! Every simulation object is an [`Entity`]: a shared [`Body`], optional
//! [`Health`], and a [`Role`] drawn from a closed set of variants. Each role
//! wraps a small strategy struct implementing [`Behavior`], the capability
//! interface the engine drives (`update`, `on_collision`, `on_destroy`,
//! health-bearing). Anything an entity needs from the rest of the simulation
//! is passed in through [`SimContext`] or [`UpdateContext`].

pub mod archetypes;
pub mod body;
pub mod enemy;
pub mod pickup;
pub mod player;
pub mod projectile;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use shooter_core::enums::{EntityKind, Faction, ProjectileKind};
use shooter_core::events::AudioEvent;
use shooter_core::types::Bounds;

use crate::animation::AnimationLedger;
use crate::effects::EffectLedger;
use crate::score::ScoreState;
use crate::systems::targeting::VisionCone;

pub use body::{Body, Health};
pub use enemy::Enemy;
pub use pickup::Pickup;
pub use player::PlayerShip;
pub use projectile::Projectile;

/// Stable identifier, allocated in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Hands out entity ids for one session.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }
}

/// What one collision partner knows about the other.
///
/// Captured before any collision is evaluated, so decisions never observe
/// mutations made earlier in the same scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub id: EntityId,
    pub kind: EntityKind,
    /// Projectile damage, or contact damage for enemies. Zero otherwise.
    pub damage: i32,
    pub bounds: Bounds,
}

/// Mutable simulation state reachable from collision and destruction hooks.
pub struct SimContext<'a> {
    pub score: &'a mut ScoreState,
    pub effects: &'a mut EffectLedger,
    pub animations: &'a mut AnimationLedger,
    pub audio_events: &'a mut Vec<AudioEvent>,
}

/// Read-only view of the world handed to `update`.
#[derive(Debug, Clone, Copy)]
pub struct UpdateContext {
    pub player_position: Option<Vec2>,
    /// Lock-on target acquired this tick, for homing projectiles.
    pub target: Option<Vec2>,
    pub world: Bounds,
}

/// A projectile an entity wants fired. The engine allocates the id and
/// appends it to the active set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    pub kind: ProjectileKind,
    pub faction: Faction,
    pub origin: Vec2,
    pub rotation: f32,
}

/// Capability interface every role implements.
pub trait Behavior {
    /// Runtime type, as seen by collision partners and the renderer.
    fn kind(&self) -> EntityKind;

    /// Starting hit points, or `None` for entities without health.
    fn max_health(&self) -> Option<i32> {
        None
    }

    fn is_health_bearing(&self) -> bool {
        self.max_health().is_some()
    }

    /// Damage this entity deals to whatever it hits.
    fn damage(&self) -> i32 {
        0
    }

    /// Advance one tick. May ask for a projectile to be fired.
    fn update(&mut self, body: &mut Body, delta_secs: f32, ctx: &UpdateContext)
        -> Option<SpawnRequest>;

    /// Decide whether this entity is destroyed by touching `other`.
    /// Must not affect `other`.
    fn on_collision(
        &mut self,
        body: &Body,
        health: Option<&mut Health>,
        other: &Contact,
        ctx: &mut SimContext<'_>,
    ) -> bool;

    /// Side effects performed once, when removal is committed.
    fn on_destroy(&mut self, body: &Body, ctx: &mut SimContext<'_>);
}

/// Inanimate terrain: blocks shots and ships, never destroyed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Obstacle;

impl Behavior for Obstacle {
    fn kind(&self) -> EntityKind {
        EntityKind::Obstacle
    }

    fn update(&mut self, _body: &mut Body, _delta_secs: f32, _ctx: &UpdateContext) -> Option<SpawnRequest> {
        None
    }

    fn on_collision(
        &mut self,
        _body: &Body,
        _health: Option<&mut Health>,
        _other: &Contact,
        _ctx: &mut SimContext<'_>,
    ) -> bool {
        false
    }

    fn on_destroy(&mut self, _body: &Body, _ctx: &mut SimContext<'_>) {}
}

/// The closed set of entity variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Role {
    Player(PlayerShip),
    Enemy(Enemy),
    Projectile(Projectile),
    Pickup(Pickup),
    Obstacle(Obstacle),
}

impl Role {
    pub fn behavior(&self) -> &dyn Behavior {
        match self {
            Role::Player(p) => p,
            Role::Enemy(e) => e,
            Role::Projectile(p) => p,
            Role::Pickup(p) => p,
            Role::Obstacle(o) => o,
        }
    }

    pub fn behavior_mut(&mut self) -> &mut dyn Behavior {
        match self {
            Role::Player(p) => p,
            Role::Enemy(e) => e,
            Role::Projectile(p) => p,
            Role::Pickup(p) => p,
            Role::Obstacle(o) => o,
        }
    }
}

/// A simulation object in the active set.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    id: EntityId,
    body: Body,
    health: Option<Health>,
    role: Role,
}

impl Entity {
    /// Health is derived from the role so the two can never disagree.
    pub fn new(id: EntityId, body: Body, role: Role) -> Self {
        let health = role.behavior().max_health().map(Health::new);
        Self {
            id,
            body,
            health,
            role,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn kind(&self) -> EntityKind {
        self.role.behavior().kind()
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    pub fn center(&self) -> Vec2 {
        self.body.position
    }

    pub fn bounds(&self) -> Bounds {
        self.body.bounds()
    }

    pub fn health(&self) -> Option<&Health> {
        self.health.as_ref()
    }

    pub fn health_mut(&mut self) -> Option<&mut Health> {
        self.health.as_mut()
    }

    pub fn has_health(&self) -> bool {
        self.role.behavior().is_health_bearing()
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn is_player(&self) -> bool {
        matches!(self.role, Role::Player(_))
    }

    pub fn as_player(&self) -> Option<&PlayerShip> {
        match &self.role {
            Role::Player(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_player_mut(&mut self) -> Option<&mut PlayerShip> {
        match &mut self.role {
            Role::Player(p) => Some(p),
            _ => None,
        }
    }

    /// Snapshot of this entity for the collision scan.
    pub fn contact(&self) -> Contact {
        Contact {
            id: self.id,
            kind: self.kind(),
            damage: self.role.behavior().damage(),
            bounds: self.bounds(),
        }
    }

    /// Restore hit points. No-op for healthless entities.
    pub fn heal(&mut self, amount: i32) -> i32 {
        self.health.as_mut().map_or(0, |h| h.heal(amount))
    }

    pub fn update(&mut self, delta_secs: f32, ctx: &UpdateContext) -> Option<SpawnRequest> {
        self.role.behavior_mut().update(&mut self.body, delta_secs, ctx)
    }

    /// Ask this entity whether touching `other` destroys it.
    /// An entity never destroys itself.
    pub fn on_collision(&mut self, other: &Contact, ctx: &mut SimContext<'_>) -> bool {
        if other.id == self.id {
            return false;
        }
        self.role
            .behavior_mut()
            .on_collision(&self.body, self.health.as_mut(), other, ctx)
    }

    pub fn on_destroy(&mut self, ctx: &mut SimContext<'_>) {
        self.role.behavior_mut().on_destroy(&self.body, ctx);
    }

    /// Rebuild the vision cone of a homing projectile from its current pose.
    pub fn refresh_vision(&mut self) {
        if let Role::Projectile(p) = &mut self.role {
            p.refresh_vision(&self.body);
        }
    }

    pub fn vision(&self) -> Option<&VisionCone> {
        match &self.role {
            Role::Projectile(p) => p.vision(),
            _ => None,
        }
    }

    /// Fire the player's weapon if it is ready.
    pub fn try_fire(&mut self) -> Option<SpawnRequest> {
        match &mut self.role {
            Role::Player(p) => p.try_fire(&self.body),
            _ => None,
        }
    }
}
