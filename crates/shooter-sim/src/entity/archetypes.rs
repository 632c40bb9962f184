//! Entity spawn factories.
//!
//! Builds fully-initialised entities with the tuning for each archetype.
//! Ids are supplied by the caller so the engine controls allocation order.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;

use shooter_core::constants::*;
use shooter_core::enums::{EnemyKind, Faction, PickupKind, ProjectileKind};

use super::{Body, Enemy, Entity, EntityId, Obstacle, Pickup, PlayerShip, Projectile, Role, SpawnRequest};

/// Spawn the player's ship facing north.
pub fn player(id: EntityId, position: Vec2) -> Entity {
    Entity::new(
        id,
        Body::new(position, Vec2::splat(PLAYER_SIZE), FRAC_PI_2, PLAYER_SPEED),
        Role::Player(PlayerShip::default()),
    )
}

/// Spawn an enemy of the given archetype.
pub fn enemy(id: EntityId, kind: EnemyKind, position: Vec2, rotation: f32) -> Entity {
    let params = enemy_params(kind);
    Entity::new(
        id,
        Body::new(position, Vec2::splat(params.size), rotation, params.speed),
        Role::Enemy(Enemy::new(kind, params.points, params.damage, params.max_health)),
    )
}

/// Spawn the projectile described by a fire request.
pub fn projectile(id: EntityId, request: &SpawnRequest) -> Entity {
    let (speed, size, damage) = projectile_params(request.kind, request.faction);
    Entity::new(
        id,
        Body::new(request.origin, Vec2::splat(size), request.rotation, speed),
        Role::Projectile(Projectile::new(request.kind, request.faction, damage)),
    )
}

pub fn pickup(id: EntityId, kind: PickupKind, position: Vec2) -> Entity {
    Entity::new(
        id,
        Body::new(position, Vec2::splat(PICKUP_SIZE), 0.0, 0.0),
        Role::Pickup(Pickup::new(kind)),
    )
}

pub fn obstacle(id: EntityId, position: Vec2, size: Vec2) -> Entity {
    Entity::new(
        id,
        Body::new(position, size, 0.0, 0.0),
        Role::Obstacle(Obstacle),
    )
}

/// Tuning for one enemy archetype.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyParams {
    pub speed: f32,
    pub size: f32,
    pub max_health: i32,
    pub points: u32,
    pub damage: i32,
}

pub fn enemy_params(kind: EnemyKind) -> EnemyParams {
    match kind {
        EnemyKind::Runner => EnemyParams {
            speed: RUNNER_SPEED,
            size: RUNNER_SIZE,
            max_health: RUNNER_MAX_HEALTH,
            points: RUNNER_POINTS,
            damage: RUNNER_DAMAGE,
        },
        EnemyKind::Asteroid => EnemyParams {
            speed: ASTEROID_SPEED,
            size: ASTEROID_SIZE,
            max_health: ASTEROID_MAX_HEALTH,
            points: ASTEROID_POINTS,
            damage: ASTEROID_DAMAGE,
        },
        EnemyKind::Gunner => EnemyParams {
            speed: GUNNER_SPEED,
            size: GUNNER_SIZE,
            max_health: GUNNER_MAX_HEALTH,
            points: GUNNER_POINTS,
            damage: GUNNER_DAMAGE,
        },
    }
}

/// (speed, size, damage) for a projectile.
fn projectile_params(kind: ProjectileKind, faction: Faction) -> (f32, f32, i32) {
    match (kind, faction) {
        (ProjectileKind::LockOn, _) => (LOCK_ON_SPEED, LOCK_ON_SIZE, LOCK_ON_DAMAGE),
        (ProjectileKind::Standard, Faction::Player) => (
            STANDARD_PROJECTILE_SPEED,
            STANDARD_PROJECTILE_SIZE,
            STANDARD_PROJECTILE_DAMAGE,
        ),
        (ProjectileKind::Standard, Faction::Enemy) => (
            ENEMY_PROJECTILE_SPEED,
            STANDARD_PROJECTILE_SIZE,
            ENEMY_PROJECTILE_DAMAGE,
        ),
    }
}
