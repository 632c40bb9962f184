//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Who fired a projectile. A faction never damages its own side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Player,
    Enemy,
}

/// Enemy archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Flies straight at the player and explodes on contact.
    Runner,
    /// Slow inert rock. Never a valid lock-on target.
    Asteroid,
    /// Keeps its distance and shoots at the player.
    Gunner,
}

/// Projectile archetype.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileKind {
    #[default]
    Standard,
    /// Homing projectile that locks onto the nearest visible enemy.
    LockOn,
}

/// Collectible power-up archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickupKind {
    Heal,
    RapidFire,
    AutoAim,
}

/// Runtime type of an entity, as seen by collision partners and the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Enemy(EnemyKind),
    Projectile {
        kind: ProjectileKind,
        faction: Faction,
    },
    Pickup(PickupKind),
    Obstacle,
}

/// Draw-only animation archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationKind {
    Explosion,
}

/// Timed effect archetype, for HUD display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectTag {
    Heal,
    RapidFire,
    AutoAim,
}

/// Session phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    Paused,
    GameOver,
}

impl EntityKind {
    pub fn is_enemy(&self) -> bool {
        matches!(self, EntityKind::Enemy(_))
    }

    /// Whether this entity is a projectile fired by `faction`.
    pub fn is_projectile_from(&self, faction: Faction) -> bool {
        matches!(self, EntityKind::Projectile { faction: f, .. } if *f == faction)
    }
}
