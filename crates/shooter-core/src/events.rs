//! Fire-and-forget events emitted by the simulation for the audio layer.
//!
//! The simulation decides when a sound should play; the frontend decides how.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// The player fired a projectile.
    ShotFired { kind: ProjectileKind },
    /// An enemy was destroyed (by any cause).
    EnemyDestroyed { kind: EnemyKind, position: Vec2 },
    /// The player lost health.
    PlayerHit { damage: i32 },
    /// The player ship was destroyed.
    PlayerDestroyed { position: Vec2 },
    /// A power-up was picked up.
    PickupCollected { kind: PickupKind },
}
