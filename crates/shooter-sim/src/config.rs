//! Simulation configuration.
//!
//! Everything tunable per session lives here. Configs are plain serde data so
//! they can be loaded from JSON; `validate` rejects bad values before an
//! engine is built.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use shooter_core::constants::*;
use shooter_core::enums::{EnemyKind, PickupKind};
use shooter_core::types::Bounds;

use crate::error::SimError;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Where the player ship starts each session.
    pub player_start: Vec2,
    pub spawner: SpawnerConfig,
}

/// Enemy and pickup spawn policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnerConfig {
    /// Seconds between enemy spawns at the start of a session.
    pub interval_secs: f32,
    /// Floor the interval never shrinks below.
    pub min_interval_secs: f32,
    /// Seconds removed from the interval per minute of play.
    pub interval_decay_per_minute: f32,
    pub placement: SpawnPlacement,
    /// Relative odds of each enemy archetype.
    pub weights: Vec<SpawnWeight<EnemyKind>>,
    /// Seconds between pickup spawns. `None` disables pickups.
    pub pickup_interval_secs: Option<f32>,
    pub pickup_weights: Vec<SpawnWeight<PickupKind>>,
}

/// Where new enemies appear.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SpawnPlacement {
    /// A random point on the edge of the world, heading inward.
    Edges,
    /// Anywhere inside the world.
    Uniform,
    /// Always the same point.
    Fixed { x: f32, y: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnWeight<K> {
    pub kind: K,
    pub weight: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            player_start: Vec2::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0),
            spawner: SpawnerConfig::default(),
        }
    }
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_SPAWN_INTERVAL,
            min_interval_secs: DEFAULT_MIN_SPAWN_INTERVAL,
            interval_decay_per_minute: DEFAULT_SPAWN_INTERVAL_DECAY,
            placement: SpawnPlacement::Edges,
            weights: vec![
                SpawnWeight {
                    kind: EnemyKind::Runner,
                    weight: 6,
                },
                SpawnWeight {
                    kind: EnemyKind::Asteroid,
                    weight: 3,
                },
                SpawnWeight {
                    kind: EnemyKind::Gunner,
                    weight: 1,
                },
            ],
            pickup_interval_secs: Some(DEFAULT_PICKUP_INTERVAL),
            pickup_weights: vec![
                SpawnWeight {
                    kind: PickupKind::Heal,
                    weight: 3,
                },
                SpawnWeight {
                    kind: PickupKind::RapidFire,
                    weight: 2,
                },
                SpawnWeight {
                    kind: PickupKind::AutoAim,
                    weight: 1,
                },
            ],
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if !Bounds::world().contains_point(self.player_start) {
            return Err(SimError::invalid(
                "player_start",
                format!("{} lies outside the world", self.player_start),
            ));
        }
        self.spawner.validate()
    }
}

impl SpawnerConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        positive("interval_secs", self.interval_secs)?;
        positive("min_interval_secs", self.min_interval_secs)?;
        if self.min_interval_secs > self.interval_secs {
            return Err(SimError::invalid(
                "min_interval_secs",
                format!(
                    "{} exceeds interval_secs {}",
                    self.min_interval_secs, self.interval_secs
                ),
            ));
        }
        if !self.interval_decay_per_minute.is_finite() || self.interval_decay_per_minute < 0.0 {
            return Err(SimError::invalid(
                "interval_decay_per_minute",
                format!("must be finite and non-negative, got {}", self.interval_decay_per_minute),
            ));
        }
        if let SpawnPlacement::Fixed { x, y } = self.placement {
            if !x.is_finite() || !y.is_finite() {
                return Err(SimError::invalid("placement", "fixed point must be finite"));
            }
            let point = Vec2::new(x, y);
            if !Bounds::world().contains_point(point) {
                return Err(SimError::invalid(
                    "placement",
                    format!("fixed point {point} lies outside the world"),
                ));
            }
        }
        has_weight("weights", &self.weights)?;

        if let Some(interval) = self.pickup_interval_secs {
            positive("pickup_interval_secs", interval)?;
            has_weight("pickup_weights", &self.pickup_weights)?;
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), SimError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::invalid(
            field,
            format!("must be a positive number of seconds, got {value}"),
        ))
    }
}

fn has_weight<K>(field: &'static str, weights: &[SpawnWeight<K>]) -> Result<(), SimError> {
    if weights.iter().any(|w| w.weight > 0) {
        Ok(())
    } else {
        Err(SimError::invalid(field, "needs at least one non-zero weight"))
    }
}
