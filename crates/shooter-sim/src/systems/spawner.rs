//! Spawner: drops enemies (and optionally pickups) on an accelerating timer.

use std::f32::consts::TAU;

use glam::Vec2;
use log::{debug, warn};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use shooter_core::constants::PICKUP_SIZE;
use shooter_core::enums::{EnemyKind, PickupKind};
use shooter_core::types::{bearing, Bounds, SimTime};

use crate::config::{SpawnPlacement, SpawnWeight, SpawnerConfig};
use crate::entity::{archetypes, Entity, IdAllocator};
use crate::error::SimError;

/// Max heading deviation, in radians, for enemies entering from an edge.
const EDGE_HEADING_JITTER: f32 = 0.3;

/// Most enemies (and, separately, pickups) one `run` may add. Backlog past
/// this is dropped.
const MAX_SPAWNS_PER_RUN: usize = 64;

/// Weighted choice over a fixed set of kinds.
#[derive(Debug, Clone)]
struct WeightedKinds<K> {
    kinds: Vec<K>,
    index: WeightedIndex<u32>,
}

impl<K: Copy> WeightedKinds<K> {
    fn new(field: &'static str, weights: &[SpawnWeight<K>]) -> Result<Self, SimError> {
        let index = WeightedIndex::new(weights.iter().map(|w| w.weight))
            .map_err(|e| SimError::invalid(field, e.to_string()))?;
        Ok(Self {
            kinds: weights.iter().map(|w| w.kind).collect(),
            index,
        })
    }

    fn pick(&self, rng: &mut ChaCha8Rng) -> K {
        self.kinds[self.index.sample(rng)]
    }
}

/// Accumulating spawn timer for one session.
#[derive(Debug, Clone)]
pub struct Spawner {
    config: SpawnerConfig,
    accumulator: f32,
    pickup_accumulator: f32,
    elapsed: SimTime,
    spawned: u32,
    enemies: WeightedKinds<EnemyKind>,
    pickups: Option<WeightedKinds<PickupKind>>,
}

impl Spawner {
    /// Validates the config up front; a spawner that exists cannot fail.
    pub fn new(config: SpawnerConfig) -> Result<Self, SimError> {
        config.validate()?;
        let enemies = WeightedKinds::new("weights", &config.weights)?;
        let pickups = match config.pickup_interval_secs {
            Some(_) => Some(WeightedKinds::new("pickup_weights", &config.pickup_weights)?),
            None => None,
        };
        Ok(Self {
            config,
            accumulator: 0.0,
            pickup_accumulator: 0.0,
            elapsed: SimTime::default(),
            spawned: 0,
            enemies,
            pickups,
        })
    }

    pub fn config(&self) -> &SpawnerConfig {
        &self.config
    }

    /// Enemies spawned this session.
    pub fn spawned(&self) -> u32 {
        self.spawned
    }

    /// Seconds between enemy spawns at the current point in the session.
    pub fn current_interval(&self) -> f32 {
        let decayed = self.config.interval_secs
            - self.config.interval_decay_per_minute * self.elapsed.elapsed_minutes();
        decayed.max(self.config.min_interval_secs)
    }

    /// Back to the start-of-session state.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.pickup_accumulator = 0.0;
        self.elapsed = SimTime::default();
        self.spawned = 0;
    }

    /// Advance the timers and append any due spawns. Returns how many
    /// entities were added.
    pub fn run(
        &mut self,
        delta_secs: f32,
        rng: &mut ChaCha8Rng,
        entities: &mut Vec<Entity>,
        ids: &mut IdAllocator,
    ) -> usize {
        let before = entities.len();
        self.accumulator += delta_secs;

        let mut enemies_added = 0;
        loop {
            let interval = self.current_interval();
            if self.accumulator < interval {
                break;
            }
            if enemies_added == MAX_SPAWNS_PER_RUN {
                warn!("spawn backlog of {:.1}s dropped", self.accumulator);
                self.accumulator %= interval;
                break;
            }
            self.accumulator -= interval;
            enemies_added += 1;

            let kind = self.enemies.pick(rng);
            let (position, rotation) = self.placement(rng);
            let id = ids.next_id();
            debug!("spawning {kind:?} {id:?} at {position}");
            entities.push(archetypes::enemy(id, kind, position, rotation));
            self.spawned += 1;
        }

        if let (Some(interval), Some(pickups)) = (self.config.pickup_interval_secs, &self.pickups) {
            self.pickup_accumulator += delta_secs;
            let mut added = 0;
            while self.pickup_accumulator >= interval {
                if added == MAX_SPAWNS_PER_RUN {
                    warn!("pickup backlog of {:.1}s dropped", self.pickup_accumulator);
                    self.pickup_accumulator %= interval;
                    break;
                }
                self.pickup_accumulator -= interval;
                added += 1;
                let kind = pickups.pick(rng);
                let position = uniform_point(rng, PICKUP_SIZE);
                let id = ids.next_id();
                debug!("spawning {kind:?} pickup {id:?} at {position}");
                entities.push(archetypes::pickup(id, kind, position));
            }
        }

        self.elapsed.advance(delta_secs);
        entities.len() - before
    }

    /// Position and heading for a new enemy.
    fn placement(&self, rng: &mut ChaCha8Rng) -> (Vec2, f32) {
        match self.config.placement {
            SpawnPlacement::Fixed { x, y } => {
                let position = Vec2::new(x, y);
                (position, heading_inward(position))
            }
            SpawnPlacement::Uniform => {
                let position = uniform_point(rng, 0.0);
                (position, rng.gen_range(0.0..TAU))
            }
            SpawnPlacement::Edges => {
                let world = Bounds::world();
                let along_x = world.min.x + rng.gen_range(0.0..world.width());
                let along_y = world.min.y + rng.gen_range(0.0..world.height());
                let position = match rng.gen_range(0..4) {
                    0 => Vec2::new(along_x, world.max.y),
                    1 => Vec2::new(along_x, world.min.y),
                    2 => Vec2::new(world.min.x, along_y),
                    _ => Vec2::new(world.max.x, along_y),
                };
                let jitter = rng.gen_range(-EDGE_HEADING_JITTER..EDGE_HEADING_JITTER);
                (position, heading_inward(position) + jitter)
            }
        }
    }
}

/// Heading from `position` toward the middle of the world.
fn heading_inward(position: Vec2) -> f32 {
    let center = Bounds::world().center();
    if position == center {
        return 0.0;
    }
    bearing(position, center)
}

/// Random point inside the world, `inset` units clear of every edge.
fn uniform_point(rng: &mut ChaCha8Rng, inset: f32) -> Vec2 {
    let world = Bounds::world();
    Vec2::new(
        rng.gen_range(world.min.x + inset..=world.max.x - inset),
        rng.gen_range(world.min.y + inset..=world.max.y - inset),
    )
}
