//! Simulation constants and tuning parameters.
//!
//! Distances are world units, speeds are units per second, times are seconds.

/// Nominal frame rate used by the headless driver.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the nominal frame rate.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- World bounds ---

pub const WORLD_WIDTH: f32 = 100.0;
pub const WORLD_HEIGHT: f32 = 100.0;

/// Distance outside the world past which entities are culled.
pub const OOB_MARGIN: f32 = 20.0;

// --- Player ---

pub const PLAYER_SIZE: f32 = 6.0;
pub const PLAYER_SPEED: f32 = 30.0;
pub const PLAYER_MAX_HEALTH: i32 = 20;

/// Seconds between shots at the base fire rate.
pub const PLAYER_FIRE_COOLDOWN: f32 = 0.25;

// --- Projectiles ---

pub const STANDARD_PROJECTILE_DAMAGE: i32 = 5;
pub const STANDARD_PROJECTILE_SPEED: f32 = 60.0;
pub const STANDARD_PROJECTILE_SIZE: f32 = 1.0;

pub const LOCK_ON_DAMAGE: i32 = 1;
pub const LOCK_ON_SPEED: f32 = 20.0;
pub const LOCK_ON_SIZE: f32 = 1.0;

/// How far ahead of its center a lock-on projectile can see.
pub const LOCK_ON_VIEW_DEPTH: f32 = 15.0;

/// Half-width of the lock-on vision cone at its base.
pub const LOCK_ON_VIEW_HALF_WIDTH: f32 = 25.0;

/// Tolerance used when testing points that lie on a vision cone edge.
pub const VISION_EDGE_EPSILON: f32 = 1e-3;

pub const ENEMY_PROJECTILE_DAMAGE: i32 = 2;
pub const ENEMY_PROJECTILE_SPEED: f32 = 40.0;

// --- Enemies ---

pub const RUNNER_SPEED: f32 = 15.0;
pub const RUNNER_POINTS: u32 = 10;
pub const RUNNER_DAMAGE: i32 = 2;
pub const RUNNER_MAX_HEALTH: i32 = 20;
pub const RUNNER_SIZE: f32 = 5.0;

pub const ASTEROID_SPEED: f32 = 5.0;
pub const ASTEROID_POINTS: u32 = 5;
pub const ASTEROID_DAMAGE: i32 = 5;
pub const ASTEROID_MAX_HEALTH: i32 = 40;
pub const ASTEROID_SIZE: f32 = 8.0;

pub const GUNNER_SPEED: f32 = 10.0;
pub const GUNNER_POINTS: u32 = 25;
pub const GUNNER_DAMAGE: i32 = 1;
pub const GUNNER_MAX_HEALTH: i32 = 10;
pub const GUNNER_SIZE: f32 = 5.0;

/// Distance a gunner tries to keep from the player.
pub const GUNNER_PREFERRED_RANGE: f32 = 30.0;

/// Gunners only open fire inside this range.
pub const GUNNER_FIRE_RANGE: f32 = 45.0;

pub const GUNNER_FIRE_INTERVAL: f32 = 2.0;

// --- Pickups and effects ---

pub const PICKUP_SIZE: f32 = 4.0;

pub const HEAL_AMOUNT: i32 = 5;

pub const RAPID_FIRE_DURATION: f32 = 5.0;

/// Cooldown multiplier while rapid fire is active.
pub const RAPID_FIRE_MULTIPLIER: f32 = 0.5;

pub const AUTO_AIM_DURATION: f32 = 8.0;

// --- Animations ---

pub const EXPLOSION_DURATION: f32 = 0.5;

// --- Spawning ---

pub const DEFAULT_SPAWN_INTERVAL: f32 = 2.0;
pub const DEFAULT_MIN_SPAWN_INTERVAL: f32 = 0.5;

/// Seconds shaved off the spawn interval per minute of play.
pub const DEFAULT_SPAWN_INTERVAL_DECAY: f32 = 0.25;

pub const DEFAULT_PICKUP_INTERVAL: f32 = 15.0;
