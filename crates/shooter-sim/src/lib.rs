//! Simulation engine for the arcade shooter.
//!
//! Owns the active entity set, runs systems once per frame with the delta
//! supplied by an external clock, and produces `GameStateSnapshot`s for the
//! frontend. Completely headless, enabling deterministic testing.

pub mod animation;
pub mod config;
pub mod effects;
pub mod engine;
pub mod entity;
pub mod error;
pub mod score;
pub mod systems;

pub use engine::SimulationEngine;
pub use config::SimConfig;
pub use error::SimError;
pub use shooter_core as core;

#[cfg(test)]
mod tests;
