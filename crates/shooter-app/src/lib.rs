//! Headless driver for the shooter simulation.
//!
//! Runs the engine on a fixed-rate game loop thread fed by a command
//! channel, or steps it directly under the built-in autopilot.

pub mod autopilot;
pub mod error;
pub mod game_loop;
pub mod state;

pub use error::AppError;
pub use shooter_core as core;
