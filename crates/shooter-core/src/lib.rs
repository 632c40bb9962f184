//! Core types and definitions for the arcade shooter simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! geometry, commands, snapshot views, audio events, and tuning constants.
//! It has no dependency on any rendering, audio, or windowing framework.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
