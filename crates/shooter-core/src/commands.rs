//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and applied at the start of the next tick.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Ship control ---
    /// Fire the current weapon if the cooldown allows it.
    Fire,
    /// Face the given world-space point (cursor already unprojected).
    AimAt { x: f32, y: f32 },
    /// Movement intent; the vector is normalised by the simulation.
    /// A zero vector stops the ship.
    Move { x: f32, y: f32 },

    // --- Session control ---
    Pause,
    Resume,
    /// Start a fresh session: score back to zero, world re-seeded.
    Restart,
}
