//! Systems that operate on the active entity set each tick.
//!
//! Systems are free functions (or, for the spawner, a small stateful driver)
//! that take the entity set and whatever context they need explicitly.
//! Entity state lives in the entities; per-session state lives in the engine.

pub mod cleanup;
pub mod collision;
pub mod movement;
pub mod snapshot;
pub mod spawner;
pub mod targeting;
