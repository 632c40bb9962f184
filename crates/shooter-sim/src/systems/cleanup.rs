//! Cleanup system: culls entities that left the playfield.

use log::debug;

use shooter_core::constants::OOB_MARGIN;
use shooter_core::types::Bounds;

use crate::entity::Entity;

/// Remove everything but the player whose center is more than `OOB_MARGIN`
/// outside the world. No destruction hooks run. Returns the number removed.
pub fn run(entities: &mut Vec<Entity>) -> usize {
    let limits = Bounds::world().expanded(OOB_MARGIN);
    let before = entities.len();
    entities.retain(|e| e.is_player() || limits.contains_point(e.center()));

    let removed = before - entities.len();
    if removed > 0 {
        debug!("culled {removed} out-of-bounds entities");
    }
    removed
}
