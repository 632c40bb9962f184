//! Entity update pass: steering, movement and weapon timers.

use shooter_core::types::Bounds;

use crate::entity::{Entity, SpawnRequest, UpdateContext};
use crate::systems::targeting;

/// Update every entity in insertion order.
///
/// Homing projectiles rebuild their vision cone and pick a target just before
/// they move. Entities updated after the player chase its new position. Fire
/// requests are returned rather than appended, so entities created by this
/// pass are not updated until the next tick.
pub fn run(entities: &mut [Entity], delta_secs: f32, world: Bounds) -> Vec<SpawnRequest> {
    let mut player_position = entities.iter().find(|e| e.is_player()).map(Entity::center);
    let mut requests = Vec::new();

    for i in 0..entities.len() {
        entities[i].refresh_vision();
        let target = targeting::acquire(&entities[i], entities).map(|t| t.position);
        let ctx = UpdateContext {
            player_position,
            target,
            world,
        };
        if let Some(request) = entities[i].update(delta_secs, &ctx) {
            requests.push(request);
        }
        if entities[i].is_player() {
            player_position = Some(entities[i].center());
        }
    }

    requests
}
