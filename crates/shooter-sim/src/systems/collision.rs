//! Collision resolution: two-phase mark-and-sweep over the active set.
//!
//! Phase one snapshots every entity's [`Contact`], then asks each side of
//! every overlapping pair whether it is destroyed. Phase two runs
//! `on_destroy` for the doomed entities in insertion order and removes them
//! all at once. Nothing is removed while the pair scan is running.

use log::debug;

use crate::entity::{Contact, Entity, EntityId, SimContext};

/// What happened during one collision pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionOutcome {
    /// Every `(evaluated, partner)` pair for which `evaluated.on_collision(partner)` ran.
    pub evaluated: Vec<(EntityId, EntityId)>,
    /// Entities removed this pass, in insertion order.
    pub destroyed: Vec<EntityId>,
}

impl CollisionOutcome {
    pub fn was_evaluated(&self, entity: EntityId, partner: EntityId) -> bool {
        self.evaluated.contains(&(entity, partner))
    }
}

/// Resolve all collisions for this tick.
pub fn run(entities: &mut Vec<Entity>, ctx: &mut SimContext<'_>) -> CollisionOutcome {
    let contacts: Vec<Contact> = entities.iter().map(Entity::contact).collect();
    let mut doomed = vec![false; entities.len()];
    let mut outcome = CollisionOutcome::default();

    // Mark.
    for (i, entity) in entities.iter_mut().enumerate() {
        let own = contacts[i];
        for (j, other) in contacts.iter().enumerate() {
            if i == j || !own.bounds.overlaps(&other.bounds) {
                continue;
            }
            outcome.evaluated.push((own.id, other.id));
            if entity.on_collision(other, ctx) {
                doomed[i] = true;
            }
        }
    }

    // Sweep.
    for (entity, &dead) in entities.iter_mut().zip(&doomed) {
        if dead {
            entity.on_destroy(ctx);
            outcome.destroyed.push(entity.id());
        }
    }
    let mut flags = doomed.into_iter();
    entities.retain(|_| !flags.next().unwrap_or(false));

    if !outcome.destroyed.is_empty() {
        debug!(
            "collision pass: {} pair checks, destroyed {:?}",
            outcome.evaluated.len(),
            outcome.destroyed
        );
    }
    outcome
}
