//! Snapshot system: builds a `GameStateSnapshot` from the engine state.
//!
//! Read-only. Never modifies entities or ledgers.

use shooter_core::constants::PLAYER_MAX_HEALTH;
use shooter_core::enums::GamePhase;
use shooter_core::events::AudioEvent;
use shooter_core::state::{EntityView, GameStateSnapshot, ScoreView};
use shooter_core::types::SimTime;

use crate::animation::AnimationLedger;
use crate::effects::EffectLedger;
use crate::entity::Entity;
use crate::score::ScoreState;

/// Build a complete snapshot for the frontend.
pub fn build_snapshot(
    entities: &[Entity],
    time: &SimTime,
    phase: GamePhase,
    score: &ScoreState,
    effects: &EffectLedger,
    animations: &AnimationLedger,
    audio_events: Vec<AudioEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        score: build_score(entities, score),
        entities: entities.iter().map(build_entity).collect(),
        animations: animations.views(),
        effects: effects.views(),
        audio_events,
    }
}

fn build_entity(entity: &Entity) -> EntityView {
    let body = entity.body();
    EntityView {
        id: entity.id().0,
        kind: entity.kind(),
        position: body.position,
        size: body.size,
        rotation: body.rotation,
        has_health: entity.has_health(),
        health_fraction: entity.health().map_or(1.0, |h| h.fraction()),
    }
}

/// Score plus the player's health bar. A missing player shows zero health.
fn build_score(entities: &[Entity], score: &ScoreState) -> ScoreView {
    let player_health = entities
        .iter()
        .find(|e| e.is_player())
        .and_then(Entity::health);

    ScoreView {
        points: score.points,
        enemies_destroyed: score.enemies_destroyed,
        shots_fired: score.shots_fired,
        player_health: player_health.map_or(0, |h| h.current()),
        player_max_health: player_health.map_or(PLAYER_MAX_HEALTH, |h| h.max()),
    }
}
