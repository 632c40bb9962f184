//! Game state snapshot: the complete visible state handed to the frontend each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::AudioEvent;
use crate::types::SimTime;

/// Everything the renderer and audio layer need after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub score: ScoreView,
    /// Active entities, in insertion order.
    pub entities: Vec<EntityView>,
    pub animations: Vec<AnimationView>,
    pub effects: Vec<EffectView>,
    /// Audio triggers raised during this tick.
    pub audio_events: Vec<AudioEvent>,
}

/// A drawable entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: u32,
    pub kind: EntityKind,
    /// Center position.
    pub position: Vec2,
    pub size: Vec2,
    /// Facing in radians (0 = +x).
    pub rotation: f32,
    pub has_health: bool,
    /// Current / max health, for health bars. 1.0 for healthless entities.
    pub health_fraction: f32,
}

/// A draw-only animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationView {
    pub kind: AnimationKind,
    pub position: Vec2,
    pub size: Vec2,
    /// 0.0 at start, 1.0 at expiry.
    pub progress: f32,
}

/// An active timed effect, for the HUD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectView {
    pub kind: EffectTag,
    /// Seconds until expiry. Zero for instant effects.
    pub remaining_secs: f32,
}

/// Running score for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreView {
    pub points: u32,
    pub enemies_destroyed: u32,
    pub shots_fired: u32,
    pub player_health: i32,
    pub player_max_health: i32,
}
