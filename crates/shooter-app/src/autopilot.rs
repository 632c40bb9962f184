//! Scripted player for headless sessions.
//!
//! Each tick it aims at the closest enemy, fires, and backs away from
//! anything that gets too close. Deterministic: the same snapshots always
//! produce the same commands.

use glam::Vec2;
use log::info;
use serde::Serialize;

use shooter_core::commands::PlayerCommand;
use shooter_core::constants::DT;
use shooter_core::enums::{EntityKind, GamePhase};
use shooter_core::state::{EntityView, GameStateSnapshot, ScoreView};
use shooter_sim::{SimConfig, SimulationEngine};

use crate::error::AppError;

/// Enemies closer than this make the autopilot retreat.
const DEFAULT_FLEE_RADIUS: f32 = 20.0;

#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    flee_radius: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            flee_radius: DEFAULT_FLEE_RADIUS,
        }
    }
}

impl Autopilot {
    pub fn new(flee_radius: f32) -> Self {
        Self {
            flee_radius: flee_radius.max(0.0),
        }
    }

    /// Commands to queue after seeing `snapshot`. Empty when there is no
    /// player to steer.
    pub fn commands(&self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
        if snapshot.phase != GamePhase::Active {
            return Vec::new();
        }
        let Some(player) = snapshot.entities.iter().find(|e| e.kind == EntityKind::Player) else {
            return Vec::new();
        };

        let Some(target) = nearest_enemy(player.position, &snapshot.entities) else {
            return vec![PlayerCommand::Move { x: 0.0, y: 0.0 }];
        };

        let away = player.position - target.position;
        let retreat = if away.length() < self.flee_radius {
            away
        } else {
            Vec2::ZERO
        };

        vec![
            PlayerCommand::AimAt {
                x: target.position.x,
                y: target.position.y,
            },
            PlayerCommand::Move {
                x: retreat.x,
                y: retreat.y,
            },
            PlayerCommand::Fire,
        ]
    }
}

fn nearest_enemy(from: Vec2, entities: &[EntityView]) -> Option<&EntityView> {
    entities
        .iter()
        .filter(|e| matches!(e.kind, EntityKind::Enemy(_)))
        .min_by(|a, b| {
            from.distance_squared(a.position)
                .total_cmp(&from.distance_squared(b.position))
        })
}

/// Summary of a finished headless session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub ticks: u64,
    pub elapsed_secs: f64,
    pub phase: GamePhase,
    pub score: ScoreView,
}

/// Play up to `max_ticks` fixed-rate ticks under the autopilot, stopping
/// early on game over.
pub fn run_session(
    config: SimConfig,
    autopilot: Autopilot,
    max_ticks: u64,
) -> Result<SessionReport, AppError> {
    let mut engine = SimulationEngine::new(config)?;
    let mut snapshot = engine.tick(DT);

    while snapshot.time.tick < max_ticks && snapshot.phase != GamePhase::GameOver {
        engine.queue_commands(autopilot.commands(&snapshot));
        snapshot = engine.tick(DT);
    }

    info!(
        "session ended after {} ticks: {} points, {} kills",
        snapshot.time.tick, snapshot.score.points, snapshot.score.enemies_destroyed
    );
    Ok(SessionReport {
        ticks: snapshot.time.tick,
        elapsed_secs: snapshot.time.elapsed_secs,
        phase: snapshot.phase,
        score: snapshot.score,
    })
}

#[cfg(test)]
mod tests {
    use shooter_core::enums::EnemyKind;
    use shooter_core::types::SimTime;

    use super::*;

    fn view(id: u32, kind: EntityKind, x: f32, y: f32) -> EntityView {
        EntityView {
            id,
            kind,
            position: Vec2::new(x, y),
            size: Vec2::splat(5.0),
            rotation: 0.0,
            has_health: true,
            health_fraction: 1.0,
        }
    }

    fn snapshot(entities: Vec<EntityView>) -> GameStateSnapshot {
        GameStateSnapshot {
            time: SimTime::default(),
            entities,
            ..Default::default()
        }
    }

    #[test]
    fn test_aims_at_nearest_enemy_and_fires() {
        let snap = snapshot(vec![
            view(0, EntityKind::Player, 50.0, 50.0),
            view(1, EntityKind::Enemy(EnemyKind::Runner), 50.0, 90.0),
            view(2, EntityKind::Enemy(EnemyKind::Gunner), 80.0, 50.0),
        ]);
        let commands = Autopilot::default().commands(&snap);

        assert!(matches!(commands[0], PlayerCommand::AimAt { x, y } if x == 80.0 && y == 50.0));
        assert!(matches!(commands[1], PlayerCommand::Move { x, y } if x == 0.0 && y == 0.0));
        assert!(matches!(commands[2], PlayerCommand::Fire));
    }

    #[test]
    fn test_retreats_from_close_enemy() {
        let snap = snapshot(vec![
            view(0, EntityKind::Player, 50.0, 50.0),
            view(1, EntityKind::Enemy(EnemyKind::Runner), 60.0, 50.0),
        ]);
        let commands = Autopilot::default().commands(&snap);
        assert!(matches!(commands[1], PlayerCommand::Move { x, .. } if x < 0.0));
    }

    #[test]
    fn test_idle_without_player_or_enemies() {
        let autopilot = Autopilot::default();
        assert!(autopilot.commands(&snapshot(Vec::new())).is_empty());

        let alone = snapshot(vec![view(0, EntityKind::Player, 50.0, 50.0)]);
        assert!(matches!(
            autopilot.commands(&alone)[..],
            [PlayerCommand::Move { x, y }] if x == 0.0 && y == 0.0
        ));
    }

    #[test]
    fn test_session_is_reproducible() {
        let a = run_session(SimConfig::default(), Autopilot::default(), 1200).unwrap();
        let b = run_session(SimConfig::default(), Autopilot::default(), 1200).unwrap();

        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
        assert!(a.ticks <= 1200);
        assert!(a.score.shots_fired > 0);
    }
}
