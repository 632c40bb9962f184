//! Tests for the simulation engine: tick ordering, scoring, spawning, targeting and sessions.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;

use shooter_core::commands::PlayerCommand;
use shooter_core::constants::*;
use shooter_core::enums::*;
use shooter_core::events::AudioEvent;
use shooter_core::state::GameStateSnapshot;

use crate::config::{SimConfig, SpawnPlacement, SpawnWeight, SpawnerConfig};
use crate::effects::{Effect, EffectDuration, EffectKind};
use crate::engine::SimulationEngine;
use crate::entity::{archetypes, EntityId, SpawnRequest};
use crate::systems::targeting::{nearest_visible_enemy, VisionCone};

/// Spawner effectively off, so tests control every entity.
fn quiet_config() -> SimConfig {
    SimConfig {
        spawner: SpawnerConfig {
            interval_secs: 1000.0,
            min_interval_secs: 1000.0,
            pickup_interval_secs: None,
            ..Default::default()
        },
        ..Default::default()
    }
}

fn quiet_engine() -> SimulationEngine {
    SimulationEngine::new(quiet_config()).unwrap()
}

fn player_shot_at(position: Vec2) -> impl FnOnce(EntityId) -> crate::entity::Entity {
    move |id| {
        archetypes::projectile(
            id,
            &SpawnRequest {
                kind: ProjectileKind::Standard,
                faction: Faction::Player,
                origin: position,
                rotation: FRAC_PI_2,
            },
        )
    }
}

fn count_kind(snapshot: &GameStateSnapshot, kind: EntityKind) -> usize {
    snapshot.entities.iter().filter(|e| e.kind == kind).count()
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let config = SimConfig {
        seed: 12345,
        ..Default::default()
    };
    let mut engine_a = SimulationEngine::new(config.clone()).unwrap();
    let mut engine_b = SimulationEngine::new(config).unwrap();

    for i in 0..900 {
        if i % 10 == 0 {
            let aim = PlayerCommand::AimAt {
                x: (i % 100) as f32,
                y: 90.0,
            };
            engine_a.queue_commands([aim.clone(), PlayerCommand::Fire]);
            engine_b.queue_commands([aim, PlayerCommand::Fire]);
        }
        let json_a = serde_json::to_string(&engine_a.tick(DT)).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick(DT)).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed at tick {i}");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = SimulationEngine::new(SimConfig {
        seed: 111,
        ..Default::default()
    })
    .unwrap();
    let mut engine_b = SimulationEngine::new(SimConfig {
        seed: 222,
        ..Default::default()
    })
    .unwrap();

    let mut diverged = false;
    for _ in 0..600 {
        let json_a = serde_json::to_string(&engine_a.tick(DT)).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick(DT)).unwrap();
        if json_a != json_b {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "Different seeds should produce divergent spawns");
}

// ---- Scoring ----

#[test]
fn test_runner_dies_on_fourth_hit_and_scores_once() {
    let mut engine = quiet_engine();
    let runner = engine.insert_entity(|id| {
        archetypes::enemy(id, EnemyKind::Runner, Vec2::new(50.0, 90.0), 0.0)
    });

    for hit in 1..=3 {
        let center = engine.entity(runner).unwrap().center();
        engine.insert_entity(player_shot_at(center));
        let snap = engine.tick(0.01);
        assert_eq!(snap.score.points, 0, "No score after hit {hit}");
        assert_eq!(
            engine.entity(runner).and_then(|e| e.health()).map(|h| h.current()),
            Some(RUNNER_MAX_HEALTH - hit * STANDARD_PROJECTILE_DAMAGE)
        );
    }

    let center = engine.entity(runner).unwrap().center();
    engine.insert_entity(player_shot_at(center));
    let snap = engine.tick(0.01);

    assert_eq!(snap.score.points, RUNNER_POINTS);
    assert_eq!(snap.score.enemies_destroyed, 1);
    assert!(engine.entity(runner).is_none(), "Runner removed the tick it died");
    assert_eq!(count_kind(&snap, EntityKind::Enemy(EnemyKind::Runner)), 0);
    assert_eq!(snap.animations.len(), 1, "Explosion registered");
    assert!(snap.audio_events.iter().any(|e| matches!(
        e,
        AudioEvent::EnemyDestroyed {
            kind: EnemyKind::Runner,
            ..
        }
    )));
}

#[test]
fn test_ramming_kill_scores_nothing() {
    let mut engine = quiet_engine();
    let start = engine.config().player_start;
    engine.insert_entity(|id| archetypes::enemy(id, EnemyKind::Gunner, start, 0.0));

    let snap = engine.tick(DT);
    assert_eq!(snap.score.points, 0);
    assert_eq!(snap.score.enemies_destroyed, 0);
    assert_eq!(snap.score.player_health, PLAYER_MAX_HEALTH - GUNNER_DAMAGE);
    assert!(snap
        .audio_events
        .contains(&AudioEvent::PlayerHit { damage: GUNNER_DAMAGE }));
}

#[test]
fn test_enemy_health_never_negative() {
    let mut engine = quiet_engine();
    let gunner = engine.insert_entity(|id| {
        archetypes::enemy(id, EnemyKind::Gunner, Vec2::new(20.0, 80.0), 0.0)
    });
    // 10 hp vs 5 x 5 damage in one tick.
    for _ in 0..5 {
        engine.insert_entity(player_shot_at(Vec2::new(20.0, 80.0)));
    }
    let snap = engine.tick(DT);

    assert!(engine.entity(gunner).is_none());
    assert_eq!(snap.score.points, GUNNER_POINTS);
    assert_eq!(snap.score.enemies_destroyed, 1);
}

#[test]
fn test_shots_fired_counted() {
    let mut engine = quiet_engine();
    engine.queue_command(PlayerCommand::Fire);
    let snap = engine.tick(DT);

    assert_eq!(snap.score.shots_fired, 1);
    assert_eq!(
        count_kind(
            &snap,
            EntityKind::Projectile {
                kind: ProjectileKind::Standard,
                faction: Faction::Player
            }
        ),
        1
    );
    assert!(snap.audio_events.contains(&AudioEvent::ShotFired {
        kind: ProjectileKind::Standard
    }));

    // Still cooling down.
    engine.queue_command(PlayerCommand::Fire);
    assert_eq!(engine.tick(DT).score.shots_fired, 1);
}

// ---- Spawning ----

#[test]
fn test_first_enemy_spawns_on_fourth_half_second_tick() {
    let mut engine = SimulationEngine::new(SimConfig {
        spawner: SpawnerConfig {
            interval_secs: 2.0,
            placement: SpawnPlacement::Fixed { x: 5.0, y: 5.0 },
            weights: vec![SpawnWeight {
                kind: EnemyKind::Runner,
                weight: 1,
            }],
            pickup_interval_secs: None,
            ..Default::default()
        },
        ..Default::default()
    })
    .unwrap();

    for tick in 1..=3 {
        let snap = engine.tick(0.5);
        assert_eq!(snap.entities.len(), 1, "Only the player after tick {tick}");
    }
    let snap = engine.tick(0.5);
    assert_eq!(count_kind(&snap, EntityKind::Enemy(EnemyKind::Runner)), 1);
    assert_eq!(engine.spawner().spawned(), 1);
}

// ---- Targeting ----

#[test]
fn test_lock_on_prefers_nearest_and_ignores_asteroids() {
    let entities = vec![
        archetypes::enemy(EntityId(0), EnemyKind::Asteroid, Vec2::new(0.0, 5.0), 0.0),
        archetypes::enemy(EntityId(1), EnemyKind::Runner, Vec2::new(0.0, 12.0), 0.0),
        archetypes::enemy(EntityId(2), EnemyKind::Gunner, Vec2::new(0.0, 10.0), 0.0),
    ];
    let cone = VisionCone::new(Vec2::ZERO, FRAC_PI_2, 25.0, 15.0);

    let target = nearest_visible_enemy(&cone, Vec2::ZERO, &entities).unwrap();
    assert_eq!(target.id, EntityId(2));
    assert_eq!(target.position, Vec2::new(0.0, 10.0));
}

#[test]
fn test_lock_on_tie_goes_to_first_inserted() {
    let entities = vec![
        archetypes::enemy(EntityId(7), EnemyKind::Runner, Vec2::new(5.0, 10.0), 0.0),
        archetypes::enemy(EntityId(3), EnemyKind::Runner, Vec2::new(-5.0, 10.0), 0.0),
    ];
    let cone = VisionCone::new(Vec2::ZERO, FRAC_PI_2, 25.0, 15.0);

    let target = nearest_visible_enemy(&cone, Vec2::ZERO, &entities).unwrap();
    assert_eq!(target.id, EntityId(7));
}

#[test]
fn test_lock_on_none_when_cone_empty() {
    let entities = vec![
        archetypes::enemy(EntityId(0), EnemyKind::Runner, Vec2::new(0.0, -10.0), 0.0),
        archetypes::enemy(EntityId(1), EnemyKind::Asteroid, Vec2::new(0.0, 10.0), 0.0),
        archetypes::player(EntityId(2), Vec2::new(0.0, 8.0)),
    ];
    let cone = VisionCone::new(Vec2::ZERO, FRAC_PI_2, 25.0, 15.0);
    assert!(nearest_visible_enemy(&cone, Vec2::ZERO, &entities).is_none());
}

#[test]
fn test_auto_aim_switches_weapon_until_expiry() {
    let mut engine = quiet_engine();
    engine.register_effect(Effect::auto_aim());
    engine.tick(DT);

    engine.queue_command(PlayerCommand::Fire);
    let snap = engine.tick(DT);
    assert!(snap.audio_events.contains(&AudioEvent::ShotFired {
        kind: ProjectileKind::LockOn
    }));
    assert_eq!(snap.effects.len(), 1);
    assert_eq!(snap.effects[0].kind, EffectTag::AutoAim);

    let mut snap = engine.tick(AUTO_AIM_DURATION);
    assert!(snap.effects.is_empty(), "Expired");
    snap = engine.tick(DT);
    assert!(snap.effects.is_empty());

    engine.queue_command(PlayerCommand::Fire);
    let snap = engine.tick(DT);
    assert!(snap.audio_events.contains(&AudioEvent::ShotFired {
        kind: ProjectileKind::Standard
    }));
}

// ---- Pickups and effects ----

#[test]
fn test_collecting_pickup_registers_effect() {
    let mut engine = quiet_engine();
    let start = engine.config().player_start;
    let pickup = engine.insert_entity(|id| archetypes::pickup(id, PickupKind::RapidFire, start));

    let snap = engine.tick(DT);
    assert!(engine.entity(pickup).is_none());
    assert!(snap.audio_events.contains(&AudioEvent::PickupCollected {
        kind: PickupKind::RapidFire
    }));
    assert_eq!(snap.effects.len(), 1);
    assert_eq!(snap.effects[0].kind, EffectTag::RapidFire);

    let ship = engine.player().and_then(|p| p.as_player()).unwrap();
    assert_eq!(ship.fire_rate_multiplier(), RAPID_FIRE_MULTIPLIER);

    engine.queue_command(PlayerCommand::Fire);
    engine.tick(DT);
    let ship = engine.player().and_then(|p| p.as_player()).unwrap();
    let expected = PLAYER_FIRE_COOLDOWN * RAPID_FIRE_MULTIPLIER - DT;
    assert!((ship.cooldown() - expected).abs() < 1e-5);
}

#[test]
fn test_pickups_ignore_everything_but_the_player() {
    let mut engine = quiet_engine();
    let at = Vec2::new(20.0, 20.0);
    let pickup = engine.insert_entity(|id| archetypes::pickup(id, PickupKind::Heal, at));
    engine.insert_entity(|id| archetypes::enemy(id, EnemyKind::Asteroid, at, 0.0));

    let snap = engine.tick(DT);
    assert!(engine.entity(pickup).is_some());
    assert!(snap.effects.is_empty());
}

#[test]
fn test_oversized_heal_tops_up_without_overflow() {
    let mut engine = quiet_engine();
    engine.register_effect(Effect::new(
        EffectKind::Heal { amount: i32::MAX },
        EffectDuration::Instant,
    ));

    let snap = engine.tick(DT);
    assert_eq!(snap.phase, GamePhase::Active);
    assert_eq!(snap.score.player_health, PLAYER_MAX_HEALTH);
    assert!(snap.effects.is_empty());
}

// ---- Enemy fire ----

#[test]
fn test_gunner_shot_hits_player() {
    let mut engine = quiet_engine();
    engine.insert_entity(|id| {
        archetypes::enemy(id, EnemyKind::Gunner, Vec2::new(50.0, 80.0), 0.0)
    });

    let first = engine.tick(GUNNER_FIRE_INTERVAL);
    let enemy_shot = EntityKind::Projectile {
        kind: ProjectileKind::Standard,
        faction: Faction::Enemy,
    };
    assert_eq!(count_kind(&first, enemy_shot), 1);
    assert_eq!(first.score.shots_fired, 0, "Enemy shots are not the player's");

    let mut events = Vec::new();
    for _ in 0..6 {
        events.extend(engine.tick(0.25).audio_events);
    }
    assert!(events.contains(&AudioEvent::PlayerHit {
        damage: ENEMY_PROJECTILE_DAMAGE
    }));
    assert_eq!(
        engine.player().and_then(|p| p.health()).map(|h| h.current()),
        Some(PLAYER_MAX_HEALTH - ENEMY_PROJECTILE_DAMAGE)
    );
}

// ---- Session lifecycle ----

#[test]
fn test_player_death_ends_session() {
    let mut engine = quiet_engine();
    let start = engine.config().player_start;
    let rams = PLAYER_MAX_HEALTH / RUNNER_DAMAGE;
    for _ in 0..rams {
        engine.insert_entity(|id| archetypes::enemy(id, EnemyKind::Runner, start, 0.0));
    }

    let snap = engine.tick(DT);
    assert_eq!(snap.phase, GamePhase::GameOver);
    assert!(engine.player().is_none());
    assert_eq!(snap.score.player_health, 0);
    assert!(snap
        .audio_events
        .iter()
        .any(|e| matches!(e, AudioEvent::PlayerDestroyed { .. })));

    let frozen = engine.time();
    let snap = engine.tick(DT);
    assert_eq!(snap.phase, GamePhase::GameOver);
    assert_eq!(engine.time().tick, frozen.tick, "Systems stop after game over");
}

#[test]
fn test_restart_resets_score_and_world() {
    let mut engine = quiet_engine();
    let at = Vec2::new(30.0, 80.0);
    engine.insert_entity(|id| archetypes::enemy(id, EnemyKind::Gunner, at, 0.0));
    for _ in 0..2 {
        engine.insert_entity(player_shot_at(at));
    }
    assert_eq!(engine.tick(DT).score.points, GUNNER_POINTS);

    engine.queue_command(PlayerCommand::Restart);
    let snap = engine.tick(DT);
    assert_eq!(snap.score.points, 0);
    assert_eq!(snap.score.enemies_destroyed, 0);
    assert_eq!(snap.phase, GamePhase::Active);
    assert_eq!(snap.entities.len(), 1, "Only the fresh player");
    assert_eq!(snap.entities[0].id, 0, "Ids restart with the session");
    assert!(snap.animations.is_empty());
    assert_eq!(snap.time.tick, 1);
}

#[test]
fn test_pause_and_resume() {
    let mut engine = quiet_engine();
    engine.tick(DT);

    engine.queue_command(PlayerCommand::Pause);
    let paused = engine.tick(DT);
    assert_eq!(paused.phase, GamePhase::Paused);
    assert_eq!(paused.time.tick, 1, "Time frozen while paused");

    engine.queue_command(PlayerCommand::Fire);
    assert_eq!(engine.tick(DT).score.shots_fired, 0, "Fire ignored while paused");

    engine.queue_command(PlayerCommand::Resume);
    let resumed = engine.tick(DT);
    assert_eq!(resumed.phase, GamePhase::Active);
    assert_eq!(resumed.time.tick, 2);
}

#[test]
fn test_invalid_delta_is_a_no_op() {
    let mut engine = quiet_engine();
    engine.queue_command(PlayerCommand::Pause);

    for bad in [0.0, -0.5, f32::NAN, f32::INFINITY] {
        let snap = engine.tick(bad);
        assert_eq!(snap.time.tick, 0);
        assert_eq!(snap.phase, GamePhase::Active, "Commands stay queued");
    }

    assert_eq!(engine.tick(DT).phase, GamePhase::Paused);
}

#[test]
fn test_invalid_config_rejected() {
    let config = SimConfig {
        spawner: SpawnerConfig {
            weights: Vec::new(),
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(matches!(
        SimulationEngine::new(config),
        Err(crate::SimError::InvalidConfig { field: "weights", .. })
    ));
}

#[test]
fn test_offscreen_fixed_spawn_point_rejected() {
    let config = SimConfig {
        spawner: SpawnerConfig {
            placement: SpawnPlacement::Fixed { x: 500.0, y: 500.0 },
            ..quiet_config().spawner
        },
        ..Default::default()
    };
    assert!(matches!(
        SimulationEngine::new(config),
        Err(crate::SimError::InvalidConfig { field: "placement", .. })
    ));
}

// ---- Movement and cleanup ----

#[test]
fn test_move_and_aim_commands() {
    let mut engine = quiet_engine();
    engine.queue_commands([
        PlayerCommand::AimAt { x: 90.0, y: 50.0 },
        PlayerCommand::Move { x: 3.0, y: 0.0 },
    ]);
    engine.tick(0.1);

    let player = engine.player().unwrap();
    assert!(player.body().rotation.abs() < 1e-5, "Facing east");
    let expected_x = 50.0 + PLAYER_SPEED * 0.1;
    assert!((player.center().x - expected_x).abs() < 1e-4);
}

#[test]
fn test_player_clamped_inside_world() {
    let mut engine = quiet_engine();
    engine.queue_command(PlayerCommand::Move { x: -1.0, y: 0.0 });
    for _ in 0..10 {
        engine.tick(1.0);
    }
    let player = engine.player().unwrap();
    assert!((player.center().x - PLAYER_SIZE / 2.0).abs() < 1e-4);
}

#[test]
fn test_missed_shots_are_culled() {
    let mut engine = quiet_engine();
    engine.queue_command(PlayerCommand::Fire);
    engine.tick(DT);
    assert_eq!(engine.entities().len(), 2);

    // 60 units/s: well past the margin after two seconds.
    engine.tick(2.0);
    assert_eq!(engine.entities().len(), 1);
}

#[test]
fn test_collision_outcome_exposed() {
    let mut engine = quiet_engine();
    let runner = engine.insert_entity(|id| {
        archetypes::enemy(id, EnemyKind::Runner, Vec2::new(20.0, 20.0), 0.0)
    });
    let shot = engine.insert_entity(player_shot_at(Vec2::new(20.0, 20.0)));
    engine.tick(DT);

    let outcome = engine.last_collisions();
    assert!(outcome.was_evaluated(runner, shot));
    assert!(outcome.was_evaluated(shot, runner));
    assert_eq!(outcome.destroyed, vec![shot]);
}
