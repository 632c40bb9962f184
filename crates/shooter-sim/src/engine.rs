//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the active entity set and every per-session
//! ledger, processes player commands, runs all systems with the frame delta
//! it is handed, and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use glam::Vec2;
use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use shooter_core::commands::PlayerCommand;
use shooter_core::enums::{Faction, GamePhase};
use shooter_core::events::AudioEvent;
use shooter_core::state::GameStateSnapshot;
use shooter_core::types::{Bounds, SimTime};

use crate::animation::AnimationLedger;
use crate::config::SimConfig;
use crate::effects::{Effect, EffectLedger};
use crate::entity::{archetypes, Entity, EntityId, IdAllocator, SimContext, SpawnRequest};
use crate::error::SimError;
use crate::score::ScoreState;
use crate::systems;
use crate::systems::collision::CollisionOutcome;
use crate::systems::spawner::Spawner;

/// The simulation engine. Owns the active set and all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    /// Active entities in insertion order.
    entities: Vec<Entity>,
    ids: IdAllocator,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    spawner: Spawner,
    effects: EffectLedger,
    animations: AnimationLedger,
    score: ScoreState,
    audio_events: Vec<AudioEvent>,
    last_collisions: CollisionOutcome,
}

impl SimulationEngine {
    /// Create an engine and start the first session.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let spawner = Spawner::new(config.spawner.clone())?;
        let mut engine = Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            entities: Vec::new(),
            ids: IdAllocator::default(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            command_queue: VecDeque::new(),
            spawner,
            effects: EffectLedger::default(),
            animations: AnimationLedger::default(),
            score: ScoreState::default(),
            audio_events: Vec::new(),
            last_collisions: CollisionOutcome::default(),
        };
        engine.start_session();
        Ok(engine)
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `delta_secs` and return the resulting snapshot.
    ///
    /// A non-positive or non-finite delta is ignored: queued commands stay
    /// queued and time does not move.
    pub fn tick(&mut self, delta_secs: f32) -> GameStateSnapshot {
        if !delta_secs.is_finite() || delta_secs <= 0.0 {
            warn!("ignoring tick with invalid delta {delta_secs}");
            return self.snapshot();
        }

        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems(delta_secs);
            self.time.advance(delta_secs);
        }

        self.snapshot()
    }

    /// Add an entity built by `make` to the end of the active set.
    pub fn insert_entity(&mut self, make: impl FnOnce(EntityId) -> Entity) -> EntityId {
        let id = self.ids.next_id();
        self.entities.push(make(id));
        id
    }

    /// Start a timed effect as if a pickup had been collected.
    pub fn register_effect(&mut self, effect: Effect) {
        self.effects.register(effect);
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id() == id)
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn player(&self) -> Option<&Entity> {
        self.entities.iter().find(|e| e.is_player())
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn effects(&self) -> &EffectLedger {
        &self.effects
    }

    pub fn animations(&self) -> &AnimationLedger {
        &self.animations
    }

    pub fn spawner(&self) -> &Spawner {
        &self.spawner
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Collision outcome of the most recent tick.
    pub fn last_collisions(&self) -> &CollisionOutcome {
        &self.last_collisions
    }

    /// Reset everything to the start of a session and place the player.
    fn start_session(&mut self) {
        self.entities.clear();
        self.ids = IdAllocator::default();
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.spawner.reset();
        self.effects.clear();
        self.animations.clear();
        self.score = ScoreState::default();
        self.audio_events.clear();
        self.last_collisions = CollisionOutcome::default();
        self.time = SimTime::default();
        self.phase = GamePhase::Active;

        let start = self.config.player_start;
        self.insert_entity(|id| archetypes::player(id, start));
        info!("session started (seed {}, player at {start})", self.config.seed);
    }

    fn snapshot(&mut self) -> GameStateSnapshot {
        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(
            &self.entities,
            &self.time,
            self.phase,
            &self.score,
            &self.effects,
            &self.animations,
            audio_events,
        )
    }

    fn player_mut(&mut self) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.is_player())
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Fire => {
                if self.phase != GamePhase::Active {
                    return;
                }
                if let Some(request) = self.player_mut().and_then(Entity::try_fire) {
                    self.fire(request);
                }
            }
            PlayerCommand::AimAt { x, y } => {
                let point = Vec2::new(x, y);
                if let Some(player) = self.player_mut() {
                    if let Some(ship) = player.as_player_mut() {
                        ship.set_aim(point);
                    }
                    player.body_mut().rotate_towards(point);
                }
            }
            PlayerCommand::Move { x, y } => {
                if let Some(ship) = self.player_mut().and_then(Entity::as_player_mut) {
                    ship.set_movement(Vec2::new(x, y));
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::Restart => self.start_session(),
        }
    }

    /// Append a projectile. Player shots count toward the score and make noise.
    fn fire(&mut self, request: SpawnRequest) {
        self.insert_entity(|id| archetypes::projectile(id, &request));
        if request.faction == Faction::Player {
            self.score.record_shot();
            self.audio_events
                .push(AudioEvent::ShotFired { kind: request.kind });
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, delta_secs: f32) {
        // 1. Spawning
        self.spawner
            .run(delta_secs, &mut self.rng, &mut self.entities, &mut self.ids);

        // 2. Collision resolution
        let mut ctx = SimContext {
            score: &mut self.score,
            effects: &mut self.effects,
            animations: &mut self.animations,
            audio_events: &mut self.audio_events,
        };
        self.last_collisions = systems::collision::run(&mut self.entities, &mut ctx);

        // 3. Timed effects
        let player = self.entities.iter_mut().find(|e| e.is_player());
        self.effects.tick(delta_secs, player);

        // 4. Entity updates; shots fired during the pass join afterwards
        let requests = systems::movement::run(&mut self.entities, delta_secs, Bounds::world());
        for request in requests {
            self.fire(request);
        }

        // 5. Animations
        self.animations.tick(delta_secs);

        // 6. Cleanup
        systems::cleanup::run(&mut self.entities);

        if self.player().is_none() {
            self.phase = GamePhase::GameOver;
            info!(
                "game over at {:.1}s with {} points",
                self.time.elapsed_secs, self.score.points
            );
        }
    }
}
