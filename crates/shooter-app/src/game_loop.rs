//! Game loop thread: runs the simulation engine at 60Hz and publishes snapshots.
//!
//! The engine is built on the caller's thread so config errors surface
//! immediately, then moved into the loop. Commands arrive via an `mpsc`
//! channel. Snapshots are stored in shared state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use log::{debug, info};

use shooter_core::constants::{DT, TICK_RATE};
use shooter_core::state::GameStateSnapshot;
use shooter_sim::{SimConfig, SimulationEngine};

use crate::error::AppError;
use crate::state::GameLoopCommand;

/// Wall-clock duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the caller to use.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> Result<mpsc::Sender<GameLoopCommand>, AppError> {
    let engine = SimulationEngine::new(config)?;
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("shooter-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, cmd_rx, &latest_snapshot);
        })
        .map_err(AppError::SpawnLoop)?;

    Ok(cmd_tx)
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut next_tick_time = Instant::now();
    let mut last_phase = engine.phase();
    info!("game loop started at {TICK_RATE}Hz");

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    info!("game loop stopped at tick {}", engine.time().tick);
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one tick (engine handles pause and game over internally)
        let snapshot = engine.tick(DT);
        if snapshot.phase != last_phase {
            debug!("phase {last_phase:?} -> {:?}", snapshot.phase);
            last_phase = snapshot.phase;
        }

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}
