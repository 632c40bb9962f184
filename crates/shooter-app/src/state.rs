//! Application state shared between the caller and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use shooter_core::commands::PlayerCommand;
use shooter_core::state::GameStateSnapshot;
use shooter_sim::SimConfig;

use crate::error::AppError;
use crate::game_loop;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Handle to a running (or not yet started) game loop.
///
/// `mpsc::Sender` is `Send` but not `Sync`, so it sits behind a `Mutex`.
/// The latest snapshot is shared with the loop thread through an `Arc`.
pub struct AppState {
    /// `None` until `start` succeeds.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an engine from `config` and start ticking it on its own thread.
    pub fn start(&self, config: SimConfig) -> Result<(), AppError> {
        let mut running = self.running.lock().map_err(|_| AppError::Poisoned)?;
        if *running {
            return Err(AppError::AlreadyRunning);
        }

        let cmd_tx = game_loop::spawn_game_loop(config, self.latest_snapshot.clone())?;

        let mut tx_lock = self.command_tx.lock().map_err(|_| AppError::Poisoned)?;
        *tx_lock = Some(cmd_tx);
        *running = true;
        Ok(())
    }

    /// Forward a player command to the loop.
    pub fn send_command(&self, command: PlayerCommand) -> Result<(), AppError> {
        self.send(GameLoopCommand::PlayerCommand(command))
    }

    /// Ask the loop to exit. The thread finishes its current tick first.
    pub fn stop(&self) -> Result<(), AppError> {
        self.send(GameLoopCommand::Shutdown)?;
        let mut tx_lock = self.command_tx.lock().map_err(|_| AppError::Poisoned)?;
        *tx_lock = None;
        let mut running = self.running.lock().map_err(|_| AppError::Poisoned)?;
        *running = false;
        Ok(())
    }

    /// Most recent snapshot, if the loop has ticked at least once.
    pub fn snapshot(&self) -> Result<Option<GameStateSnapshot>, AppError> {
        let lock = self.latest_snapshot.lock().map_err(|_| AppError::Poisoned)?;
        Ok(lock.clone())
    }

    fn send(&self, command: GameLoopCommand) -> Result<(), AppError> {
        let tx_lock = self.command_tx.lock().map_err(|_| AppError::Poisoned)?;
        match tx_lock.as_ref() {
            Some(tx) => tx.send(command).map_err(|_| AppError::Disconnected),
            None => Err(AppError::NotRunning),
        }
    }
}
