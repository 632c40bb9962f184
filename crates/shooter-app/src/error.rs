//! Application errors.

use std::path::PathBuf;

use shooter_sim::SimError;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("failed to read config file {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Sim(#[from] SimError),

    #[error("failed to spawn game loop thread: {0}")]
    SpawnLoop(#[source] std::io::Error),

    #[error("game loop already running")]
    AlreadyRunning,

    #[error("game loop not started")]
    NotRunning,

    /// The loop thread exited and dropped its receiver.
    #[error("game loop has shut down")]
    Disconnected,

    #[error("shared state lock poisoned")]
    Poisoned,

    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}
