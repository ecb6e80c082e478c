//! Host runtime errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use bennu_core::error::CommandRejected;

pub type RuntimeResult<T> = Result<T, RuntimeError>;

#[derive(Error, Debug)]
pub enum RuntimeError {
    /// The mission loop thread could not be started.
    #[error("failed to spawn mission loop: {0}")]
    Spawn(#[source] io::Error),

    /// The mission loop has exited; no further commands can be delivered.
    #[error("mission loop has stopped")]
    LoopStopped,

    #[error("mission loop panicked")]
    LoopPanicked,

    #[error("latest snapshot lock poisoned")]
    SnapshotPoisoned,

    /// The mission refused the command. State is unchanged.
    #[error("command rejected: {0}")]
    Rejected(#[from] CommandRejected),

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// A parsed value would break the mission's invariants.
    #[error("invalid config value {field}: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },

    #[error("failed to encode report: {0}")]
    Encode(#[source] serde_json::Error),
}
