//! Error types raised by link store implementations.

use thiserror::Error;

/// Errors surfaced by link store implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("link store lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted snapshot: {0}")]
    CorruptedData(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
