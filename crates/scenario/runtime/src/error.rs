//! Unified error type surfaced by the runtime engines and services.
//!
//! Wraps validation failures from `scenario-core` and link store failures so
//! callers get one type with a [`severity`](EngineError::severity) to map to
//! a response.
use std::fmt;

use scenario_core::{ErrorSeverity, ValidationError};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{entity} {key} not found")]
    NotFound { entity: &'static str, key: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Stored rows contradict an invariant the engines maintain. Never retried.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl EngineError {
    pub fn not_found(entity: &'static str, key: impl fmt::Display) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound { .. } => ErrorSeverity::NotFound,
            Self::Validation(err) => err.severity(),
            Self::InvariantViolation(_) => ErrorSeverity::Internal,
            Self::Conflict(_) => ErrorSeverity::Conflict,
            Self::Repository(_) => ErrorSeverity::Storage,
        }
    }
}
