//! Error types raised by repository implementations.

use planner_core::{ErrorSeverity, PlannerError};
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    /// Remote store could not be reached or timed out.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl PlannerError for RepositoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Io(_) | Self::Unavailable(_) => ErrorSeverity::Transient,
            Self::LockPoisoned | Self::Serialization(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::LockPoisoned => "LOCK_POISONED",
            Self::Io(_) => "STORE_IO",
            Self::Serialization(_) => "STORE_SERIALIZATION",
            Self::Unavailable(_) => "STORE_UNAVAILABLE",
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
