//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from validation, the stats engine, and repositories so
//! clients can tell a bad request from an unreachable store.

use planner_core::{BuildId, ErrorSeverity, PlannerError, StatsError, UserId, ValidationError};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("build {0} not found")]
    BuildNotFound(BuildId),

    #[error("user {user} does not own build {build_id}")]
    Unauthorized { user: UserId, build_id: BuildId },

    #[error("planner requires an item catalog to be configured before building")]
    MissingCatalog,

    #[error("planner requires a {0} repository to be configured before building")]
    MissingRepository(&'static str),
}

impl PlannerError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Validation(err) => err.severity(),
            Self::Stats(err) => err.severity(),
            Self::Repository(err) => err.severity(),
            Self::BuildNotFound(_) => ErrorSeverity::NotFound,
            Self::Unauthorized { .. } => ErrorSeverity::Authorization,
            Self::MissingCatalog | Self::MissingRepository(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(err) => err.error_code(),
            Self::Stats(err) => err.error_code(),
            Self::Repository(err) => err.error_code(),
            Self::BuildNotFound(_) => "BUILD_NOT_FOUND",
            Self::Unauthorized { .. } => "UNAUTHORIZED",
            Self::MissingCatalog => "MISSING_CATALOG",
            Self::MissingRepository(_) => "MISSING_REPOSITORY",
        }
    }
}
