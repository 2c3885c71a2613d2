//! Common error infrastructure for planner-core.
//!
//! This module provides the classification shared by every error type in the
//! workspace. Domain-specific errors (`StatsError`, `ValidationError`) live next
//! to the code that raises them; collaborator errors live in the runtime crate.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each layer has its own error enum with specific variants
//! - **Actionable Messages**: Variants name the field or value that failed
//! - **Severity Classification**: Callers decide whether to retry from severity alone

/// Severity level of an error, used for categorization and retry decisions.
///
/// - **Transient**: The collaborator was unreachable or failed mid-operation
/// - **Validation**: Invalid input that should be rejected without retry
/// - **NotFound**: A referenced build or item does not exist
/// - **Authorization**: The acting user may not perform the operation
/// - **Internal**: Unexpected inconsistency that indicates a bug
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Collaborator failure; the same request may succeed later.
    ///
    /// Examples: store unreachable, I/O failure while persisting
    Transient,

    /// Invalid input; retrying without changes will fail again.
    ///
    /// Examples: attribute out of range, build name too short
    Validation,

    /// Referenced entity is absent.
    NotFound,

    /// Acting user does not own the target.
    Authorization,

    /// Unexpected state inconsistency.
    ///
    /// Examples: poisoned lock, corrupted stored document
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Transient => "transient",
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::Authorization => "authorization",
            Self::Internal => "internal",
        }
    }

    /// Returns true if the caller may retry the same request unchanged.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Transient)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all planner errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait PlannerError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for structured logs and for mapping errors onto response codes.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
