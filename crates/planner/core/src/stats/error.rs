//! Input-contract violations raised by the stats engine.

use crate::error::{ErrorSeverity, PlannerError};

use super::attributes::Attribute;

/// Errors raised when the engine is handed values outside its contract.
///
/// The engine never clamps its inputs; it rejects them and names the field.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum StatsError {
    /// An attribute value lies outside `[1, 99]`.
    #[error("{attribute} must be between 1 and 99 (got {value})")]
    AttributeOutOfRange { attribute: Attribute, value: i64 },

    /// An equipped item or carry total has a negative weight.
    #[error("weight must not be negative (got {weight})")]
    NegativeWeight { weight: f64 },

    /// An equipped item or carry total is NaN or infinite.
    #[error("weight must be a finite number")]
    NonFiniteWeight,
}

impl PlannerError for StatsError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AttributeOutOfRange { .. } => "ATTRIBUTE_OUT_OF_RANGE",
            Self::NegativeWeight { .. } => "NEGATIVE_WEIGHT",
            Self::NonFiniteWeight => "NON_FINITE_WEIGHT",
        }
    }
}

/// Rejects NaN, infinities, and negative weights.
pub(crate) fn check_weight(weight: f64) -> Result<f64, StatsError> {
    if !weight.is_finite() {
        return Err(StatsError::NonFiniteWeight);
    }
    if weight < 0.0 {
        return Err(StatsError::NegativeWeight { weight });
    }
    Ok(weight)
}
