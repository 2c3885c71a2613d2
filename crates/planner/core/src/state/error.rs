//! Build validation errors.
//!
//! Raised at the write boundary before a payload becomes a [`Build`](super::Build).
//! Every variant names the field that failed so callers can surface it verbatim.

use crate::error::{ErrorSeverity, PlannerError};
use crate::stats::AttributeParseError;

use super::equipment::{EquipPosition, ItemList};
use super::ids::ItemId;
use super::item::ItemCategory;

/// Errors that reject a build write as a whole.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Trimmed name is shorter or longer than allowed.
    #[error("build name must be between {min} and {max} characters (got {len})")]
    NameLength {
        /// Trimmed character count.
        len: usize,
        min: usize,
        max: usize,
    },

    /// Trimmed username is too short.
    #[error("username must be at least {min} characters (got {len})")]
    UsernameLength { len: usize, min: usize },

    /// Attribute map is incomplete, has unknown keys, or holds an out-of-range value.
    #[error("invalid attributes: {0}")]
    Attributes(#[from] AttributeParseError),

    /// Equipment key outside the closed slot set.
    #[error("unknown equipment slot '{0}'")]
    UnknownSlot(String),

    /// Slot value is neither empty nor a well-formed item identifier.
    #[error("{position} holds a malformed item id '{value}'")]
    MalformedItemId {
        position: EquipPosition,
        value: String,
    },

    /// A fixed-capacity list was given more entries than it holds.
    #[error("{list} holds at most {max} entries (got {got})")]
    TooManyEntries { list: ItemList, max: usize, got: usize },

    /// Reference does not resolve to a catalog item.
    #[error("{position} references unknown item {id}")]
    UnknownItem { position: EquipPosition, id: ItemId },

    /// Referenced item has the wrong category for its position.
    #[error("{position} accepts {expected} but item {id} is {found}")]
    CategoryMismatch {
        position: EquipPosition,
        id: ItemId,
        expected: ItemCategory,
        found: ItemCategory,
    },
}

impl PlannerError for ValidationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NameLength { .. } => "NAME_LENGTH",
            Self::UsernameLength { .. } => "USERNAME_LENGTH",
            Self::Attributes(_) => "INVALID_ATTRIBUTES",
            Self::UnknownSlot(_) => "UNKNOWN_SLOT",
            Self::MalformedItemId { .. } => "MALFORMED_ITEM_ID",
            Self::TooManyEntries { .. } => "TOO_MANY_ENTRIES",
            Self::UnknownItem { .. } => "UNKNOWN_ITEM",
            Self::CategoryMismatch { .. } => "CATEGORY_MISMATCH",
        }
    }
}
