//! Event types for different topics.

use planner_core::{BuildId, UserId};
use serde::{Deserialize, Serialize};

/// Events related to build writes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildEvent {
    BuildCreated { build_id: BuildId, owner: UserId },
    BuildUpdated { build_id: BuildId, owner: UserId },
    /// The build and every favorite pointing at it are gone.
    BuildDeleted { build_id: BuildId, owner: UserId },
}

impl BuildEvent {
    pub fn build_id(&self) -> BuildId {
        match self {
            Self::BuildCreated { build_id, .. }
            | Self::BuildUpdated { build_id, .. }
            | Self::BuildDeleted { build_id, .. } => *build_id,
        }
    }
}

/// Events related to favorites
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FavoriteEvent {
    /// A user toggled a favorite; `favorited` is the resulting state.
    FavoriteToggled {
        user: UserId,
        build_id: BuildId,
        favorited: bool,
        count: usize,
    },
}
