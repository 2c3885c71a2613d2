//! Topic-based event bus for planner change notifications.
//!
//! Events are published after a write succeeds. Consumers (page caches, search
//! indexes) subscribe to the topics they need and invalidate on receipt.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{BuildEvent, FavoriteEvent};
