//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::{BuildEvent, FavoriteEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Build created, updated or deleted
    Builds,
    /// Favorite toggled
    Favorites,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Build(BuildEvent),
    Favorite(FavoriteEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Build(_) => Topic::Builds,
            Event::Favorite(_) => Topic::Favorites,
        }
    }
}

impl From<BuildEvent> for Event {
    fn from(event: BuildEvent) -> Self {
        Event::Build(event)
    }
}

impl From<FavoriteEvent> for Event {
    fn from(event: FavoriteEvent) -> Self {
        Event::Favorite(event)
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Cloning shares the underlying channels.
#[derive(Clone)]
pub struct EventBus {
    builds: broadcast::Sender<Event>,
    favorites: broadcast::Sender<Event>,
}

impl EventBus {
    pub const DEFAULT_CAPACITY: usize = 64;

    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            builds: broadcast::channel(capacity).0,
            favorites: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Builds => &self.builds,
            Topic::Favorites => &self.favorites,
        }
    }

    /// Publish an event to its corresponding topic
    ///
    /// Delivery is best-effort: with no subscribers the event is dropped.
    pub fn publish(&self, event: impl Into<Event>) {
        let event = event.into();
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::{BuildId, UserId};

    #[tokio::test]
    async fn subscribers_only_see_their_topic() {
        let bus = EventBus::with_capacity(8);
        let mut builds = bus.subscribe(Topic::Builds);
        let mut favorites = bus.subscribe(Topic::Favorites);

        let build_id = BuildId::new_v4();
        let owner = UserId::new_v4();
        bus.publish(BuildEvent::BuildCreated { build_id, owner });

        assert_eq!(
            builds.recv().await.unwrap(),
            Event::Build(BuildEvent::BuildCreated { build_id, owner })
        );
        assert!(favorites.try_recv().is_err());
    }

    #[test]
    fn publish_without_subscribers_is_silent() {
        let bus = EventBus::new();
        bus.publish(FavoriteEvent::FavoriteToggled {
            user: UserId::new_v4(),
            build_id: BuildId::new_v4(),
            favorited: true,
            count: 1,
        });
    }
}
