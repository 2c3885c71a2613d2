//! Runtime service for the build planner.
//!
//! This crate wires the pure `planner-core` rules to storage, the item
//! catalog, and change notifications. Consumers embed [`Planner`] and call
//! it with an already authenticated [`planner_core::UserId`].
//!
//! Modules are organized by responsibility:
//! - [`planner`] hosts the service and its builder
//! - [`api`] exposes the errors and read models clients interact with
//! - [`events`] provides the topic-based event bus for cache invalidation
//! - [`oracle`] and [`repository`] provide data adapters reused by other crates
pub mod api;
pub mod events;
pub mod oracle;
pub mod planner;
pub mod repository;

pub use api::{BuildQuery, BuildSheet, BuildSummary, Result, RuntimeError, SlotView};
pub use events::{BuildEvent, Event, EventBus, FavoriteEvent, Topic};
pub use oracle::ItemOracleImpl;
pub use planner::{Planner, PlannerBuilder};
pub use repository::{
    BuildRepository, FavoriteRepository, FileBuildRepository, InMemoryBuildRepository,
    InMemoryFavoriteRepository, InMemoryProfileRepository, ProfileRepository, RepositoryError,
};
