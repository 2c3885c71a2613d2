//! In-memory repository implementations for testing and development.

mod build;
mod favorite;
mod profile;

pub use build::InMemoryBuildRepository;
pub use favorite::InMemoryFavoriteRepository;
pub use profile::InMemoryProfileRepository;
