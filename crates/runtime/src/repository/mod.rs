//! Repository layer for builds, favorites and profiles.
//!
//! In-memory implementations back tests and single-process runs; the file
//! build repository keeps builds across restarts.
mod error;
pub mod file;
pub mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileBuildRepository;
pub use memory::{InMemoryBuildRepository, InMemoryFavoriteRepository, InMemoryProfileRepository};
pub use traits::{BuildRepository, FavoriteRepository, ProfileRepository};

use planner_core::Build;

/// Sorts builds newest first. Ties fall back to id so the order is stable.
pub(crate) fn sort_newest_first(builds: &mut [Build]) {
    builds.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}
