//! File-based repository implementations.

mod build;

pub use build::FileBuildRepository;
