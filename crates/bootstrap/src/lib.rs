//! Shared bootstrap utilities for planner front-ends.
//!
//! Provides environment configuration, tracing setup, and planner assembly that
//! can be reused by the CLI or any service embedding the planner.
pub mod builder;
pub mod config;
pub mod logging;

pub use builder::PlannerSetup;
pub use config::{BootstrapConfig, BuildStore, default_build_dir};
pub use logging::init_tracing;
