//! Runtime wrappers around static content oracles.
//!
//! These implementations expose `planner-core` oracle traits. The data is
//! immutable at runtime; dynamic state lives in repositories.
mod items;

pub use items::ItemOracleImpl;
