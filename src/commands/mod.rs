//! Commands module - CLI command implementations.

pub mod check;
pub mod listings;
pub mod migrate;
pub mod serve;
