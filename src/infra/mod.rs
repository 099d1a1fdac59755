//! Infrastructure layer - External systems integration
//!
//! - Database connection and migrations
//! - Repositories over SeaORM entities

pub mod db;
pub mod repositories;

pub use db::{Database, HealthProbe, Migrator};
pub use repositories::{JobRepository, JobStore};

#[cfg(test)]
pub use repositories::MockJobRepository;
