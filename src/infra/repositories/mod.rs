//! Repository layer - Data access abstraction

pub(crate) mod entities;
mod job_repository;

pub use job_repository::{JobRepository, JobStore};

#[cfg(test)]
pub use job_repository::MockJobRepository;
