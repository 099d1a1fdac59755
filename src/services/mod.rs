//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

pub mod container;
mod form_service;
mod job_service;

pub use container::{ServiceContainer, Services};
pub use form_service::{FormDesk, FormService};
pub use job_service::{JobCatalog, JobService};
