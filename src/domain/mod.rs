//! Domain layer - Core business entities and logic
//!
//! Form submission rules and the job listing entity, independent of
//! HTTP and database concerns.

pub mod forms;
pub mod job;

pub use forms::{is_valid_email, FormError, FormPolicy, LoginForm, Notice, RegistrationForm};
pub use job::{format_publication_date, JobListing, JobListingResponse, NewJobListing};
