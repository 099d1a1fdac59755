//! Job Bridge - job board backend with demo login and registration forms.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Form rules and the job listing entity
//! - **services**: Form submission and job catalog use cases
//! - **infra**: Database connection, migrations and repositories
//! - **api**: HTTP handlers and routes
//! - **types**: Shared types (pagination, responses)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Check a registration form without a server
//! cargo run -- check register --username bob --email b@x.com --password p1 --confirm-password p1
//!
//! # Import job listings
//! cargo run -- listings import listings.json
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{FormError, FormPolicy, LoginForm, Notice, RegistrationForm};
pub use errors::{AppError, AppResult};
