//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `migrate` - Database migrations
//! - `check` - Check a form submission offline
//! - `listings` - Import and list job listings

pub mod args;

pub use args::{Cli, Commands};
