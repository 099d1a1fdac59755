//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Job Bridge - job board backend with demo login and registration forms
#[derive(Parser, Debug)]
#[command(name = "job-bridge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),

    /// Check a login or registration form from the command line
    Check(CheckArgs),

    /// Manage job listings
    Listings(ListingsArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to (overrides SERVER_HOST)
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on (overrides SERVER_PORT)
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Reject malformed email addresses
    #[arg(
        long,
        env = "STRICT_EMAIL_VALIDATION",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub strict_email: bool,

    #[command(subcommand)]
    pub form: CheckForm,
}

/// Forms that can be checked
#[derive(Subcommand, Debug)]
pub enum CheckForm {
    /// Login form
    Login {
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Registration form
    Register {
        #[arg(long, default_value = "")]
        username: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long, default_value = "")]
        confirm_password: String,
    },
}

/// Arguments for the listings command
#[derive(Parser, Debug)]
pub struct ListingsArgs {
    #[command(subcommand)]
    pub action: ListingsAction,
}

/// Job listing actions
#[derive(Subcommand, Debug)]
pub enum ListingsAction {
    /// Import listings from a JSON array file
    Import {
        /// Path to the JSON file
        path: PathBuf,
    },
    /// Print one page of listings
    List {
        #[arg(long, default_value_t = 1)]
        page: u64,
        #[arg(long, default_value_t = 10)]
        per_page: u64,
    },
}
