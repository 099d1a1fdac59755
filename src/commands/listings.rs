//! Listings command - Import and inspect job listings.

use std::path::Path;
use std::sync::Arc;

use crate::cli::args::{ListingsAction, ListingsArgs};
use crate::config::Config;
use crate::domain::NewJobListing;
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, JobStore};
use crate::services::{JobCatalog, JobService};
use crate::types::PaginationParams;

/// Execute the listings command
pub async fn execute(args: ListingsArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config).await?;
    let catalog = JobCatalog::new(Arc::new(JobStore::new(db.get_connection())));

    match args.action {
        ListingsAction::Import { path } => {
            let listings = read_listings(&path)?;
            tracing::info!("Importing {} listing(s) from {}", listings.len(), path.display());
            let created = catalog.import_jobs(listings).await?;
            for job in &created {
                println!("{}\t{}", job.id, job.job_name);
            }
        }
        ListingsAction::List { page, per_page } => {
            let result = catalog
                .list_jobs(&PaginationParams::new(page, per_page))
                .await?;
            for job in &result.data {
                println!(
                    "{}\t{}\t{}\t{}",
                    job.id, job.job_name, job.location, job.published_on
                );
            }
            println!(
                "page {}/{} ({} total)",
                result.meta.page, result.meta.total_pages, result.meta.total
            );
        }
    }

    Ok(())
}

/// Read a JSON array of new listings from disk.
fn read_listings(path: &Path) -> AppResult<Vec<NewJobListing>> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        AppError::BadRequest(format!("Cannot read {}: {}", path.display(), e))
    })?;
    parse_listings(&raw)
}

fn parse_listings(raw: &str) -> AppResult<Vec<NewJobListing>> {
    serde_json::from_str(raw)
        .map_err(|e| AppError::BadRequest(format!("Malformed listings file: {}", e)))
}
