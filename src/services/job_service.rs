//! Job catalog service - Browsing and importing job listings.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use crate::domain::{JobListing, JobListingResponse, NewJobListing};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::JobRepository;
use crate::types::{Paginated, PaginationParams};

/// Job catalog service trait for dependency injection.
#[async_trait]
pub trait JobService: Send + Sync {
    /// List one page of job listings
    async fn list_jobs(&self, params: &PaginationParams) -> AppResult<Paginated<JobListingResponse>>;

    /// Get a single job listing
    async fn get_job(&self, id: i32) -> AppResult<JobListingResponse>;

    /// Validate and store a batch of new listings, published now
    async fn import_jobs(&self, listings: Vec<NewJobListing>) -> AppResult<Vec<JobListing>>;
}

/// Concrete implementation of JobService over a [`JobRepository`].
pub struct JobCatalog {
    repo: Arc<dyn JobRepository>,
}

impl JobCatalog {
    pub fn new(repo: Arc<dyn JobRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl JobService for JobCatalog {
    async fn list_jobs(&self, params: &PaginationParams) -> AppResult<Paginated<JobListingResponse>> {
        params
            .validate()
            .map_err(|e| AppError::validation(describe(&e)))?;

        let per_page = params.limit();
        let (jobs, total) = self.repo.find_page(params.page, per_page).await?;
        tracing::debug!(page = params.page, per_page, total, "Listed jobs");

        Ok(Paginated::new(jobs, params.page, per_page, total).map(JobListingResponse::from))
    }

    async fn get_job(&self, id: i32) -> AppResult<JobListingResponse> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_not_found("Job")
            .map(JobListingResponse::from)
    }

    async fn import_jobs(&self, listings: Vec<NewJobListing>) -> AppResult<Vec<JobListing>> {
        if listings.is_empty() {
            return Err(AppError::validation("No job listings to import"));
        }

        for (index, listing) in listings.iter().enumerate() {
            listing.validate().map_err(|e| {
                AppError::validation(format!("Listing #{}: {}", index + 1, describe(&e)))
            })?;
        }

        let published_at = chrono::Utc::now().timestamp();
        let created = self.repo.create_many(listings, published_at).await?;
        tracing::info!(count = created.len(), "Imported job listings");

        Ok(created)
    }
}

/// Flatten validation errors into their messages, sorted for stable output.
fn describe(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}
