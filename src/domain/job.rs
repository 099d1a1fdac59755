//! Job listing domain entity and related types.

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::config::PUBLICATION_DATE_FORMAT;

/// Job listing domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    pub id: i32,
    pub job_name: String,
    pub description: String,
    pub location: String,
    /// Employment type (full time, part time, ...)
    pub busy: String,
    /// Unix timestamp in seconds
    pub time_publication: i64,
    pub how_many_people: i32,
    pub salary: String,
    pub favorites: String,
    pub question: String,
}

impl JobListing {
    /// Publication date rendered for display, e.g. `05 Mar 2024` (UTC).
    pub fn published_on(&self) -> String {
        format_publication_date(self.time_publication)
    }
}

/// Render a unix timestamp with the publication date format.
///
/// Timestamps outside chrono's range fall back to the raw number.
pub fn format_publication_date(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format(PUBLICATION_DATE_FORMAT).to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

/// Job listing creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewJobListing {
    #[validate(length(min = 1, message = "job_name is required"))]
    pub job_name: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "location is required"))]
    pub location: String,
    #[validate(length(
        min = 1,
        max = 256,
        message = "busy is required and must be at most 256 characters"
    ))]
    pub busy: String,
    #[validate(range(min = 0, message = "how_many_people must not be negative"))]
    pub how_many_people: i32,
    #[validate(length(min = 1, message = "salary is required"))]
    pub salary: String,
    #[validate(length(min = 1, message = "favorites is required"))]
    pub favorites: String,
    #[validate(length(min = 1, message = "question is required"))]
    pub question: String,
}

/// Job listing response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct JobListingResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Backend Developer")]
    pub job_name: String,
    pub description: String,
    #[schema(example = "Almaty")]
    pub location: String,
    #[schema(example = "Full time")]
    pub busy: String,
    /// Publication date formatted as `%d %b %Y`
    #[schema(example = "05 Mar 2024")]
    pub published_on: String,
    /// Raw publication timestamp (unix seconds)
    pub time_publication: i64,
    pub how_many_people: i32,
    pub salary: String,
    pub favorites: String,
    pub question: String,
}

impl From<JobListing> for JobListingResponse {
    fn from(job: JobListing) -> Self {
        let published_on = job.published_on();
        Self {
            id: job.id,
            job_name: job.job_name,
            description: job.description,
            location: job.location,
            busy: job.busy,
            published_on,
            time_publication: job.time_publication,
            how_many_people: job.how_many_people,
            salary: job.salary,
            favorites: job.favorites,
            question: job.question,
        }
    }
}
