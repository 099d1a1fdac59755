//! Job listing handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use axum_extra::extract::WithRejection;

use crate::api::AppState;
use crate::domain::JobListingResponse;
use crate::errors::{AppError, AppResult};
use crate::types::{JobListingPage, Paginated, PaginationParams};

/// Create job listing routes
pub fn job_routes() -> Router<AppState> {
    Router::new()
        .route("/jobs", get(list_jobs))
        .route("/jobs/:id", get(get_job))
}

/// List job listings ordered by ID
#[utoipa::path(
    get,
    path = "/jobs",
    tag = "Jobs",
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of job listings", body = JobListingPage),
        (status = 400, description = "Invalid pagination parameters")
    )
)]
pub async fn list_jobs(
    State(state): State<AppState>,
    WithRejection(Query(params), _): WithRejection<Query<PaginationParams>, AppError>,
) -> AppResult<Json<Paginated<JobListingResponse>>> {
    let page = state.job_service.list_jobs(&params).await?;
    Ok(Json(page))
}

/// Get a job listing by ID
#[utoipa::path(
    get,
    path = "/jobs/{id}",
    tag = "Jobs",
    params(
        ("id" = i32, Path, description = "Job listing ID")
    ),
    responses(
        (status = 200, description = "Job listing", body = JobListingResponse),
        (status = 404, description = "Job not found")
    )
)]
pub async fn get_job(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> AppResult<Json<JobListingResponse>> {
    let job = state.job_service.get_job(id).await?;
    Ok(Json(job))
}
