//! Integration tests for API endpoints.
//!
//! The router runs against the real form and job services, backed by an
//! in-memory job repository and a stub health probe, so no database is
//! required.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use job_bridge::api::{create_router, AppState};
use job_bridge::domain::{FormPolicy, JobListing, NewJobListing};
use job_bridge::errors::{AppError, AppResult};
use job_bridge::infra::{HealthProbe, JobRepository};
use job_bridge::services::{FormDesk, JobCatalog};

// =============================================================================
// Test doubles
// =============================================================================

/// Job repository kept in a vector
#[derive(Default)]
struct InMemoryJobs {
    jobs: Mutex<Vec<JobListing>>,
}

impl InMemoryJobs {
    fn with_jobs(count: i32) -> Self {
        let jobs = (1..=count)
            .map(|id| JobListing {
                id,
                job_name: format!("Job {}", id),
                description: "Description".to_string(),
                location: "Almaty".to_string(),
                busy: "Full time".to_string(),
                time_publication: 1_709_640_000,
                how_many_people: 1,
                salary: "1000".to_string(),
                favorites: "0".to_string(),
                question: "Why?".to_string(),
            })
            .collect();
        Self {
            jobs: Mutex::new(jobs),
        }
    }
}

#[async_trait]
impl JobRepository for InMemoryJobs {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<JobListing>> {
        let jobs = self.jobs.lock().unwrap();
        Ok(jobs.iter().find(|j| j.id == id).cloned())
    }

    async fn find_page(&self, page: u64, per_page: u64) -> AppResult<(Vec<JobListing>, u64)> {
        let jobs = self.jobs.lock().unwrap();
        let offset = ((page - 1) * per_page) as usize;
        let data = jobs
            .iter()
            .skip(offset)
            .take(per_page as usize)
            .cloned()
            .collect();
        Ok((data, jobs.len() as u64))
    }

    async fn create_many(
        &self,
        _listings: Vec<NewJobListing>,
        _time_publication: i64,
    ) -> AppResult<Vec<JobListing>> {
        Err(AppError::internal("not used over HTTP"))
    }
}

/// Health probe with a fixed answer
struct StubProbe {
    healthy: bool,
}

#[async_trait]
impl HealthProbe for StubProbe {
    async fn ping(&self) -> AppResult<()> {
        if self.healthy {
            Ok(())
        } else {
            Err(AppError::internal("database unreachable"))
        }
    }
}

// =============================================================================
// Test Helpers
// =============================================================================

fn app_with(policy: FormPolicy, jobs: i32, healthy: bool) -> Router {
    let state = AppState::new(
        Arc::new(FormDesk::new(policy)),
        Arc::new(JobCatalog::new(Arc::new(InMemoryJobs::with_jobs(jobs)))),
        Arc::new(StubProbe { healthy }),
    );
    create_router(state)
}

fn app() -> Router {
    app_with(FormPolicy::default(), 25, true)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn error_code(body: &Value) -> &str {
    body["error"]["code"].as_str().unwrap_or_default()
}

fn error_message(body: &Value) -> &str {
    body["error"]["message"].as_str().unwrap_or_default()
}

// =============================================================================
// Root and health
// =============================================================================

#[tokio::test]
async fn test_root_endpoint_returns_welcome_message() {
    let response = app().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"Welcome to Job Bridge");
}

#[tokio::test]
async fn test_health_reports_healthy_database() {
    let (status, body) = send(app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_health_reports_degraded_database() {
    let (status, body) = send(app_with(FormPolicy::default(), 0, false), get("/health")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["services"]["database"]["status"], "unhealthy");
    assert_eq!(body["services"]["database"]["error"], "INTERNAL_ERROR");
    assert!(!body.to_string().contains("unreachable"));
}

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn test_login_form_success() {
    let (status, body) = send(app(), post_form("/login", "email=a%40b.com&password=x")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "message": "Login successful! (Demo)"}));
}

#[tokio::test]
async fn test_login_form_empty_email() {
    let (status, body) = send(app(), post_form("/login", "email=&password=x")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "MISSING_FIELDS");
    assert_eq!(error_message(&body), "Please fill in all fields");
}

#[tokio::test]
async fn test_login_form_absent_field_counts_as_empty() {
    let (status, body) = send(app(), post_form("/login", "password=x")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Please fill in all fields");
}

#[tokio::test]
async fn test_login_json_success() {
    let (status, body) = send(
        app(),
        post_json("/api/login", json!({"email": "a@b.com", "password": "x"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful! (Demo)");
}

#[tokio::test]
async fn test_login_json_empty_password() {
    let (status, body) = send(
        app(),
        post_json("/api/login", json!({"email": "a@b.com", "password": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "MISSING_FIELDS");
}

#[tokio::test]
async fn test_login_json_null_field_counts_as_empty() {
    let (status, body) = send(
        app(),
        post_json("/api/login", json!({"email": "a@b.com", "password": null})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "MISSING_FIELDS");
    assert_eq!(error_message(&body), "Please fill in all fields");
}

#[tokio::test]
async fn test_login_json_malformed_body() {
    let request = Request::post("/api/login")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "BAD_REQUEST");
}

#[tokio::test]
async fn test_login_strict_email_policy() {
    let app = app_with(FormPolicy::strict(), 0, true);
    let (status, body) = send(app, post_form("/login", "email=nope&password=x")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "INVALID_EMAIL");
    assert_eq!(error_message(&body), "Invalid email format");
}

// =============================================================================
// Registration
// =============================================================================

#[tokio::test]
async fn test_register_form_success() {
    let (status, body) = send(
        app(),
        post_form(
            "/register",
            "username=bob&email=b%40x.com&password=p1&confirm_password=p1",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Registration successful! (Demo)");
}

#[tokio::test]
async fn test_register_form_accepts_html_field_name() {
    let (status, body) = send(
        app(),
        post_form(
            "/register",
            "username=bob&email=b%40x.com&password=p1&confirm-password=p2",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Passwords do not match");
}

#[tokio::test]
async fn test_register_json_mismatch() {
    let (status, body) = send(
        app(),
        post_json(
            "/api/register",
            json!({
                "username": "bob",
                "email": "b@x.com",
                "password": "p1",
                "confirmPassword": "p2"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "PASSWORD_MISMATCH");
    assert_eq!(error_message(&body), "Passwords do not match");
}

#[tokio::test]
async fn test_register_json_missing_field_wins_over_mismatch() {
    let (status, body) = send(
        app(),
        post_json(
            "/api/register",
            json!({
                "username": "",
                "email": "b@x.com",
                "password": "p1",
                "confirm_password": "p2"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "MISSING_FIELDS");
}

// =============================================================================
// Jobs
// =============================================================================

#[tokio::test]
async fn test_list_jobs_default_page() {
    let (status, body) = send(app(), get("/jobs")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 10);
    assert_eq!(
        body["meta"],
        json!({"page": 1, "per_page": 10, "total": 25, "total_pages": 3})
    );
    assert_eq!(body["data"][0]["published_on"], "05 Mar 2024");
}

#[tokio::test]
async fn test_list_jobs_last_page() {
    let (status, body) = send(app(), get("/jobs?page=3&per_page=10")).await;
    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 5);
    assert_eq!(data[0]["id"], 21);
}

#[tokio::test]
async fn test_list_jobs_rejects_large_page_size() {
    let (status, body) = send(app(), get("/jobs?per_page=51")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_list_jobs_rejects_page_zero() {
    let (status, body) = send(app(), get("/jobs?page=0")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_list_jobs_rejects_non_numeric_page() {
    let (status, body) = send(app(), get("/jobs?page=abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "BAD_REQUEST");
}

#[tokio::test]
async fn test_get_job() {
    let (status, body) = send(app(), get("/jobs/4")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["job_name"], "Job 4");
}

#[tokio::test]
async fn test_get_job_not_found() {
    let (status, body) = send(app(), get("/jobs/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&body), "Job not found");
}

#[tokio::test]
async fn test_get_job_rejects_non_numeric_id() {
    let (status, body) = send(app(), get("/jobs/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "BAD_REQUEST");
}
