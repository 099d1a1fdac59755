//! Login and registration form handlers.
//!
//! `/login` and `/register` take urlencoded HTML form posts, `/api/login`
//! and `/api/register` take the same fields as JSON. Both answer with the
//! notification to show the user.

use axum::{extract::State, routing::post, Form, Json, Router};
use axum_extra::extract::WithRejection;

use crate::api::AppState;
use crate::domain::{LoginForm, RegistrationForm};
use crate::errors::{AppError, AppResult};
use crate::types::NoticeResponse;

/// Create form submission routes
pub fn form_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login_form))
        .route("/register", post(register_form))
        .route("/api/login", post(login))
        .route("/api/register", post(register))
}

/// Submit the login form
#[utoipa::path(
    post,
    path = "/login",
    tag = "Forms",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Login successful! (Demo)", body = NoticeResponse),
        (status = 400, description = "Please fill in all fields")
    )
)]
pub async fn login_form(
    State(state): State<AppState>,
    WithRejection(Form(form), _): WithRejection<Form<LoginForm>, AppError>,
) -> AppResult<NoticeResponse> {
    let notice = state.form_service.login(&form)?;
    Ok(NoticeResponse::new(notice.message()))
}

/// Submit the registration form
#[utoipa::path(
    post,
    path = "/register",
    tag = "Forms",
    request_body(content = RegistrationForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Registration successful! (Demo)", body = NoticeResponse),
        (status = 400, description = "Please fill in all fields, or Passwords do not match")
    )
)]
pub async fn register_form(
    State(state): State<AppState>,
    WithRejection(Form(form), _): WithRejection<Form<RegistrationForm>, AppError>,
) -> AppResult<NoticeResponse> {
    let notice = state.form_service.register(&form)?;
    Ok(NoticeResponse::new(notice.message()))
}

/// Submit login fields as JSON
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Forms",
    request_body = LoginForm,
    responses(
        (status = 200, description = "Login successful! (Demo)", body = NoticeResponse),
        (status = 400, description = "Please fill in all fields")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    WithRejection(Json(form), _): WithRejection<Json<LoginForm>, AppError>,
) -> AppResult<NoticeResponse> {
    let notice = state.form_service.login(&form)?;
    Ok(NoticeResponse::new(notice.message()))
}

/// Submit registration fields as JSON
#[utoipa::path(
    post,
    path = "/api/register",
    tag = "Forms",
    request_body = RegistrationForm,
    responses(
        (status = 200, description = "Registration successful! (Demo)", body = NoticeResponse),
        (status = 400, description = "Please fill in all fields, or Passwords do not match")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    WithRejection(Json(form), _): WithRejection<Json<RegistrationForm>, AppError>,
) -> AppResult<NoticeResponse> {
    let notice = state.form_service.register(&form)?;
    Ok(NoticeResponse::new(notice.message()))
}
