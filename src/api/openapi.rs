//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{form_handler, job_handler};
use crate::domain::{JobListingResponse, LoginForm, RegistrationForm};
use crate::types::{JobListingPage, NoticeResponse, PaginationMeta};

/// OpenAPI documentation for Job Bridge
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Job Bridge",
        version = "0.1.0",
        description = "Job board backend with demo login and registration forms",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Form endpoints
        form_handler::login_form,
        form_handler::register_form,
        form_handler::login,
        form_handler::register,
        // Job endpoints
        job_handler::list_jobs,
        job_handler::get_job,
    ),
    components(
        schemas(
            LoginForm,
            RegistrationForm,
            NoticeResponse,
            JobListingResponse,
            JobListingPage,
            PaginationMeta,
        )
    ),
    tags(
        (name = "Forms", description = "Demo login and registration form submission"),
        (name = "Jobs", description = "Job listing catalog")
    )
)]
pub struct ApiDoc;
