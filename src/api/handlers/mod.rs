//! HTTP request handlers.

pub mod form_handler;
pub mod job_handler;

pub use form_handler::form_routes;
pub use job_handler::job_routes;
