//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Database, HealthProbe};
use crate::services::{FormService, JobService, ServiceContainer, Services};

/// Application state containing all services.
#[derive(Clone)]
pub struct AppState {
    /// Login and registration form handling
    pub form_service: Arc<dyn FormService>,
    /// Job catalog
    pub job_service: Arc<dyn JobService>,
    /// Storage connectivity check
    pub health: Arc<dyn HealthProbe>,
}

impl AppState {
    /// Create application state from a database connection and config.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let services = Services::from_connection(database.get_connection(), config);

        Self {
            form_service: services.forms(),
            job_service: services.jobs(),
            health: database,
        }
    }

    /// Create application state with manually injected services.
    pub fn new(
        form_service: Arc<dyn FormService>,
        job_service: Arc<dyn JobService>,
        health: Arc<dyn HealthProbe>,
    ) -> Self {
        Self {
            form_service,
            job_service,
            health,
        }
    }
}
