//! Service Container - Centralized service access.

use std::sync::Arc;

use super::{FormDesk, FormService, JobCatalog, JobService};
use crate::config::Config;
use crate::domain::FormPolicy;
use crate::infra::JobStore;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get form submission service
    fn forms(&self) -> Arc<dyn FormService>;

    /// Get job catalog service
    fn jobs(&self) -> Arc<dyn JobService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    form_service: Arc<dyn FormService>,
    job_service: Arc<dyn JobService>,
}

impl Services {
    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: &Config) -> Self {
        let policy = FormPolicy {
            strict_email: config.strict_email,
        };
        let form_service = Arc::new(FormDesk::new(policy));
        let job_service = Arc::new(JobCatalog::new(Arc::new(JobStore::new(db))));

        Self {
            form_service,
            job_service,
        }
    }
}

impl ServiceContainer for Services {
    fn forms(&self) -> Arc<dyn FormService> {
        self.form_service.clone()
    }

    fn jobs(&self) -> Arc<dyn JobService> {
        self.job_service.clone()
    }
}
