//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{Services, SupabaseJwtVerifier, TokenVerifier};

/// Shared handler state: the service container plus the token verifier.
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<Services>,
    pub verifier: Arc<dyn TokenVerifier>,
}

impl AppState {
    /// Wire production services over the database and verify tokens with the configured secret.
    pub fn from_config(database: &Database, config: &Config) -> Self {
        Self::new(
            Services::from_connection(database.get_connection()),
            Arc::new(SupabaseJwtVerifier::from_config(config)),
        )
    }

    /// Create state from manually built services (tests, alternative stores).
    pub fn new(services: Services, verifier: Arc<dyn TokenVerifier>) -> Self {
        Self {
            services: Arc::new(services),
            verifier,
        }
    }
}
