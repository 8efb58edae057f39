//! Service Container - Centralized service access with parallel execution support.

use std::future::Future;
use std::sync::Arc;

use super::{
    DiscoveryEngine, DiscoveryService, InterestCatalog, InterestService, MenteeManager,
    MenteeService, MentorManager, MentorService, PlaceholderAssistant, RecommendationScorer,
    RecommendationService, RequestAssistant, RequestService, RequestWorkflow, UserProfileManager,
    UserProfileService,
};
use crate::errors::AppResult;
use crate::infra::{Persistence, UnitOfWork};

/// All application services, wired to one shared unit of work.
pub struct Services {
    store: Arc<dyn UnitOfWork>,
    interests: Arc<dyn InterestService>,
    users: Arc<dyn UserProfileService>,
    mentors: Arc<dyn MentorService>,
    mentees: Arc<dyn MenteeService>,
    discovery: Arc<dyn DiscoveryService>,
    recommendations: Arc<dyn RecommendationService>,
    requests: Arc<dyn RequestService>,
    assistant: Arc<dyn RequestAssistant>,
}

impl Services {
    /// Build every service over the given unit of work.
    pub fn new<U: UnitOfWork + 'static>(uow: Arc<U>) -> Self {
        Self {
            interests: Arc::new(InterestCatalog::new(uow.clone())),
            users: Arc::new(UserProfileManager::new(uow.clone())),
            mentors: Arc::new(MentorManager::new(uow.clone())),
            mentees: Arc::new(MenteeManager::new(uow.clone())),
            discovery: Arc::new(DiscoveryEngine::new(uow.clone())),
            recommendations: Arc::new(RecommendationScorer::new(uow.clone())),
            requests: Arc::new(RequestWorkflow::new(uow.clone())),
            assistant: Arc::new(PlaceholderAssistant),
            store: uow,
        }
    }

    /// Create service container from a database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        Self::new(Arc::new(Persistence::new(db)))
    }

    /// Swap the request-text assistant implementation.
    pub fn with_assistant(mut self, assistant: Arc<dyn RequestAssistant>) -> Self {
        self.assistant = assistant;
        self
    }

    pub fn interests(&self) -> Arc<dyn InterestService> {
        self.interests.clone()
    }

    pub fn users(&self) -> Arc<dyn UserProfileService> {
        self.users.clone()
    }

    pub fn mentors(&self) -> Arc<dyn MentorService> {
        self.mentors.clone()
    }

    pub fn mentees(&self) -> Arc<dyn MenteeService> {
        self.mentees.clone()
    }

    pub fn discovery(&self) -> Arc<dyn DiscoveryService> {
        self.discovery.clone()
    }

    pub fn recommendations(&self) -> Arc<dyn RecommendationService> {
        self.recommendations.clone()
    }

    pub fn requests(&self) -> Arc<dyn RequestService> {
        self.requests.clone()
    }

    pub fn assistant(&self) -> Arc<dyn RequestAssistant> {
        self.assistant.clone()
    }

    /// Check that the backing store is reachable
    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }
}

/// Parallel execution utilities for running independent operations concurrently.
pub mod parallel {
    use super::*;
    use tokio::try_join;

    /// Execute two independent async operations in parallel.
    ///
    /// If either operation fails, the error is returned immediately.
    ///
    /// # Example
    /// ```ignore
    /// let (mentor, mentee) = parallel::join2(
    ///     mentors.find_by_user_id(id),
    ///     mentees.find_by_user_id(id),
    /// ).await?;
    /// ```
    pub async fn join2<F1, F2, T1, T2>(f1: F1, f2: F2) -> AppResult<(T1, T2)>
    where
        F1: Future<Output = AppResult<T1>>,
        F2: Future<Output = AppResult<T2>>,
    {
        try_join!(f1, f2)
    }
}
