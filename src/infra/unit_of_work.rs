//! Unit of Work: the single injected handle services use to reach storage.
//!
//! Centralizes access to all repositories so services depend on one trait
//! and tests can swap the whole persistence layer at once.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use super::db;
use super::repositories::{
    ConnectionRepository, ConnectionStore, InterestRepository, InterestStore, MenteeRepository,
    MenteeStore, MentorRepository, MentorStore, RequestRepository, RequestStore,
    UserProfileRepository, UserProfileStore,
};
use crate::errors::AppResult;

/// Unit of Work trait for dependency injection.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    fn users(&self) -> Arc<dyn UserProfileRepository>;

    fn interests(&self) -> Arc<dyn InterestRepository>;

    fn mentors(&self) -> Arc<dyn MentorRepository>;

    fn mentees(&self) -> Arc<dyn MenteeRepository>;

    fn requests(&self) -> Arc<dyn RequestRepository>;

    fn connections(&self) -> Arc<dyn ConnectionRepository>;

    /// Verify the backing store is reachable
    async fn ping(&self) -> AppResult<()>;
}

/// SeaORM-backed implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    users: Arc<UserProfileStore>,
    interests: Arc<InterestStore>,
    mentors: Arc<MentorStore>,
    mentees: Arc<MenteeStore>,
    requests: Arc<RequestStore>,
    connections: Arc<ConnectionStore>,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: Arc::new(UserProfileStore::new(db.clone())),
            interests: Arc::new(InterestStore::new(db.clone())),
            mentors: Arc::new(MentorStore::new(db.clone())),
            mentees: Arc::new(MenteeStore::new(db.clone())),
            requests: Arc::new(RequestStore::new(db.clone())),
            connections: Arc::new(ConnectionStore::new(db.clone())),
            db,
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserProfileRepository> {
        self.users.clone()
    }

    fn interests(&self) -> Arc<dyn InterestRepository> {
        self.interests.clone()
    }

    fn mentors(&self) -> Arc<dyn MentorRepository> {
        self.mentors.clone()
    }

    fn mentees(&self) -> Arc<dyn MenteeRepository> {
        self.mentees.clone()
    }

    fn requests(&self) -> Arc<dyn RequestRepository> {
        self.requests.clone()
    }

    fn connections(&self) -> Arc<dyn ConnectionRepository> {
        self.connections.clone()
    }

    async fn ping(&self) -> AppResult<()> {
        db::ping(&self.db).await?;
        Ok(())
    }
}
