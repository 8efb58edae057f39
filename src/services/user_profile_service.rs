//! User profile service - base profile CRUD for the authenticated user.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{NewUserProfile, UserProfile, UserProfilePatch};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// User profile service trait for dependency injection.
#[async_trait]
pub trait UserProfileService: Send + Sync {
    async fn get(&self, user_id: Uuid) -> AppResult<UserProfile>;

    /// Create the caller's base profile; Conflict if it already exists
    async fn create(&self, user_id: Uuid, profile: NewUserProfile) -> AppResult<UserProfile>;

    /// Apply a partial update; an empty patch returns the profile unchanged
    async fn update(&self, user_id: Uuid, patch: UserProfilePatch) -> AppResult<UserProfile>;
}

pub struct UserProfileManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserProfileManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserProfileService for UserProfileManager<U> {
    async fn get(&self, user_id: Uuid) -> AppResult<UserProfile> {
        self.uow
            .users()
            .find_by_id(user_id)
            .await?
            .ok_or_not_found("User profile not found")
    }

    async fn create(&self, user_id: Uuid, profile: NewUserProfile) -> AppResult<UserProfile> {
        let users = self.uow.users();
        if users.find_by_id(user_id).await?.is_some() {
            return Err(AppError::conflict("User profile already exists"));
        }

        let created = users.create(user_id, profile).await?;
        tracing::info!(user_id = %user_id, role = %created.role, "User profile created");
        Ok(created)
    }

    async fn update(&self, user_id: Uuid, patch: UserProfilePatch) -> AppResult<UserProfile> {
        let current = self.get(user_id).await?;
        if patch.is_empty() {
            return Ok(current);
        }

        let merged = patch.apply(current, Utc::now());
        self.uow.users().update(merged).await
    }
}
