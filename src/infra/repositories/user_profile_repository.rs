//! User profile repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, DatabaseConnection, DbErr, EntityTrait, Set,
};
use uuid::Uuid;

use super::entities::user_profile::{ActiveModel, Entity as UserProfileEntity};
use super::write_error;
use crate::domain::{NewUserProfile, UserProfile};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User profile repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserProfileRepository: Send + Sync {
    /// Find a profile by the auth provider's user id
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<UserProfile>>;

    /// Create the profile for `id`; Conflict if one already exists
    async fn create(&self, id: Uuid, profile: NewUserProfile) -> AppResult<UserProfile>;

    /// Persist a merged profile; NotFound if the row is gone
    async fn update(&self, profile: UserProfile) -> AppResult<UserProfile>;
}

/// SeaORM implementation of UserProfileRepository
pub struct UserProfileStore {
    db: DatabaseConnection,
}

impl UserProfileStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserProfileRepository for UserProfileStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<UserProfile>> {
        UserProfileEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(UserProfile::try_from)
            .transpose()
    }

    async fn create(&self, id: Uuid, profile: NewUserProfile) -> AppResult<UserProfile> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(id),
            full_name: Set(profile.full_name),
            role: Set(profile.role.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, "User profile already exists"))?;
        UserProfile::try_from(model)
    }

    async fn update(&self, profile: UserProfile) -> AppResult<UserProfile> {
        let active = ActiveModel {
            id: Unchanged(profile.id),
            full_name: Set(profile.full_name),
            role: Set(profile.role.as_str().to_string()),
            created_at: Unchanged(profile.created_at),
            updated_at: Set(profile.updated_at),
        };

        let model = active.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => AppError::not_found("User profile not found"),
            other => AppError::from(other),
        })?;
        UserProfile::try_from(model)
    }
}
