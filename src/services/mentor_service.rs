//! Mentor profile service: own-profile CRUD, public lookup and browsing.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use super::identity::excluded_mentor_ids;
use super::interest_service::ensure_interests_exist;
use crate::domain::{HelpType, MentorProfile, MentorProfilePatch, NewMentorProfile};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{MentorProfileUpdate, MentorQuery, UnitOfWork};
use crate::types::Page;

/// Filters for the mentor browse listing
#[derive(Debug, Clone, Default)]
pub struct MentorFilter {
    pub help_type: Option<HelpType>,
    /// Case-insensitive exact match
    pub industry: Option<String>,
}

#[async_trait]
pub trait MentorService: Send + Sync {
    /// Mentor profile owned by `user_id`
    async fn get(&self, user_id: Uuid) -> AppResult<MentorProfile>;

    async fn create(&self, user_id: Uuid, profile: NewMentorProfile) -> AppResult<MentorProfile>;

    async fn update(&self, user_id: Uuid, patch: MentorProfilePatch) -> AppResult<MentorProfile>;

    /// Active mentors the caller has not already contacted, newest first
    async fn browse(
        &self,
        caller_id: Uuid,
        filter: MentorFilter,
        page: Page,
    ) -> AppResult<Vec<MentorProfile>>;
}

pub struct MentorManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> MentorManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> MentorService for MentorManager<U> {
    async fn get(&self, user_id: Uuid) -> AppResult<MentorProfile> {
        self.uow
            .mentors()
            .find_by_user_id(user_id)
            .await?
            .ok_or_not_found("Mentor profile not found")
    }

    async fn create(&self, user_id: Uuid, profile: NewMentorProfile) -> AppResult<MentorProfile> {
        profile.validate()?;

        let mentors = self.uow.mentors();
        if mentors.find_by_user_id(user_id).await?.is_some() {
            return Err(AppError::conflict("Mentor profile already exists for this user"));
        }
        ensure_interests_exist(&*self.uow, &profile.interest_ids).await?;

        mentors.create(user_id, profile).await
    }

    async fn update(&self, user_id: Uuid, patch: MentorProfilePatch) -> AppResult<MentorProfile> {
        patch.validate()?;
        let current = self.get(user_id).await?;
        if patch.is_empty() {
            return Ok(current);
        }

        if let Some(interest_ids) = &patch.interest_ids {
            ensure_interests_exist(&*self.uow, interest_ids).await?;
        }

        let profile_id = current.id;
        let row = patch
            .has_column_changes()
            .then(|| patch.apply(current, Utc::now()));

        self.uow
            .mentors()
            .update(MentorProfileUpdate {
                profile_id,
                row,
                interest_ids: patch.interest_ids,
            })
            .await?;

        tracing::debug!(user_id = %user_id, "Mentor profile updated");
        self.get(user_id).await
    }

    async fn browse(
        &self,
        caller_id: Uuid,
        filter: MentorFilter,
        page: Page,
    ) -> AppResult<Vec<MentorProfile>> {
        let exclude_user_ids = excluded_mentor_ids(&*self.uow, caller_id).await?;
        let industry = filter
            .industry
            .map(|i| i.trim().to_string())
            .filter(|i| !i.is_empty());

        self.uow
            .mentors()
            .search(MentorQuery {
                industry,
                help_type: filter.help_type,
                exclude_user_ids,
                limit: page.limit,
                offset: page.offset,
            })
            .await
    }
}
