//! Mentee profile service.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use super::interest_service::ensure_interests_exist;
use crate::domain::{HelpType, MenteeProfile, MenteeProfilePatch, NewMenteeProfile};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{MenteeProfileUpdate, MenteeQuery, UnitOfWork};
use crate::types::Page;

#[async_trait]
pub trait MenteeService: Send + Sync {
    /// Mentee profile owned by `user_id`
    async fn get(&self, user_id: Uuid) -> AppResult<MenteeProfile>;

    async fn create(&self, user_id: Uuid, profile: NewMenteeProfile) -> AppResult<MenteeProfile>;

    async fn update(&self, user_id: Uuid, patch: MenteeProfilePatch) -> AppResult<MenteeProfile>;

    /// All mentees, optionally only those needing `help_needed`, newest first
    async fn browse(&self, help_needed: Option<HelpType>, page: Page)
        -> AppResult<Vec<MenteeProfile>>;
}

pub struct MenteeManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> MenteeManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> MenteeService for MenteeManager<U> {
    async fn get(&self, user_id: Uuid) -> AppResult<MenteeProfile> {
        self.uow
            .mentees()
            .find_by_user_id(user_id)
            .await?
            .ok_or_not_found("Mentee profile not found")
    }

    async fn create(&self, user_id: Uuid, profile: NewMenteeProfile) -> AppResult<MenteeProfile> {
        let mentees = self.uow.mentees();
        if mentees.find_by_user_id(user_id).await?.is_some() {
            return Err(AppError::conflict("Mentee profile already exists for this user"));
        }
        ensure_interests_exist(&*self.uow, &profile.interest_ids).await?;

        mentees.create(user_id, profile).await
    }

    async fn update(&self, user_id: Uuid, patch: MenteeProfilePatch) -> AppResult<MenteeProfile> {
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
            .mentees()
            .update(MenteeProfileUpdate {
                profile_id,
                row,
                interest_ids: patch.interest_ids,
            })
            .await?;

        tracing::debug!(user_id = %user_id, "Mentee profile updated");
        self.get(user_id).await
    }

    async fn browse(
        &self,
        help_needed: Option<HelpType>,
        page: Page,
    ) -> AppResult<Vec<MenteeProfile>> {
        self.uow
            .mentees()
            .list(MenteeQuery {
                help_needed,
                limit: page.limit,
                offset: page.offset,
            })
            .await
    }
}
