//! Discovery engine: the mentee-facing feed of mentors in their industry.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use super::container::parallel;
use super::identity::excluded_mentor_ids;
use crate::domain::{shared_interests, HelpType, Interest, MentorProfile};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{MentorQuery, UnitOfWork};
use crate::types::Page;

/// Filters for the discovery feed
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscoveryFilter {
    pub help_type: Option<HelpType>,
    /// Drop mentors at or over capacity (applied after paging)
    pub available_only: bool,
}

/// One mentor in the feed, with weekly capacity
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MentorCard {
    pub mentor: MentorProfile,
    pub is_available: bool,
    pub pending_requests: u64,
    pub max_requests: i32,
}

impl MentorCard {
    pub fn new(mentor: MentorProfile, pending_requests: u64) -> Self {
        let availability = mentor.availability(pending_requests);
        Self {
            mentor,
            is_available: availability.is_available,
            pending_requests: availability.pending_requests,
            max_requests: availability.max_requests,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DiscoveryFeed {
    pub mentors: Vec<MentorCard>,
    /// Number of cards returned
    pub total: usize,
}

/// A single mentor as seen by a specific mentee
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MentorDetail {
    pub mentor: MentorProfile,
    pub is_available: bool,
    pub pending_requests: u64,
    pub max_requests: i32,
    pub shared_interests: Vec<Interest>,
    pub total_shared_interests: usize,
}

#[async_trait]
pub trait DiscoveryService: Send + Sync {
    async fn browse(
        &self,
        mentee_user_id: Uuid,
        filter: DiscoveryFilter,
        page: Page,
    ) -> AppResult<DiscoveryFeed>;

    async fn detail(&self, mentor_user_id: Uuid, mentee_user_id: Uuid) -> AppResult<MentorDetail>;
}

pub struct DiscoveryEngine<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> DiscoveryEngine<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> DiscoveryService for DiscoveryEngine<U> {
    async fn browse(
        &self,
        mentee_user_id: Uuid,
        filter: DiscoveryFilter,
        page: Page,
    ) -> AppResult<DiscoveryFeed> {
        let mentee = self
            .uow
            .mentees()
            .find_by_user_id(mentee_user_id)
            .await?
            .ok_or_not_found("Mentee profile not found")?;

        let industry = mentee
            .matching_industry()
            .ok_or_else(|| {
                AppError::invalid_state(
                    "Set an industry on your mentee profile to discover mentors",
                )
            })?
            .to_string();

        let exclude_user_ids = excluded_mentor_ids(&*self.uow, mentee_user_id).await?;
        let mentors = self
            .uow
            .mentors()
            .search(MentorQuery {
                industry: Some(industry),
                help_type: filter.help_type,
                exclude_user_ids,
                limit: page.limit,
                offset: page.offset,
            })
            .await?;

        let counts = self
            .uow
            .requests()
            .pending_counts(mentors.iter().map(|m| m.user_id).collect())
            .await?;

        let cards: Vec<MentorCard> = mentors
            .into_iter()
            .map(|mentor| {
                let pending = counts.get(&mentor.user_id).copied().unwrap_or(0);
                MentorCard::new(mentor, pending)
            })
            .filter(|card| !filter.available_only || card.is_available)
            .collect();

        tracing::debug!(
            mentee_id = %mentee_user_id,
            returned = cards.len(),
            "Discovery feed built"
        );

        Ok(DiscoveryFeed {
            total: cards.len(),
            mentors: cards,
        })
    }

    async fn detail(&self, mentor_user_id: Uuid, mentee_user_id: Uuid) -> AppResult<MentorDetail> {
        let mentors = self.uow.mentors();
        let mentees = self.uow.mentees();
        let (mentor, mentee) = parallel::join2(
            mentors.find_by_user_id(mentor_user_id),
            mentees.find_by_user_id(mentee_user_id),
        )
        .await?;

        let mentor = mentor
            .filter(|m| m.is_active)
            .ok_or_not_found("Mentor not found")?;
        let mentee = mentee.ok_or_not_found("Mentee profile not found")?;

        let pending = self
            .uow
            .requests()
            .pending_counts(vec![mentor.user_id])
            .await?
            .get(&mentor.user_id)
            .copied()
            .unwrap_or(0);

        let availability = mentor.availability(pending);
        let shared = shared_interests(&mentor.interests, &mentee.interests);

        Ok(MentorDetail {
            is_available: availability.is_available,
            pending_requests: availability.pending_requests,
            max_requests: availability.max_requests,
            total_shared_interests: shared.len(),
            shared_interests: shared,
            mentor,
        })
    }
}
