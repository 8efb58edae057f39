//! Recommendation scorer: eligible mentors re-ranked by shared interests.

use async_trait::async_trait;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use super::identity::excluded_mentor_ids;
use crate::config::RECOMMENDATION_CANDIDATE_FACTOR;
use crate::domain::{HelpType, MentorProfile};
use crate::errors::{AppError, AppResult};
use crate::infra::{MentorQuery, UnitOfWork};
use crate::types::Page;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecommendedMentor {
    pub mentor: MentorProfile,
    /// Number of interests shared with the requesting mentee
    pub score: usize,
}

/// Score candidates by interest overlap and keep the best `limit`.
///
/// Ties break toward the newer mentor profile.
pub fn rank_by_shared_interests(
    mentee_interests: &HashSet<Uuid>,
    candidates: Vec<MentorProfile>,
    limit: usize,
) -> Vec<RecommendedMentor> {
    let mut ranked: Vec<RecommendedMentor> = candidates
        .into_iter()
        .map(|mentor| {
            let score = mentor
                .interests
                .iter()
                .filter(|interest| mentee_interests.contains(&interest.id))
                .count();
            RecommendedMentor { mentor, score }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| b.mentor.created_at.cmp(&a.mentor.created_at))
    });
    ranked.truncate(limit);
    ranked
}

#[async_trait]
pub trait RecommendationService: Send + Sync {
    async fn recommend(
        &self,
        user_id: Uuid,
        help_type: Option<HelpType>,
        page: Page,
    ) -> AppResult<Vec<RecommendedMentor>>;
}

pub struct RecommendationScorer<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> RecommendationScorer<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> RecommendationService for RecommendationScorer<U> {
    async fn recommend(
        &self,
        user_id: Uuid,
        help_type: Option<HelpType>,
        page: Page,
    ) -> AppResult<Vec<RecommendedMentor>> {
        let mentee = self
            .uow
            .mentees()
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::forbidden("Only mentees can get mentor recommendations"))?;

        let exclude_user_ids = excluded_mentor_ids(&*self.uow, user_id).await?;
        let candidates = self
            .uow
            .mentors()
            .search(MentorQuery {
                industry: None,
                help_type,
                exclude_user_ids,
                limit: page.limit.saturating_mul(RECOMMENDATION_CANDIDATE_FACTOR),
                offset: page.offset,
            })
            .await?;

        let limit = usize::try_from(page.limit).unwrap_or(usize::MAX);
        Ok(rank_by_shared_interests(
            &mentee.interest_ids(),
            candidates,
            limit,
        ))
    }
}
