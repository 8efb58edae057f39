//! Mentor profile and availability.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{HelpType, Interest};
use crate::errors::{AppError, AppResult};

/// Mentor profile domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MentorProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    #[schema(example = "Software")]
    pub industry: Option<String>,
    #[schema(example = "Staff Engineer")]
    pub job_title: Option<String>,
    pub help_types_offered: Vec<HelpType>,
    #[schema(example = 3)]
    pub max_requests_per_week: i32,
    pub interests: Vec<Interest>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MentorProfile {
    pub fn interest_ids(&self) -> HashSet<Uuid> {
        self.interests.iter().map(|i| i.id).collect()
    }

    /// Availability given the mentor's current number of pending requests.
    pub fn availability(&self, pending_requests: u64) -> Availability {
        Availability::new(pending_requests, self.max_requests_per_week)
    }
}

/// Whether a mentor can take another request this week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct Availability {
    pub is_available: bool,
    pub pending_requests: u64,
    pub max_requests: i32,
}

impl Availability {
    pub fn new(pending_requests: u64, max_requests: i32) -> Self {
        let capacity = u64::try_from(max_requests).unwrap_or(0);
        Self {
            is_available: pending_requests < capacity,
            pending_requests,
            max_requests,
        }
    }
}

/// Fields to create a mentor profile with
#[derive(Debug, Clone, PartialEq)]
pub struct NewMentorProfile {
    pub industry: Option<String>,
    pub job_title: Option<String>,
    pub help_types_offered: Vec<HelpType>,
    pub max_requests_per_week: i32,
    pub interest_ids: Vec<Uuid>,
}

impl NewMentorProfile {
    pub fn validate(&self) -> AppResult<()> {
        if self.help_types_offered.is_empty() {
            return Err(AppError::validation("At least one help type must be offered"));
        }
        validate_capacity(self.max_requests_per_week)
    }
}

/// Partial update of a mentor profile; `None` leaves a field unchanged.
///
/// `interest_ids`, when present, replaces the whole interest set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MentorProfilePatch {
    pub industry: Option<String>,
    pub job_title: Option<String>,
    pub help_types_offered: Option<Vec<HelpType>>,
    pub max_requests_per_week: Option<i32>,
    pub is_active: Option<bool>,
    pub interest_ids: Option<Vec<Uuid>>,
}

impl MentorProfilePatch {
    pub fn is_empty(&self) -> bool {
        !self.has_column_changes() && self.interest_ids.is_none()
    }

    /// True when any field stored on the profile row itself is present.
    pub fn has_column_changes(&self) -> bool {
        self.industry.is_some()
            || self.job_title.is_some()
            || self.help_types_offered.is_some()
            || self.max_requests_per_week.is_some()
            || self.is_active.is_some()
    }

    pub fn validate(&self) -> AppResult<()> {
        if matches!(&self.help_types_offered, Some(types) if types.is_empty()) {
            return Err(AppError::validation("At least one help type must be offered"));
        }
        match self.max_requests_per_week {
            Some(max) => validate_capacity(max),
            None => Ok(()),
        }
    }

    /// Merge row-level fields; the interest set is handled by the caller.
    pub fn apply(&self, mut profile: MentorProfile, now: DateTime<Utc>) -> MentorProfile {
        if !self.has_column_changes() {
            return profile;
        }
        if let Some(industry) = &self.industry {
            profile.industry = Some(industry.clone());
        }
        if let Some(job_title) = &self.job_title {
            profile.job_title = Some(job_title.clone());
        }
        if let Some(types) = &self.help_types_offered {
            profile.help_types_offered = HelpType::normalize(types.clone());
        }
        if let Some(max) = self.max_requests_per_week {
            profile.max_requests_per_week = max;
        }
        if let Some(active) = self.is_active {
            profile.is_active = active;
        }
        profile.updated_at = now;
        profile
    }
}

fn validate_capacity(max_requests_per_week: i32) -> AppResult<()> {
    if max_requests_per_week < 1 {
        return Err(AppError::validation("max_requests_per_week must be at least 1"));
    }
    Ok(())
}
