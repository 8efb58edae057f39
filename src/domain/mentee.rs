//! Mentee profile.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{HelpType, Interest};

/// Mentee profile domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenteeProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Required before the discovery feed can be used
    #[schema(example = "Software")]
    pub industry: Option<String>,
    pub goals: Option<String>,
    pub help_needed: Vec<HelpType>,
    pub background: Option<String>,
    pub interests: Vec<Interest>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MenteeProfile {
    pub fn interest_ids(&self) -> HashSet<Uuid> {
        self.interests.iter().map(|i| i.id).collect()
    }

    /// The industry used to match mentors, if set to something non-blank.
    pub fn matching_industry(&self) -> Option<&str> {
        self.industry
            .as_deref()
            .map(str::trim)
            .filter(|industry| !industry.is_empty())
    }
}

/// Fields to create a mentee profile with
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewMenteeProfile {
    pub industry: Option<String>,
    pub goals: Option<String>,
    pub help_needed: Vec<HelpType>,
    pub background: Option<String>,
    pub interest_ids: Vec<Uuid>,
}

/// Partial update of a mentee profile; `None` leaves a field unchanged.
///
/// `interest_ids`, when present, replaces the whole interest set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenteeProfilePatch {
    pub industry: Option<String>,
    pub goals: Option<String>,
    pub help_needed: Option<Vec<HelpType>>,
    pub background: Option<String>,
    pub interest_ids: Option<Vec<Uuid>>,
}

impl MenteeProfilePatch {
    pub fn is_empty(&self) -> bool {
        !self.has_column_changes() && self.interest_ids.is_none()
    }

    pub fn has_column_changes(&self) -> bool {
        self.industry.is_some()
            || self.goals.is_some()
            || self.help_needed.is_some()
            || self.background.is_some()
    }

    pub fn apply(&self, mut profile: MenteeProfile, now: DateTime<Utc>) -> MenteeProfile {
        if !self.has_column_changes() {
            return profile;
        }
        if let Some(industry) = &self.industry {
            profile.industry = Some(industry.clone());
        }
        if let Some(goals) = &self.goals {
            profile.goals = Some(goals.clone());
        }
        if let Some(help_needed) = &self.help_needed {
            profile.help_needed = HelpType::normalize(help_needed.clone());
        }
        if let Some(background) = &self.background {
            profile.background = Some(background.clone());
        }
        profile.updated_at = now;
        profile
    }
}
