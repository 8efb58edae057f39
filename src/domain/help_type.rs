//! Closed vocabularies shared by profiles and requests.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::AppError;

/// Kind of help a mentor offers or a mentee is looking for
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum HelpType {
    ResumeReview,
    MockInterview,
    CareerAdvice,
    SocialAdvice,
}

impl HelpType {
    pub const ALL: [HelpType; 4] = [
        HelpType::ResumeReview,
        HelpType::MockInterview,
        HelpType::CareerAdvice,
        HelpType::SocialAdvice,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HelpType::ResumeReview => "resume_review",
            HelpType::MockInterview => "mock_interview",
            HelpType::CareerAdvice => "career_advice",
            HelpType::SocialAdvice => "social_advice",
        }
    }

    /// Sort and deduplicate, turning a list into the set semantics profiles use.
    pub fn normalize(mut types: Vec<HelpType>) -> Vec<HelpType> {
        types.sort();
        types.dedup();
        types
    }

    /// Parse stored values; an unknown value means the row is corrupt.
    pub fn parse_stored(values: &[String]) -> Result<Vec<HelpType>, AppError> {
        values
            .iter()
            .map(|v| {
                v.parse()
                    .map_err(|_| AppError::internal(format!("Unknown help type in store: {v}")))
            })
            .collect()
    }

    pub fn to_stored(types: &[HelpType]) -> Vec<String> {
        types.iter().map(|t| t.as_str().to_string()).collect()
    }
}

impl FromStr for HelpType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HelpType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| AppError::validation(format!("Unknown help type: {s}")))
    }
}

impl fmt::Display for HelpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle of a mentorship request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Declined,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Accepted => "accepted",
            RequestStatus::Declined => "declined",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, RequestStatus::Pending)
    }

    /// Only `pending` moves, and only to a terminal state.
    pub fn can_transition_to(&self, next: RequestStatus) -> bool {
        self.is_pending() && !next.is_pending()
    }
}

impl FromStr for RequestStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(RequestStatus::Pending),
            "accepted" => Ok(RequestStatus::Accepted),
            "declined" => Ok(RequestStatus::Declined),
            other => Err(AppError::validation(format!("Unknown request status: {other}"))),
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
