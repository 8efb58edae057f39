//! Mentorship requests and the pending -> accepted | declined workflow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{HelpType, RequestStatus};
use crate::errors::{AppError, AppResult};

/// Mentorship request domain entity.
///
/// `mentee_id` and `mentor_id` are user ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MentorshipRequest {
    pub id: Uuid,
    pub mentee_id: Uuid,
    pub mentor_id: Uuid,
    pub help_type: HelpType,
    #[schema(example = "I am switching from QA into backend development.")]
    pub context: String,
    pub key_questions: Vec<String>,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
    /// Set exactly when the request left `pending`
    pub responded_at: Option<DateTime<Utc>>,
}

impl MentorshipRequest {
    /// True when `user_id` is the mentee or the mentor of this request.
    pub fn involves(&self, user_id: Uuid) -> bool {
        self.mentee_id == user_id || self.mentor_id == user_id
    }

    /// Check that `user_id` may accept or decline this request right now.
    pub fn ensure_respondable_by(&self, user_id: Uuid) -> AppResult<()> {
        if self.mentor_id != user_id {
            return Err(AppError::forbidden(
                "Only the requested mentor can respond to this request",
            ));
        }
        if !self.status.is_pending() {
            return Err(AppError::conflict(format!(
                "Request has already been {}",
                self.status
            )));
        }
        Ok(())
    }
}

/// Fields of a request about to be stored as `pending`
#[derive(Debug, Clone, PartialEq)]
pub struct NewMentorshipRequest {
    pub mentee_id: Uuid,
    pub mentor_id: Uuid,
    pub help_type: HelpType,
    pub context: String,
    pub key_questions: Vec<String>,
}

/// A mentor's answer to a pending request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestDecision {
    Accept,
    Decline,
}

impl RequestDecision {
    pub fn status(&self) -> RequestStatus {
        match self {
            RequestDecision::Accept => RequestStatus::Accepted,
            RequestDecision::Decline => RequestStatus::Declined,
        }
    }
}

/// Which side(s) of the requests table a listing covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestScope {
    /// Requests addressed to this mentor
    AsMentor(Uuid),
    /// Requests sent by this mentee
    AsMentee(Uuid),
    /// Requests where the user is either party
    Either(Uuid),
}
