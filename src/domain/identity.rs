//! What part of the platform a caller takes part in.

use uuid::Uuid;

use super::{MenteeProfile, MentorProfile, RequestScope};

/// The caller's role, derived from which profiles exist for their user id.
#[derive(Debug, Clone, PartialEq)]
pub enum Identity {
    Mentor(MentorProfile),
    Mentee(MenteeProfile),
    Both {
        mentor: MentorProfile,
        mentee: MenteeProfile,
    },
    Unregistered,
}

impl Identity {
    pub fn from_profiles(mentor: Option<MentorProfile>, mentee: Option<MenteeProfile>) -> Self {
        match (mentor, mentee) {
            (Some(mentor), Some(mentee)) => Identity::Both { mentor, mentee },
            (Some(mentor), None) => Identity::Mentor(mentor),
            (None, Some(mentee)) => Identity::Mentee(mentee),
            (None, None) => Identity::Unregistered,
        }
    }

    pub fn mentee(&self) -> Option<&MenteeProfile> {
        match self {
            Identity::Mentee(mentee) | Identity::Both { mentee, .. } => Some(mentee),
            _ => None,
        }
    }

    /// Requests this caller may list, or `None` when unregistered.
    pub fn request_scope(&self, user_id: Uuid) -> Option<RequestScope> {
        match self {
            Identity::Mentor(_) => Some(RequestScope::AsMentor(user_id)),
            Identity::Mentee(_) => Some(RequestScope::AsMentee(user_id)),
            Identity::Both { .. } => Some(RequestScope::Either(user_id)),
            Identity::Unregistered => None,
        }
    }
}
