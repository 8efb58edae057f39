//! Base user profile, keyed by the auth provider's user id.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::AppError;

/// Which side(s) of the platform a user takes part in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Mentor,
    Mentee,
    Both,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Mentor => "mentor",
            UserRole::Mentee => "mentee",
            UserRole::Both => "both",
        }
    }
}

impl FromStr for UserRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mentor" => Ok(UserRole::Mentor),
            "mentee" => Ok(UserRole::Mentee),
            "both" => Ok(UserRole::Both),
            other => Err(AppError::validation(format!("Unknown role: {other}"))),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User profile domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    /// Same as the auth provider's user id
    pub id: Uuid,
    #[schema(example = "Ada Lovelace")]
    pub full_name: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields to create a user profile with
#[derive(Debug, Clone, PartialEq)]
pub struct NewUserProfile {
    pub full_name: Option<String>,
    pub role: UserRole,
}

/// Partial update of a user profile; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserProfilePatch {
    pub full_name: Option<String>,
    pub role: Option<UserRole>,
}

impl UserProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.role.is_none()
    }

    pub fn apply(&self, mut profile: UserProfile, now: DateTime<Utc>) -> UserProfile {
        if self.is_empty() {
            return profile;
        }
        if let Some(full_name) = &self.full_name {
            profile.full_name = Some(full_name.clone());
        }
        if let Some(role) = self.role {
            profile.role = role;
        }
        profile.updated_at = now;
        profile
    }
}
