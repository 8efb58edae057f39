//! Interest catalog entries.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A topic mentors and mentees can tag themselves with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Interest {
    pub id: Uuid,
    #[schema(example = "Machine Learning")]
    pub name: String,
    #[schema(example = "Technology")]
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Interests present in both lists, in the order of `left`.
pub fn shared_interests(left: &[Interest], right: &[Interest]) -> Vec<Interest> {
    let right_ids: HashSet<Uuid> = right.iter().map(|i| i.id).collect();
    left.iter()
        .filter(|i| right_ids.contains(&i.id))
        .cloned()
        .collect()
}
