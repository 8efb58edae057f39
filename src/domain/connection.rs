use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Durable record of an accepted mentor/mentee relationship (user ids)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Connection {
    pub id: Uuid,
    pub mentor_id: Uuid,
    pub mentee_id: Uuid,
    /// The accepted request that created this connection
    pub request_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}
