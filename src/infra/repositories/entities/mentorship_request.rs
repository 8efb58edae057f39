//! Mentorship request entity.

use sea_orm::entity::prelude::*;

use crate::domain::{MentorshipRequest, RequestStatus};
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mentorship_requests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Mentee's user id
    pub mentee_id: Uuid,
    /// Mentor's user id
    pub mentor_id: Uuid,
    pub help_type: String,
    #[sea_orm(column_type = "Text")]
    pub context: String,
    pub key_questions: Vec<String>,
    pub status: String,
    pub created_at: DateTimeUtc,
    pub responded_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for MentorshipRequest {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let help_type = model.help_type.parse().map_err(|_| {
            AppError::internal(format!("Unknown help type in store: {}", model.help_type))
        })?;
        let status: RequestStatus = model.status.parse().map_err(|_| {
            AppError::internal(format!("Unknown request status in store: {}", model.status))
        })?;

        Ok(MentorshipRequest {
            id: model.id,
            mentee_id: model.mentee_id,
            mentor_id: model.mentor_id,
            help_type,
            context: model.context,
            key_questions: model.key_questions,
            status,
            created_at: model.created_at,
            responded_at: model.responded_at,
        })
    }
}
