//! Mentor profile entity. Interests live in `mentor_interests`.

use sea_orm::entity::prelude::*;

use crate::domain::{HelpType, Interest, MentorProfile};
use crate::errors::AppResult;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mentor_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub industry: Option<String>,
    pub job_title: Option<String>,
    pub help_types_offered: Vec<String>,
    pub max_requests_per_week: i32,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Build the domain entity from the row and its resolved interests.
    pub fn into_domain(self, interests: Vec<Interest>) -> AppResult<MentorProfile> {
        Ok(MentorProfile {
            id: self.id,
            user_id: self.user_id,
            industry: self.industry,
            job_title: self.job_title,
            help_types_offered: HelpType::parse_stored(&self.help_types_offered)?,
            max_requests_per_week: self.max_requests_per_week,
            interests,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
