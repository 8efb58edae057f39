//! Mentee profile entity. Interests live in `mentee_interests`.

use sea_orm::entity::prelude::*;

use crate::domain::{HelpType, Interest, MenteeProfile};
use crate::errors::AppResult;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mentee_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub industry: Option<String>,
    pub goals: Option<String>,
    pub help_needed: Vec<String>,
    pub background: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_domain(self, interests: Vec<Interest>) -> AppResult<MenteeProfile> {
        Ok(MenteeProfile {
            id: self.id,
            user_id: self.user_id,
            industry: self.industry,
            goals: self.goals,
            help_needed: HelpType::parse_stored(&self.help_needed)?,
            background: self.background,
            interests,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
