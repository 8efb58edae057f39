//! User profile database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{UserProfile, UserRole};
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_profiles")]
pub struct Model {
    /// Auth provider user id
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub full_name: Option<String>,
    pub role: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl TryFrom<Model> for UserProfile {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let role: UserRole = model
            .role
            .parse()
            .map_err(|_| AppError::internal(format!("Unknown role in store: {}", model.role)))?;

        Ok(UserProfile {
            id: model.id,
            full_name: model.full_name,
            role,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
