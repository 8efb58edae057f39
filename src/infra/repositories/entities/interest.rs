//! Interest catalog entity.

use sea_orm::entity::prelude::*;

use crate::domain::Interest;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "interests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub category: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Interest {
    fn from(model: Model) -> Self {
        Interest {
            id: model.id,
            name: model.name,
            category: model.category,
            created_at: model.created_at,
        }
    }
}
