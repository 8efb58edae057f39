use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mentor_interests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub mentor_profile_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub interest_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
