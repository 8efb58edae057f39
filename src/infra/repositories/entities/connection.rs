use sea_orm::entity::prelude::*;

use crate::domain::Connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "connections")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub mentor_id: Uuid,
    pub mentee_id: Uuid,
    pub request_id: Option<Uuid>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Connection {
    fn from(model: Model) -> Self {
        Connection {
            id: model.id,
            mentor_id: model.mentor_id,
            mentee_id: model.mentee_id,
            request_id: model.request_id,
            created_at: model.created_at,
        }
    }
}
