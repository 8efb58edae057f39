//! Connection repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use super::entities::connection::{self, ActiveModel, Entity as ConnectionEntity};
use super::write_error;
use crate::domain::Connection;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ConnectionRepository: Send + Sync {
    /// The connection between a mentor and a mentee (user ids), if any
    async fn find_between(&self, mentor_id: Uuid, mentee_id: Uuid)
        -> AppResult<Option<Connection>>;

    /// Insert a connection; Conflict if the pair is already connected
    async fn create(
        &self,
        mentor_id: Uuid,
        mentee_id: Uuid,
        request_id: Option<Uuid>,
    ) -> AppResult<Connection>;

    /// User ids of every mentor connected to this mentee
    async fn mentor_ids_for_mentee(&self, mentee_id: Uuid) -> AppResult<Vec<Uuid>>;
}

pub struct ConnectionStore {
    db: DatabaseConnection,
}

impl ConnectionStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ConnectionRepository for ConnectionStore {
    async fn find_between(
        &self,
        mentor_id: Uuid,
        mentee_id: Uuid,
    ) -> AppResult<Option<Connection>> {
        let model = ConnectionEntity::find()
            .filter(connection::Column::MentorId.eq(mentor_id))
            .filter(connection::Column::MenteeId.eq(mentee_id))
            .one(&self.db)
            .await?;
        Ok(model.map(Connection::from))
    }

    async fn create(
        &self,
        mentor_id: Uuid,
        mentee_id: Uuid,
        request_id: Option<Uuid>,
    ) -> AppResult<Connection> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            mentor_id: Set(mentor_id),
            mentee_id: Set(mentee_id),
            request_id: Set(request_id),
            created_at: Set(chrono::Utc::now()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| write_error(e, "Connection already exists"))?;

        Ok(Connection::from(model))
    }

    async fn mentor_ids_for_mentee(&self, mentee_id: Uuid) -> AppResult<Vec<Uuid>> {
        let ids = ConnectionEntity::find()
            .select_only()
            .column(connection::Column::MentorId)
            .filter(connection::Column::MenteeId.eq(mentee_id))
            .order_by_asc(connection::Column::CreatedAt)
            .into_tuple::<Uuid>()
            .all(&self.db)
            .await?;
        Ok(ids)
    }
}
