//! Mentorship request repository.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Select, Set, UpdateMany,
};
use uuid::Uuid;

use super::entities::mentorship_request::{self, ActiveModel, Entity as RequestEntity};
use super::write_error;
use crate::domain::{MentorshipRequest, NewMentorshipRequest, RequestScope, RequestStatus};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RequestRepository: Send + Sync {
    /// Store a new `pending` request; Conflict if the pair already has one pending
    async fn create(&self, request: NewMentorshipRequest) -> AppResult<MentorshipRequest>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<MentorshipRequest>>;

    /// The pending request from this mentee to this mentor (user ids), if any
    async fn find_pending(
        &self,
        mentee_id: Uuid,
        mentor_id: Uuid,
    ) -> AppResult<Option<MentorshipRequest>>;

    /// Requests visible in the given scope, newest first
    async fn list(&self, scope: RequestScope) -> AppResult<Vec<MentorshipRequest>>;

    /// Number of pending requests per mentor user id; mentors with none are absent
    async fn pending_counts(&self, mentor_ids: Vec<Uuid>) -> AppResult<HashMap<Uuid, u64>>;

    /// Mentor user ids this mentee has a pending or accepted request with
    async fn contacted_mentor_ids(&self, mentee_id: Uuid) -> AppResult<Vec<Uuid>>;

    /// Move a request out of `pending`, only if it is still pending.
    ///
    /// Returns `None` when no pending row matched, i.e. a concurrent
    /// transition won or the id is unknown.
    async fn transition(
        &self,
        id: Uuid,
        status: RequestStatus,
        responded_at: DateTime<Utc>,
    ) -> AppResult<Option<MentorshipRequest>>;
}

pub struct RequestStore {
    db: DatabaseConnection,
}

impl RequestStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn scope_condition(scope: RequestScope) -> Condition {
    match scope {
        RequestScope::AsMentor(id) => {
            Condition::all().add(mentorship_request::Column::MentorId.eq(id))
        }
        RequestScope::AsMentee(id) => {
            Condition::all().add(mentorship_request::Column::MenteeId.eq(id))
        }
        RequestScope::Either(id) => Condition::any()
            .add(mentorship_request::Column::MentorId.eq(id))
            .add(mentorship_request::Column::MenteeId.eq(id)),
    }
}

fn list_select(scope: RequestScope) -> Select<RequestEntity> {
    RequestEntity::find()
        .filter(scope_condition(scope))
        .order_by_desc(mentorship_request::Column::CreatedAt)
}

fn pending_counts_select(mentor_ids: Vec<Uuid>) -> Select<RequestEntity> {
    RequestEntity::find()
        .select_only()
        .column(mentorship_request::Column::MentorId)
        .column_as(mentorship_request::Column::Id.count(), "pending")
        .filter(mentorship_request::Column::Status.eq(RequestStatus::Pending.as_str()))
        .filter(mentorship_request::Column::MentorId.is_in(mentor_ids))
        .group_by(mentorship_request::Column::MentorId)
}

fn contacted_select(mentee_id: Uuid) -> Select<RequestEntity> {
    RequestEntity::find()
        .select_only()
        .column(mentorship_request::Column::MentorId)
        .distinct()
        .filter(mentorship_request::Column::MenteeId.eq(mentee_id))
        .filter(mentorship_request::Column::Status.is_in([
            RequestStatus::Pending.as_str(),
            RequestStatus::Accepted.as_str(),
        ]))
}

/// Conditional UPDATE: only a row still `pending` is moved.
fn transition_update(
    id: Uuid,
    status: RequestStatus,
    responded_at: DateTime<Utc>,
) -> UpdateMany<RequestEntity> {
    RequestEntity::update_many()
        .col_expr(mentorship_request::Column::Status, Expr::value(status.as_str()))
        .col_expr(mentorship_request::Column::RespondedAt, Expr::value(responded_at))
        .filter(mentorship_request::Column::Id.eq(id))
        .filter(mentorship_request::Column::Status.eq(RequestStatus::Pending.as_str()))
}

#[async_trait]
impl RequestRepository for RequestStore {
    async fn create(&self, request: NewMentorshipRequest) -> AppResult<MentorshipRequest> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            mentee_id: Set(request.mentee_id),
            mentor_id: Set(request.mentor_id),
            help_type: Set(request.help_type.as_str().to_string()),
            context: Set(request.context),
            key_questions: Set(request.key_questions),
            status: Set(RequestStatus::Pending.as_str().to_string()),
            created_at: Set(Utc::now()),
            responded_at: Set(None),
        }
        .insert(&self.db)
        .await
        .map_err(|e| write_error(e, "You already have a pending request with this mentor"))?;

        MentorshipRequest::try_from(model)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<MentorshipRequest>> {
        RequestEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(MentorshipRequest::try_from)
            .transpose()
    }

    async fn find_pending(
        &self,
        mentee_id: Uuid,
        mentor_id: Uuid,
    ) -> AppResult<Option<MentorshipRequest>> {
        RequestEntity::find()
            .filter(mentorship_request::Column::MenteeId.eq(mentee_id))
            .filter(mentorship_request::Column::MentorId.eq(mentor_id))
            .filter(mentorship_request::Column::Status.eq(RequestStatus::Pending.as_str()))
            .one(&self.db)
            .await?
            .map(MentorshipRequest::try_from)
            .transpose()
    }

    async fn list(&self, scope: RequestScope) -> AppResult<Vec<MentorshipRequest>> {
        list_select(scope)
            .all(&self.db)
            .await?
            .into_iter()
            .map(MentorshipRequest::try_from)
            .collect()
    }

    async fn pending_counts(&self, mentor_ids: Vec<Uuid>) -> AppResult<HashMap<Uuid, u64>> {
        if mentor_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(Uuid, i64)> = pending_counts_select(mentor_ids)
            .into_tuple()
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(mentor_id, count)| (mentor_id, u64::try_from(count).unwrap_or(0)))
            .collect())
    }

    async fn contacted_mentor_ids(&self, mentee_id: Uuid) -> AppResult<Vec<Uuid>> {
        let ids = contacted_select(mentee_id)
            .into_tuple::<Uuid>()
            .all(&self.db)
            .await?;
        Ok(ids)
    }

    async fn transition(
        &self,
        id: Uuid,
        status: RequestStatus,
        responded_at: DateTime<Utc>,
    ) -> AppResult<Option<MentorshipRequest>> {
        if status.is_pending() {
            return Err(AppError::internal("Cannot transition a request back to pending"));
        }

        let result = transition_update(id, status, responded_at)
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        tracing::debug!(request_id = %id, status = %status, "Request transitioned");
        self.find_by_id(id).await
    }
}
