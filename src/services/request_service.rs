//! Request workflow: mentees ask, mentors accept or decline, and an
//! accepted request materializes a connection.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use super::identity::resolve_identity;
use crate::domain::{
    Connection, HelpType, MentorshipRequest, NewMentorshipRequest, RequestDecision,
};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// What a mentee submits when asking a mentor for help
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDraft {
    /// Mentor's user id
    pub mentor_id: Uuid,
    pub help_type: HelpType,
    pub context: String,
    pub key_questions: Vec<String>,
}

#[async_trait]
pub trait RequestService: Send + Sync {
    async fn create(&self, user_id: Uuid, draft: RequestDraft) -> AppResult<MentorshipRequest>;

    /// Requests the caller takes part in, newest first
    async fn list(&self, user_id: Uuid) -> AppResult<Vec<MentorshipRequest>>;

    async fn get(&self, id: Uuid, user_id: Uuid) -> AppResult<MentorshipRequest>;

    async fn accept(&self, id: Uuid, user_id: Uuid) -> AppResult<MentorshipRequest>;

    async fn decline(&self, id: Uuid, user_id: Uuid) -> AppResult<MentorshipRequest>;
}

pub struct RequestWorkflow<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> RequestWorkflow<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn respond(
        &self,
        id: Uuid,
        user_id: Uuid,
        decision: RequestDecision,
    ) -> AppResult<MentorshipRequest> {
        let requests = self.uow.requests();
        let request = requests
            .find_by_id(id)
            .await?
            .ok_or_not_found("Mentorship request not found")?;
        request.ensure_respondable_by(user_id)?;

        let updated = requests
            .transition(id, decision.status(), Utc::now())
            .await?
            .ok_or_else(|| AppError::conflict("Request has already been responded to"))?;

        if decision == RequestDecision::Accept {
            let connection = self.ensure_connection(&updated).await?;
            tracing::info!(
                request_id = %id,
                connection_id = %connection.id,
                "Mentorship request accepted"
            );
        } else {
            tracing::info!(request_id = %id, "Mentorship request declined");
        }

        Ok(updated)
    }

    /// Create the pair's connection unless one already exists.
    async fn ensure_connection(&self, request: &MentorshipRequest) -> AppResult<Connection> {
        let connections = self.uow.connections();
        if let Some(existing) = connections
            .find_between(request.mentor_id, request.mentee_id)
            .await?
        {
            return Ok(existing);
        }

        match connections
            .create(request.mentor_id, request.mentee_id, Some(request.id))
            .await
        {
            Ok(created) => Ok(created),
            // Lost an insert race; the winner's row is the connection
            Err(AppError::Conflict(_)) => connections
                .find_between(request.mentor_id, request.mentee_id)
                .await?
                .ok_or_else(|| AppError::internal("Connection missing after unique violation")),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl<U: UnitOfWork> RequestService for RequestWorkflow<U> {
    async fn create(&self, user_id: Uuid, draft: RequestDraft) -> AppResult<MentorshipRequest> {
        let context = draft.context.trim().to_string();
        if context.is_empty() {
            return Err(AppError::validation("Context is required"));
        }

        let identity = resolve_identity(&*self.uow, user_id).await?;
        if identity.mentee().is_none() {
            return Err(AppError::forbidden("Only mentees can create mentorship requests"));
        }
        if draft.mentor_id == user_id {
            return Err(AppError::validation("You cannot request mentorship from yourself"));
        }

        self.uow
            .mentors()
            .find_by_user_id(draft.mentor_id)
            .await?
            .ok_or_not_found("Mentor not found")?;

        let requests = self.uow.requests();
        if requests
            .find_pending(user_id, draft.mentor_id)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(
                "You already have a pending request with this mentor",
            ));
        }

        let key_questions = draft
            .key_questions
            .into_iter()
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty())
            .collect();

        let created = requests
            .create(NewMentorshipRequest {
                mentee_id: user_id,
                mentor_id: draft.mentor_id,
                help_type: draft.help_type,
                context,
                key_questions,
            })
            .await?;

        tracing::info!(
            request_id = %created.id,
            mentee_id = %user_id,
            mentor_id = %created.mentor_id,
            "Mentorship request created"
        );
        Ok(created)
    }

    async fn list(&self, user_id: Uuid) -> AppResult<Vec<MentorshipRequest>> {
        let scope = resolve_identity(&*self.uow, user_id)
            .await?
            .request_scope(user_id)
            .ok_or_not_found("No mentor or mentee profile found for this user")?;

        self.uow.requests().list(scope).await
    }

    async fn get(&self, id: Uuid, user_id: Uuid) -> AppResult<MentorshipRequest> {
        let request = self
            .uow
            .requests()
            .find_by_id(id)
            .await?
            .ok_or_not_found("Mentorship request not found")?;

        if !request.involves(user_id) {
            return Err(AppError::forbidden("You do not have access to this request"));
        }
        Ok(request)
    }

    async fn accept(&self, id: Uuid, user_id: Uuid) -> AppResult<MentorshipRequest> {
        self.respond(id, user_id, RequestDecision::Accept).await
    }

    async fn decline(&self, id: Uuid, user_id: Uuid) -> AppResult<MentorshipRequest> {
        self.respond(id, user_id, RequestDecision::Decline).await
    }
}
