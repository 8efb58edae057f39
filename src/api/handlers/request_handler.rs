//! Mentorship request workflow handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, patch},
    Extension, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{HelpType, MentorshipRequest};
use crate::errors::AppResult;
use crate::services::RequestDraft;
use crate::types::Created;

/// Create mentorship request body
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRequestBody {
    /// Mentor's user id
    pub mentor_id: Uuid,
    pub help_type: HelpType,
    #[validate(length(min = 1, max = 5000, message = "Context must be 1-5000 characters"))]
    #[schema(example = "I'm moving from QA into backend development and would like feedback on my resume.")]
    pub context: String,
    #[serde(default)]
    #[validate(length(max = 10, message = "At most 10 key questions"))]
    pub key_questions: Vec<String>,
}

impl From<CreateRequestBody> for RequestDraft {
    fn from(body: CreateRequestBody) -> Self {
        Self {
            mentor_id: body.mentor_id,
            help_type: body.help_type,
            context: body.context,
            key_questions: body.key_questions,
        }
    }
}

/// Requests visible to the caller
#[derive(Debug, Serialize, ToSchema)]
pub struct RequestListResponse {
    pub requests: Vec<MentorshipRequest>,
    pub total: usize,
}

/// Create request routes
pub fn request_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_requests).post(create_request))
        .route("/:id", get(get_request))
        .route("/:id/accept", patch(accept_request))
        .route("/:id/decline", patch(decline_request))
}

/// Send a mentorship request to a mentor
#[utoipa::path(
    post,
    path = "/api/requests",
    tag = "Requests",
    security(("bearer_auth" = [])),
    request_body = CreateRequestBody,
    responses(
        (status = 201, description = "Request created", body = MentorshipRequest),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Caller has no mentee profile"),
        (status = 404, description = "Mentor not found"),
        (status = 409, description = "A pending request to this mentor already exists")
    )
)]
pub async fn create_request(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<CreateRequestBody>,
) -> AppResult<Created<MentorshipRequest>> {
    let request = state
        .services
        .requests()
        .create(current_user.id, payload.into())
        .await?;

    Ok(Created(request))
}

/// List requests the caller sent or received
#[utoipa::path(
    get,
    path = "/api/requests",
    tag = "Requests",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Requests, newest first", body = RequestListResponse),
        (status = 404, description = "Caller has neither a mentor nor a mentee profile")
    )
)]
pub async fn list_requests(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<RequestListResponse>> {
    let requests = state.services.requests().list(current_user.id).await?;
    let total = requests.len();

    Ok(Json(RequestListResponse { requests, total }))
}

/// Get one request the caller is a party to
#[utoipa::path(
    get,
    path = "/api/requests/{id}",
    tag = "Requests",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Request", body = MentorshipRequest),
        (status = 403, description = "Caller is not a party to the request"),
        (status = 404, description = "Request not found")
    )
)]
pub async fn get_request(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MentorshipRequest>> {
    let request = state.services.requests().get(id, current_user.id).await?;
    Ok(Json(request))
}

/// Accept a pending request and connect the pair
#[utoipa::path(
    patch,
    path = "/api/requests/{id}/accept",
    tag = "Requests",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Request accepted", body = MentorshipRequest),
        (status = 403, description = "Only the addressed mentor may respond"),
        (status = 404, description = "Request not found"),
        (status = 409, description = "Request is no longer pending")
    )
)]
pub async fn accept_request(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MentorshipRequest>> {
    let request = state.services.requests().accept(id, current_user.id).await?;
    Ok(Json(request))
}

/// Decline a pending request
#[utoipa::path(
    patch,
    path = "/api/requests/{id}/decline",
    tag = "Requests",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Request declined", body = MentorshipRequest),
        (status = 403, description = "Only the addressed mentor may respond"),
        (status = 404, description = "Request not found"),
        (status = 409, description = "Request is no longer pending")
    )
)]
pub async fn decline_request(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MentorshipRequest>> {
    let request = state.services.requests().decline(id, current_user.id).await?;
    Ok(Json(request))
}
