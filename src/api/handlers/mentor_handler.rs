//! Mentor profile handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Extension, Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::parse_help_type;
use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{HelpType, MentorProfile, MentorProfilePatch, NewMentorProfile};
use crate::errors::AppResult;
use crate::services::MentorFilter;
use crate::types::{Created, PaginationParams};

/// Create mentor profile request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMentorProfileRequest {
    #[schema(example = "Software")]
    pub industry: Option<String>,
    #[schema(example = "Senior Software Engineer")]
    pub job_title: Option<String>,
    #[validate(length(min = 1, message = "At least one help type must be offered"))]
    pub help_types_offered: Vec<HelpType>,
    #[validate(range(min = 1, message = "max_requests_per_week must be at least 1"))]
    #[schema(example = 3, minimum = 1)]
    pub max_requests_per_week: i32,
    #[serde(default)]
    pub interest_ids: Vec<Uuid>,
}

impl From<CreateMentorProfileRequest> for NewMentorProfile {
    fn from(req: CreateMentorProfileRequest) -> Self {
        Self {
            industry: req.industry,
            job_title: req.job_title,
            help_types_offered: req.help_types_offered,
            max_requests_per_week: req.max_requests_per_week,
            interest_ids: req.interest_ids,
        }
    }
}

/// Update mentor profile request; omitted fields are left unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateMentorProfileRequest {
    pub industry: Option<String>,
    pub job_title: Option<String>,
    #[validate(length(min = 1, message = "At least one help type must be offered"))]
    pub help_types_offered: Option<Vec<HelpType>>,
    #[validate(range(min = 1, message = "max_requests_per_week must be at least 1"))]
    pub max_requests_per_week: Option<i32>,
    /// Replaces the whole interest set when present
    pub interest_ids: Option<Vec<Uuid>>,
    pub is_active: Option<bool>,
}

impl From<UpdateMentorProfileRequest> for MentorProfilePatch {
    fn from(req: UpdateMentorProfileRequest) -> Self {
        Self {
            industry: req.industry,
            job_title: req.job_title,
            help_types_offered: req.help_types_offered,
            max_requests_per_week: req.max_requests_per_week,
            is_active: req.is_active,
            interest_ids: req.interest_ids,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MentorBrowseQuery {
    /// resume_review, mock_interview, career_advice or social_advice
    pub help_type: Option<String>,
    /// Case-insensitive exact industry match
    pub industry: Option<String>,
    /// Page size (1-50, default 20)
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// Create mentor routes
pub fn mentor_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(browse_mentors))
        .route(
            "/me",
            get(get_my_mentor_profile)
                .post(create_my_mentor_profile)
                .put(update_my_mentor_profile),
        )
        .route("/:id", get(get_mentor))
}

/// Browse active mentors the caller has not contacted yet
#[utoipa::path(
    get,
    path = "/api/mentors",
    tag = "Mentors",
    security(("bearer_auth" = [])),
    params(MentorBrowseQuery),
    responses(
        (status = 200, description = "Mentors, newest first", body = Vec<MentorProfile>),
        (status = 400, description = "Invalid filter")
    )
)]
pub async fn browse_mentors(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Query(query): Query<MentorBrowseQuery>,
) -> AppResult<Json<Vec<MentorProfile>>> {
    let filter = MentorFilter {
        help_type: parse_help_type(query.help_type.as_deref())?,
        industry: query.industry,
    };
    let page = PaginationParams::new(query.limit, query.offset).page();

    let mentors = state
        .services
        .mentors()
        .browse(current_user.id, filter, page)
        .await?;

    Ok(Json(mentors))
}

/// Get the caller's mentor profile
#[utoipa::path(
    get,
    path = "/api/mentors/me",
    tag = "Mentors",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Mentor profile", body = MentorProfile),
        (status = 404, description = "Mentor profile not found")
    )
)]
pub async fn get_my_mentor_profile(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<MentorProfile>> {
    let profile = state.services.mentors().get(current_user.id).await?;
    Ok(Json(profile))
}

/// Create the caller's mentor profile
#[utoipa::path(
    post,
    path = "/api/mentors/me",
    tag = "Mentors",
    security(("bearer_auth" = [])),
    request_body = CreateMentorProfileRequest,
    responses(
        (status = 201, description = "Mentor profile created", body = MentorProfile),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Mentor profile already exists")
    )
)]
pub async fn create_my_mentor_profile(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<CreateMentorProfileRequest>,
) -> AppResult<Created<MentorProfile>> {
    let profile = state
        .services
        .mentors()
        .create(current_user.id, payload.into())
        .await?;

    Ok(Created(profile))
}

/// Update the caller's mentor profile
#[utoipa::path(
    put,
    path = "/api/mentors/me",
    tag = "Mentors",
    security(("bearer_auth" = [])),
    request_body = UpdateMentorProfileRequest,
    responses(
        (status = 200, description = "Mentor profile updated", body = MentorProfile),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Mentor profile not found")
    )
)]
pub async fn update_my_mentor_profile(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<UpdateMentorProfileRequest>,
) -> AppResult<Json<MentorProfile>> {
    let profile = state
        .services
        .mentors()
        .update(current_user.id, payload.into())
        .await?;

    Ok(Json(profile))
}

/// Get a mentor profile by its owner's user id
#[utoipa::path(
    get,
    path = "/api/mentors/{id}",
    tag = "Mentors",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Mentor user ID")),
    responses(
        (status = 200, description = "Mentor profile", body = MentorProfile),
        (status = 404, description = "Mentor profile not found")
    )
)]
pub async fn get_mentor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MentorProfile>> {
    let profile = state.services.mentors().get(id).await?;
    Ok(Json(profile))
}
