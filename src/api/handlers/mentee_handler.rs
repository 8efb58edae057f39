//! Mentee profile handlers.

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
use crate::domain::{HelpType, MenteeProfile, MenteeProfilePatch, NewMenteeProfile};
use crate::errors::AppResult;
use crate::types::{Created, PaginationParams};

/// Create mentee profile request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMenteeProfileRequest {
    /// Needed before the discovery feed can be used
    #[schema(example = "Software")]
    pub industry: Option<String>,
    #[validate(length(max = 2000, message = "Goals must be at most 2000 characters"))]
    pub goals: Option<String>,
    #[serde(default)]
    pub help_needed: Vec<HelpType>,
    #[validate(length(max = 2000, message = "Background must be at most 2000 characters"))]
    pub background: Option<String>,
    #[serde(default)]
    pub interest_ids: Vec<Uuid>,
}

impl From<CreateMenteeProfileRequest> for NewMenteeProfile {
    fn from(req: CreateMenteeProfileRequest) -> Self {
        Self {
            industry: req.industry,
            goals: req.goals,
            help_needed: req.help_needed,
            background: req.background,
            interest_ids: req.interest_ids,
        }
    }
}

/// Update mentee profile request; omitted fields are left unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateMenteeProfileRequest {
    pub industry: Option<String>,
    #[validate(length(max = 2000, message = "Goals must be at most 2000 characters"))]
    pub goals: Option<String>,
    pub help_needed: Option<Vec<HelpType>>,
    #[validate(length(max = 2000, message = "Background must be at most 2000 characters"))]
    pub background: Option<String>,
    /// Replaces the whole interest set when present
    pub interest_ids: Option<Vec<Uuid>>,
}

impl From<UpdateMenteeProfileRequest> for MenteeProfilePatch {
    fn from(req: UpdateMenteeProfileRequest) -> Self {
        Self {
            industry: req.industry,
            goals: req.goals,
            help_needed: req.help_needed,
            background: req.background,
            interest_ids: req.interest_ids,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MenteeBrowseQuery {
    /// Only mentees needing this kind of help
    pub help_needed: Option<String>,
    /// Page size (1-50, default 20)
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// Create mentee routes
pub fn mentee_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(browse_mentees))
        .route(
            "/me",
            get(get_my_mentee_profile)
                .post(create_my_mentee_profile)
                .put(update_my_mentee_profile),
        )
        .route("/:id", get(get_mentee))
}

/// Browse mentees
#[utoipa::path(
    get,
    path = "/api/mentees",
    tag = "Mentees",
    security(("bearer_auth" = [])),
    params(MenteeBrowseQuery),
    responses(
        (status = 200, description = "Mentees, newest first", body = Vec<MenteeProfile>),
        (status = 400, description = "Invalid filter")
    )
)]
pub async fn browse_mentees(
    State(state): State<AppState>,
    Query(query): Query<MenteeBrowseQuery>,
) -> AppResult<Json<Vec<MenteeProfile>>> {
    let help_needed = parse_help_type(query.help_needed.as_deref())?;
    let page = PaginationParams::new(query.limit, query.offset).page();

    let mentees = state.services.mentees().browse(help_needed, page).await?;
    Ok(Json(mentees))
}

/// Get the caller's mentee profile
#[utoipa::path(
    get,
    path = "/api/mentees/me",
    tag = "Mentees",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Mentee profile", body = MenteeProfile),
        (status = 404, description = "Mentee profile not found")
    )
)]
pub async fn get_my_mentee_profile(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<MenteeProfile>> {
    let profile = state.services.mentees().get(current_user.id).await?;
    Ok(Json(profile))
}

/// Create the caller's mentee profile
#[utoipa::path(
    post,
    path = "/api/mentees/me",
    tag = "Mentees",
    security(("bearer_auth" = [])),
    request_body = CreateMenteeProfileRequest,
    responses(
        (status = 201, description = "Mentee profile created", body = MenteeProfile),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Mentee profile already exists")
    )
)]
pub async fn create_my_mentee_profile(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<CreateMenteeProfileRequest>,
) -> AppResult<Created<MenteeProfile>> {
    let profile = state
        .services
        .mentees()
        .create(current_user.id, payload.into())
        .await?;

    Ok(Created(profile))
}

/// Update the caller's mentee profile
#[utoipa::path(
    put,
    path = "/api/mentees/me",
    tag = "Mentees",
    security(("bearer_auth" = [])),
    request_body = UpdateMenteeProfileRequest,
    responses(
        (status = 200, description = "Mentee profile updated", body = MenteeProfile),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Mentee profile not found")
    )
)]
pub async fn update_my_mentee_profile(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<UpdateMenteeProfileRequest>,
) -> AppResult<Json<MenteeProfile>> {
    let profile = state
        .services
        .mentees()
        .update(current_user.id, payload.into())
        .await?;

    Ok(Json(profile))
}

/// Get a mentee profile by its owner's user id
#[utoipa::path(
    get,
    path = "/api/mentees/{id}",
    tag = "Mentees",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Mentee user ID")),
    responses(
        (status = 200, description = "Mentee profile", body = MenteeProfile),
        (status = 404, description = "Mentee profile not found")
    )
)]
pub async fn get_mentee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MenteeProfile>> {
    let profile = state.services.mentees().get(id).await?;
    Ok(Json(profile))
}
