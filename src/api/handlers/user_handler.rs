//! Base user profile handlers.

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{NewUserProfile, UserProfile, UserProfilePatch, UserRole};
use crate::errors::AppResult;
use crate::types::Created;

/// Create user profile request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserProfileRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    #[schema(example = "Ada Lovelace")]
    pub full_name: Option<String>,
    pub role: UserRole,
}

/// Update user profile request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserProfileRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub full_name: Option<String>,
    pub role: Option<UserRole>,
}

impl From<UpdateUserProfileRequest> for UserProfilePatch {
    fn from(req: UpdateUserProfileRequest) -> Self {
        Self {
            full_name: req.full_name,
            role: req.role,
        }
    }
}

/// Create user profile routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route(
        "/me",
        get(get_my_profile).post(create_my_profile).put(update_my_profile),
    )
}

/// Get the caller's base profile
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "User profile", body = UserProfile),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Profile not found")
    )
)]
pub async fn get_my_profile(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<UserProfile>> {
    let profile = state.services.users().get(current_user.id).await?;
    Ok(Json(profile))
}

/// Create the caller's base profile
#[utoipa::path(
    post,
    path = "/api/users/me",
    tag = "Users",
    security(("bearer_auth" = [])),
    request_body = CreateUserProfileRequest,
    responses(
        (status = 201, description = "Profile created", body = UserProfile),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Profile already exists")
    )
)]
pub async fn create_my_profile(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<CreateUserProfileRequest>,
) -> AppResult<Created<UserProfile>> {
    let profile = state
        .services
        .users()
        .create(
            current_user.id,
            NewUserProfile {
                full_name: payload.full_name,
                role: payload.role,
            },
        )
        .await?;

    Ok(Created(profile))
}

/// Update the caller's base profile
#[utoipa::path(
    put,
    path = "/api/users/me",
    tag = "Users",
    security(("bearer_auth" = [])),
    request_body = UpdateUserProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = UserProfile),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Profile not found")
    )
)]
pub async fn update_my_profile(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<UpdateUserProfileRequest>,
) -> AppResult<Json<UserProfile>> {
    let profile = state
        .services
        .users()
        .update(current_user.id, payload.into())
        .await?;

    Ok(Json(profile))
}
