//! Mentee-facing mentor discovery handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Extension, Router,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use super::parse_help_type;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::errors::AppResult;
use crate::services::{DiscoveryFeed, DiscoveryFilter, MentorDetail};
use crate::types::PaginationParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DiscoveryQuery {
    pub help_type: Option<String>,
    /// Drop mentors whose weekly capacity is used up
    #[serde(default)]
    pub available_only: bool,
    /// Page size (1-50, default 20)
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// Create discovery routes
pub fn discovery_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(discover_mentors))
        .route("/:mentor_id", get(mentor_detail))
}

/// Mentors in the caller's industry, with availability
#[utoipa::path(
    get,
    path = "/api/discover",
    tag = "Discovery",
    security(("bearer_auth" = [])),
    params(DiscoveryQuery),
    responses(
        (status = 200, description = "Discovery feed", body = DiscoveryFeed),
        (status = 400, description = "Mentee industry is not set"),
        (status = 404, description = "Mentee profile not found")
    )
)]
pub async fn discover_mentors(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Query(query): Query<DiscoveryQuery>,
) -> AppResult<Json<DiscoveryFeed>> {
    let filter = DiscoveryFilter {
        help_type: parse_help_type(query.help_type.as_deref())?,
        available_only: query.available_only,
    };
    let page = PaginationParams::new(query.limit, query.offset).page();

    let feed = state
        .services
        .discovery()
        .browse(current_user.id, filter, page)
        .await?;

    Ok(Json(feed))
}

/// A mentor's profile with availability and shared interests
#[utoipa::path(
    get,
    path = "/api/discover/{mentor_id}",
    tag = "Discovery",
    security(("bearer_auth" = [])),
    params(("mentor_id" = Uuid, Path, description = "Mentor user ID")),
    responses(
        (status = 200, description = "Mentor detail", body = MentorDetail),
        (status = 404, description = "Mentor or mentee profile not found")
    )
)]
pub async fn mentor_detail(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(mentor_id): Path<Uuid>,
) -> AppResult<Json<MentorDetail>> {
    let detail = state
        .services
        .discovery()
        .detail(mentor_id, current_user.id)
        .await?;

    Ok(Json(detail))
}
