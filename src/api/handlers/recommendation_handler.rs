//! Interest-based mentor recommendations.

use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Extension, Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use super::parse_help_type;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::config::DEFAULT_RECOMMENDATION_LIMIT;
use crate::errors::AppResult;
use crate::services::RecommendedMentor;
use crate::types::PaginationParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecommendationQuery {
    pub help_type: Option<String>,
    /// Number of recommendations (1-50, default 10)
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

pub fn recommendation_routes() -> Router<AppState> {
    Router::new().route("/", get(recommend_mentors))
}

/// Mentors ranked by interests shared with the caller
#[utoipa::path(
    get,
    path = "/api/recommendations",
    tag = "Recommendations",
    security(("bearer_auth" = [])),
    params(RecommendationQuery),
    responses(
        (status = 200, description = "Ranked mentors", body = Vec<RecommendedMentor>),
        (status = 403, description = "Caller has no mentee profile")
    )
)]
pub async fn recommend_mentors(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Query(query): Query<RecommendationQuery>,
) -> AppResult<Json<Vec<RecommendedMentor>>> {
    let help_type = parse_help_type(query.help_type.as_deref())?;
    let page =
        PaginationParams::new(query.limit, query.offset).page_with_default(DEFAULT_RECOMMENDATION_LIMIT);

    let mentors = state
        .services
        .recommendations()
        .recommend(current_user.id, help_type, page)
        .await?;

    Ok(Json(mentors))
}
