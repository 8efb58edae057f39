//! Interest catalog handlers.

use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::AppState;
use crate::domain::Interest;
use crate::errors::AppResult;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InterestQuery {
    /// Only interests in this category
    pub category: Option<String>,
}

/// Create interest routes
pub fn interest_routes() -> Router<AppState> {
    Router::new().route("/", get(list_interests))
}

/// List the interest catalog
#[utoipa::path(
    get,
    path = "/api/interests",
    tag = "Interests",
    params(InterestQuery),
    responses(
        (status = 200, description = "Interests ordered by name", body = Vec<Interest>)
    )
)]
pub async fn list_interests(
    State(state): State<AppState>,
    Query(query): Query<InterestQuery>,
) -> AppResult<Json<Vec<Interest>>> {
    let category = query
        .category
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());

    let interests = state.services.interests().list(category).await?;
    Ok(Json(interests))
}
