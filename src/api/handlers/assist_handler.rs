//! Request-writing assistant handlers.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::errors::AppResult;
use crate::services::RewriteSuggestion;

/// Draft to improve
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RewriteRequestBody {
    #[validate(length(min = 1, max = 5000, message = "Text must be 1-5000 characters"))]
    #[schema(example = "hi, can you look at my resume")]
    pub original_text: String,
    #[serde(default)]
    pub questions: Vec<String>,
}

pub fn assist_routes() -> Router<AppState> {
    Router::new().route("/rewrite-request", post(rewrite_request))
}

/// Suggest a clearer wording for a request draft
#[utoipa::path(
    post,
    path = "/api/ai/rewrite-request",
    tag = "Assistant",
    security(("bearer_auth" = [])),
    request_body = RewriteRequestBody,
    responses(
        (status = 200, description = "Suggested rewrite", body = RewriteSuggestion),
        (status = 400, description = "Validation error")
    )
)]
pub async fn rewrite_request(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RewriteRequestBody>,
) -> AppResult<Json<RewriteSuggestion>> {
    let suggestion = state
        .services
        .assistant()
        .rewrite(&payload.original_text, &payload.questions)
        .await?;

    Ok(Json(suggestion))
}
