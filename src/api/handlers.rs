use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{RankRequest, SuggestionRequest, SuggestionResponse},
    services::{normalizer, suggestions},
};

use super::{ApiJson, AppState};

#[derive(Debug, Deserialize)]
pub struct NormalizeQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    pub ingredients: Vec<String>,
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Suggest recipes from the configured source
pub async fn suggest(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    ApiJson(request): ApiJson<SuggestionRequest>,
) -> AppResult<Json<SuggestionResponse>> {
    tracing::info!(
        request_id = %request_id,
        provider = state.recipe_source.name(),
        "Processing suggestion request"
    );

    let response =
        suggestions::suggest_recipes(state.recipe_source.clone(), state.settings, request).await?;

    Ok(Json(response))
}

/// Rank a recipe pool supplied in the request body
pub async fn rank(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    ApiJson(request): ApiJson<RankRequest>,
) -> Json<SuggestionResponse> {
    tracing::info!(
        request_id = %request_id,
        recipes = request.recipes.len(),
        "Processing rank request"
    );

    Json(suggestions::rank_supplied(request, state.settings.threshold))
}

/// Show how an ingredient string normalizes
pub async fn normalize(Query(params): Query<NormalizeQuery>) -> Json<NormalizeResponse> {
    Json(NormalizeResponse {
        ingredients: normalizer::normalize(&params.q),
    })
}
