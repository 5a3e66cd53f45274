use crate::{
    error::AppResult,
    models::{
        IngredientsInput, MatchThreshold, QueryKind, RankRequest, RecipeSuggestion,
        SuggestionRequest, SuggestionResponse,
    },
    services::{normalizer, providers::catalog, providers::RecipeSource, query_kind, ranker},
};
use std::sync::Arc;
use std::time::Instant;

/// Per-request defaults taken from configuration
#[derive(Debug, Clone, Copy)]
pub struct SuggestionSettings {
    pub threshold: MatchThreshold,
    pub max_results: usize,
}

/// Suggests recipes for the user's ingredients
///
/// Input that normalizes to nothing, or reads as a question rather than an
/// ingredient list, returns an empty suggestion list without touching the
/// source. Source failures are returned as errors.
pub async fn suggest_recipes(
    source: Arc<dyn RecipeSource>,
    settings: SuggestionSettings,
    request: SuggestionRequest,
) -> AppResult<SuggestionResponse> {
    let start = Instant::now();
    let threshold = request.threshold.unwrap_or(settings.threshold);
    let limit = request.limit.unwrap_or(settings.max_results).max(1);

    let (query_kind, ingredients) = prepare_ingredients(&request.ingredients);

    if query_kind != QueryKind::Ingredients {
        tracing::info!(query_kind = ?query_kind, "Nothing to rank");
        return Ok(empty_response(query_kind, ingredients, threshold));
    }

    let pool = source.find_by_ingredients(&ingredients, limit).await?;
    let pool_size = pool.len();

    let recipes: Vec<RecipeSuggestion> = ranker::rank_with_limit(&ingredients, pool, threshold, limit)
        .into_iter()
        .map(RecipeSuggestion::from)
        .collect();

    tracing::info!(
        provider = source.name(),
        ingredients = ingredients.len(),
        candidates = pool_size,
        suggested = recipes.len(),
        processing_time_ms = start.elapsed().as_millis(),
        "Suggestions ranked"
    );

    Ok(SuggestionResponse {
        query_kind,
        ingredients,
        threshold: threshold.value(),
        recipes,
    })
}

/// Ranks a caller-supplied recipe pool without calling any source
///
/// Malformed records in the pool are skipped.
pub fn rank_supplied(request: RankRequest, default_threshold: MatchThreshold) -> SuggestionResponse {
    let threshold = request.threshold.unwrap_or(default_threshold);
    let (query_kind, ingredients) = prepare_ingredients(&request.ingredients);

    if query_kind != QueryKind::Ingredients {
        return empty_response(query_kind, ingredients, threshold);
    }

    let submitted = request.recipes.len();
    let pool = catalog::parse_records(request.recipes);

    tracing::info!(
        submitted,
        usable = pool.len(),
        ingredients = ingredients.len(),
        "Ranking supplied recipes"
    );

    let recipes = ranker::rank(&ingredients, pool, threshold)
        .into_iter()
        .map(RecipeSuggestion::from)
        .collect();

    SuggestionResponse {
        query_kind,
        ingredients,
        threshold: threshold.value(),
        recipes,
    }
}

/// Classifies and normalizes the user's ingredients
///
/// Only free text is classified; an explicit list is always ingredients
/// unless it normalizes to nothing.
fn prepare_ingredients(input: &IngredientsInput) -> (QueryKind, Vec<String>) {
    let ingredients = normalizer::normalize_input(input);

    let kind = match input {
        IngredientsInput::Text(text) => query_kind::classify(text),
        IngredientsInput::List(_) => QueryKind::Ingredients,
    };

    if ingredients.is_empty() {
        (QueryKind::Empty, ingredients)
    } else if kind == QueryKind::Question {
        (QueryKind::Question, Vec::new())
    } else {
        (QueryKind::Ingredients, ingredients)
    }
}

fn empty_response(
    query_kind: QueryKind,
    ingredients: Vec<String>,
    threshold: MatchThreshold,
) -> SuggestionResponse {
    SuggestionResponse {
        query_kind,
        ingredients,
        threshold: threshold.value(),
        recipes: Vec::new(),
    }
}
