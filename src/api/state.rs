use std::sync::Arc;

use crate::services::{providers::RecipeSource, SuggestionSettings};

/// Shared application state
///
/// Everything here is read-only after startup. Per-request data (the
/// user's ingredients, fetched candidates, match results) never lives here.
#[derive(Clone)]
pub struct AppState {
    pub recipe_source: Arc<dyn RecipeSource>,
    pub settings: SuggestionSettings,
}

impl AppState {
    pub fn new(recipe_source: Arc<dyn RecipeSource>, settings: SuggestionSettings) -> Self {
        Self {
            recipe_source,
            settings,
        }
    }
}
