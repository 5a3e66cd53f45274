/// Caching decorator for recipe sources
///
/// Third-party recipe APIs are metered per call, so identical ingredient
/// searches within the TTL are served from Redis. Only raw candidates are
/// cached; matching and ranking always run fresh per request.
use crate::{
    cache::{Cache, CacheKey},
    cached,
    error::{AppError, AppResult},
    models::Recipe,
    services::providers::RecipeSource,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize, Deserialize)]
struct RecipeBatch {
    recipes: Vec<Recipe>,
    fetched_at: DateTime<Utc>,
}

pub struct CachedRecipeSource {
    inner: Arc<dyn RecipeSource>,
    cache: Cache,
    ttl: u64,
}

impl CachedRecipeSource {
    pub fn new(inner: Arc<dyn RecipeSource>, cache: Cache, ttl: u64) -> Self {
        Self { inner, cache, ttl }
    }

    fn cache_key(&self, ingredients: &[String], limit: usize) -> CacheKey {
        CacheKey::RecipeSearch {
            source: self.inner.name(),
            ingredients: ingredients.to_vec(),
            limit,
        }
    }
}

#[async_trait::async_trait]
impl RecipeSource for CachedRecipeSource {
    async fn find_by_ingredients(&self, ingredients: &[String], limit: usize) -> AppResult<Vec<Recipe>> {
        let key = self.cache_key(ingredients, limit);

        let batch: AppResult<RecipeBatch> = cached!(self.cache, key, self.ttl, async move {
            let recipes = self.inner.find_by_ingredients(ingredients, limit).await?;
            Ok::<_, AppError>(RecipeBatch {
                recipes,
                fetched_at: Utc::now(),
            })
        });
        let batch = batch?;

        tracing::debug!(
            provider = self.inner.name(),
            age_secs = (Utc::now() - batch.fetched_at).num_seconds(),
            results = batch.recipes.len(),
            "Recipe candidates ready"
        );

        Ok(batch.recipes)
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}
