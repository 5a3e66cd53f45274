/// Recipe source abstraction
///
/// Candidate recipes come from a pluggable source: the Spoonacular API, a
/// local catalog, or either of those behind the Redis cache. The suggestion
/// service only sees this trait, so the client is built once at startup and
/// injected rather than held in a global.
use crate::{error::AppResult, models::Recipe};

pub mod cached;
pub mod catalog;
pub mod spoonacular;

pub use cached::CachedRecipeSource;
pub use catalog::StaticRecipeSource;
pub use spoonacular::SpoonacularSource;

/// Trait for recipe candidate sources
#[async_trait::async_trait]
pub trait RecipeSource: Send + Sync {
    /// Fetch recipes that use some of the given ingredients
    ///
    /// `limit` caps how many candidates a metered source asks for. Sources
    /// holding their whole pool in memory may return every hit, since the
    /// ranker applies the final limit.
    ///
    /// Ingredients arrive normalized. Failures to reach the source must come
    /// back as errors, never as an empty list, so callers can tell "nothing
    /// matched" apart from "nothing fetched".
    async fn find_by_ingredients(&self, ingredients: &[String], limit: usize) -> AppResult<Vec<Recipe>>;

    /// Source name for logging and cache keys
    fn name(&self) -> &'static str;
}
