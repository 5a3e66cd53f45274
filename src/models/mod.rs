use serde::{Deserialize, Serialize};
use serde_json::Value;

mod matching;
mod recipe;

pub use matching::{MatchResult, MatchThreshold, RankedRecipe};
pub use recipe::{CatalogRecord, RawIngredients, Recipe, RecipeId};

/// What a free-text query looks like
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    /// A list of ingredients to match recipes against
    Ingredients,
    /// A cooking question; not something the matcher can answer
    Question,
    /// Nothing was entered
    Empty,
}

/// User ingredients, as free text or an already-split list
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IngredientsInput {
    Text(String),
    List(Vec<String>),
}

/// Request to suggest recipes from the configured recipe source
#[derive(Debug, Deserialize)]
pub struct SuggestionRequest {
    pub ingredients: IngredientsInput,
    #[serde(default)]
    pub threshold: Option<MatchThreshold>,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Request to rank a caller-supplied pool of recipes
///
/// Records are kept as raw JSON so a malformed one can be skipped without
/// rejecting the whole request.
#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub ingredients: IngredientsInput,
    #[serde(default)]
    pub threshold: Option<MatchThreshold>,
    #[serde(default)]
    pub recipes: Vec<Value>,
}

/// Ranked suggestions, best match first
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionResponse {
    pub query_kind: QueryKind,
    /// The user's ingredients after normalization
    pub ingredients: Vec<String>,
    pub threshold: f64,
    pub recipes: Vec<RecipeSuggestion>,
}

/// One ranked recipe as shown to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeSuggestion {
    pub id: RecipeId,
    pub title: String,
    pub matched_count: usize,
    pub total_count: usize,
    /// 0-100, one decimal
    pub match_percentage: f64,
    pub matched_ingredients: Vec<String>,
    pub missing_ingredients: Vec<String>,
    pub instructions: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
}

impl From<RankedRecipe> for RecipeSuggestion {
    fn from(ranked: RankedRecipe) -> Self {
        let match_percentage = ranked.result.match_percentage();
        let RankedRecipe { recipe, result } = ranked;

        RecipeSuggestion {
            id: recipe.id,
            title: recipe.title,
            matched_count: result.matched_count,
            total_count: result.total_count,
            match_percentage,
            matched_ingredients: result.matched,
            missing_ingredients: result.missing,
            instructions: recipe.instructions,
            url: recipe.url,
            image: recipe.image,
        }
    }
}

// ============================================================================
// Spoonacular API Types
// ============================================================================

/// One entry of the `findByIngredients` response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRecipe {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub used_ingredients: Vec<ApiIngredient>,
    #[serde(default)]
    pub missed_ingredients: Vec<ApiIngredient>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiIngredient {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub original: Option<String>,
}

impl From<ApiRecipe> for Recipe {
    fn from(api: ApiRecipe) -> Self {
        // The API pre-splits ingredients into the ones the user supplied and
        // the ones still needed; matching wants the recipe's full list.
        let ingredients = api
            .used_ingredients
            .into_iter()
            .chain(api.missed_ingredients)
            .filter_map(|ingredient| ingredient.name.or(ingredient.original))
            .collect();

        let url = Some(format!(
            "https://spoonacular.com/recipes/{}-{}",
            slugify(&api.title),
            api.id
        ));

        Recipe {
            id: RecipeId::Spoonacular(api.id),
            title: api.title,
            ingredients,
            instructions: None,
            url,
            image: api.image,
        }
    }
}

fn slugify(title: &str) -> String {
    title
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
