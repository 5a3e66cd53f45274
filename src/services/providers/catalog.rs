/// Static recipe catalog
///
/// Serves candidates from memory: a small built-in sample set, or records
/// loaded from a JSON file. Records whose ingredient field is missing or not
/// text are skipped when the catalog is built.
use crate::{
    error::{AppError, AppResult},
    models::{CatalogRecord, RawIngredients, Recipe, RecipeId},
    services::{matcher, normalizer, providers::RecipeSource},
};
use serde_json::{json, Value};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct StaticRecipeSource {
    recipes: Vec<Recipe>,
}

impl StaticRecipeSource {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Builds a catalog from raw JSON records, skipping malformed ones
    pub fn from_records(records: Vec<Value>) -> Self {
        Self::new(parse_records(records))
    }

    /// Loads a JSON array of recipe records from disk
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Internal(format!("Failed to read catalog {}: {}", path.display(), e))
        })?;
        let records: Vec<Value> = serde_json::from_str(&contents).map_err(|e| {
            AppError::Internal(format!("Catalog {} is not a JSON array: {}", path.display(), e))
        })?;

        let source = Self::from_records(records);
        tracing::info!(
            path = %path.display(),
            recipes = source.len(),
            "Loaded recipe catalog"
        );
        Ok(source)
    }

    /// The built-in sample catalog
    pub fn builtin() -> Self {
        Self::from_records(sample_records())
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[async_trait::async_trait]
impl RecipeSource for StaticRecipeSource {
    async fn find_by_ingredients(&self, ingredients: &[String], _limit: usize) -> AppResult<Vec<Recipe>> {
        // The whole catalog is in memory, so every recipe with a hit goes to
        // the ranker and the limit is applied after ranking
        let recipes: Vec<Recipe> = self
            .recipes
            .iter()
            .filter(|recipe| {
                matcher::match_recipe(ingredients, &recipe.ingredients)
                    .is_some_and(|result| result.matched_count > 0)
            })
            .cloned()
            .collect();

        tracing::info!(
            ingredients = ingredients.len(),
            results = recipes.len(),
            provider = "catalog",
            "Recipe search completed"
        );

        Ok(recipes)
    }

    fn name(&self) -> &'static str {
        "catalog"
    }
}

/// Converts raw JSON records into recipes
///
/// A record that is not an object with a title, or whose ingredient field is
/// absent or not text, is dropped with a warning. Records without an `id`
/// get one from their position.
pub fn parse_records(records: Vec<Value>) -> Vec<Recipe> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let record: CatalogRecord = match serde_json::from_value(value) {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!(index, error = %e, "Skipping malformed recipe record");
                    return None;
                }
            };

            let Some(raw) = record.ingredients.as_ref().and_then(RawIngredients::from_value) else {
                tracing::warn!(
                    index,
                    title = %record.title,
                    "Skipping recipe record without text ingredients"
                );
                return None;
            };

            Some(Recipe {
                id: RecipeId::Catalog(record.id.unwrap_or_else(|| format!("record-{}", index))),
                title: record.title,
                ingredients: normalizer::raw_ingredient_list(raw),
                instructions: record.instructions,
                url: record.url,
                image: record.image,
            })
        })
        .collect()
}

fn sample_records() -> Vec<Value> {
    vec![
        json!({
            "id": "tomato-soup",
            "title": "Tomato Soup",
            "ingredients": ["tomato", "onion", "garlic", "salt"],
            "instructions": "Boil tomatoes, blend them with onions and garlic. Season with salt."
        }),
        json!({
            "id": "cheese-sandwich",
            "title": "Cheese Sandwich",
            "ingredients": ["bread", "cheese", "butter", "lettuce"],
            "instructions": "Toast the bread, melt the cheese, and assemble with lettuce."
        }),
        json!({
            "id": "chicken-fried-rice",
            "title": "Chicken Fried Rice",
            "ingredients": "2 cups cooked rice|1 chicken breast (diced)|2 eggs|soy sauce|green onion",
            "instructions": "Scramble the eggs, stir-fry the chicken, then toss everything with the rice and soy sauce."
        }),
        json!({
            "id": "garlic-butter-pasta",
            "title": "Garlic Butter Pasta",
            "ingredients": ["200g pasta", "3 tbsp butter", "4 cloves garlic", "parmesan cheese", "salt", "black pepper"],
            "instructions": "Cook the pasta. Melt butter with minced garlic, toss with pasta and parmesan."
        }),
        json!({
            "id": "omelette",
            "title": "Vegetable Omelette",
            "ingredients": "3 eggs, 1/4 cup milk, bell pepper, onion, cheese (grated), salt",
            "instructions": "Whisk eggs with milk, pour into a hot pan, add vegetables and cheese, fold."
        }),
        json!({
            "id": "guacamole",
            "title": "Guacamole",
            "ingredients": ["2 avocados", "1 lime (juiced)", "onion", "tomato", "cilantro", "salt"],
            "instructions": "Mash avocados with lime juice, fold in chopped onion, tomato and cilantro."
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_builtin_catalog_loads_every_sample() {
        let source = StaticRecipeSource::builtin();
        assert_eq!(source.len(), sample_records().len());
    }

    #[test]
    fn test_parse_records_splits_delimited_ingredients() {
        let recipes = parse_records(vec![json!({
            "title": "Toast",
            "ingredients": "bread | butter"
        })]);
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].ingredients, vec!["bread", "butter"]);
        assert_eq!(recipes[0].id, RecipeId::Catalog("record-0".to_string()));
    }

    #[test]
    fn test_parse_records_skips_malformed() {
        let recipes = parse_records(vec![
            json!({ "title": "No Ingredients" }),
            json!({ "title": "Numeric", "ingredients": 12 }),
            json!({ "ingredients": ["egg"] }),
            json!("just a string"),
            json!({ "id": "ok", "title": "Fine", "ingredients": ["egg"] }),
        ]);
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].id, RecipeId::Catalog("ok".to_string()));
    }

    #[test]
    fn test_find_by_ingredients_returns_every_hit() {
        let source = StaticRecipeSource::builtin();
        let recipes =
            tokio_test::block_on(source.find_by_ingredients(&tokens(&["onion", "tomato"]), 1))
                .unwrap();

        let titles: Vec<&str> = recipes.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Tomato Soup", "Chicken Fried Rice", "Vegetable Omelette", "Guacamole"]
        );
    }

    #[test]
    fn test_find_by_ingredients_without_hits() {
        let source = StaticRecipeSource::builtin();
        let recipes =
            tokio_test::block_on(source.find_by_ingredients(&tokens(&["durian"]), 10)).unwrap();
        assert!(recipes.is_empty());
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = StaticRecipeSource::from_path("/nonexistent/catalog.json");
        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
