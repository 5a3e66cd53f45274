use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Display;

/// Identifier for a recipe, either from the recipe API or a local catalog
///
/// Serialized as the bare number or string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecipeId {
    /// Spoonacular numeric recipe ID
    Spoonacular(u64),
    /// Catalog-assigned ID (slug or record index)
    Catalog(String),
}

impl Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecipeId::Spoonacular(id) => write!(f, "{}", id),
            RecipeId::Catalog(id) => write!(f, "{}", id),
        }
    }
}

/// A candidate recipe as fetched from a recipe source
///
/// Ingredients are kept raw here; normalization happens when the recipe is
/// matched so the original strings stay available for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
}

/// Ingredient field of a raw catalog record
///
/// Catalogs disagree on shape: some carry a list, some a single `|` or `,`
/// delimited string.
#[derive(Debug, Clone, PartialEq)]
pub enum RawIngredients {
    List(Vec<String>),
    Delimited(String),
}

impl RawIngredients {
    /// Reads the ingredient field of a record, returning `None` when it is
    /// neither a string nor a list of strings.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(RawIngredients::Delimited(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .map(RawIngredients::List),
            _ => None,
        }
    }
}

/// A recipe record as found in a JSON catalog or a `/rank` request body
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub ingredients: Option<Value>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}
