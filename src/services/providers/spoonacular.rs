/// Spoonacular API provider
///
/// Uses `/recipes/findByIngredients`, which returns for each recipe the
/// ingredients the caller already has and the ones still missing. Both lists
/// are merged into the candidate's ingredient list so the local matcher can
/// score it.
use crate::{
    error::{AppError, AppResult},
    models::{ApiRecipe, Recipe},
    services::providers::RecipeSource,
};
use reqwest::{Client as HttpClient, StatusCode};
use std::time::Duration;

// 1 = maximize used ingredients, 2 = minimize missing ones
const RANKING_MODE: &str = "1";

#[derive(Clone)]
pub struct SpoonacularSource {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl SpoonacularSource {
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    fn map_send_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() || error.is_connect() {
            AppError::SourceUnavailable(format!("{}: {}", self.api_url, error))
        } else {
            AppError::HttpClient(error)
        }
    }

    fn map_status(status: StatusCode, body: String) -> AppError {
        match status {
            StatusCode::PAYMENT_REQUIRED | StatusCode::TOO_MANY_REQUESTS => {
                AppError::RateLimited(format!("Spoonacular returned status {}", status))
            }
            _ => AppError::ExternalApi(format!(
                "Spoonacular returned status {}: {}",
                status, body
            )),
        }
    }
}

#[async_trait::async_trait]
impl RecipeSource for SpoonacularSource {
    async fn find_by_ingredients(&self, ingredients: &[String], limit: usize) -> AppResult<Vec<Recipe>> {
        if ingredients.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/recipes/findByIngredients", self.api_url);
        let joined = ingredients.join(",");
        let number = limit.to_string();

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("ingredients", joined.as_str()),
                ("number", number.as_str()),
                ("ranking", RANKING_MODE),
                ("ignorePantry", "true"),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Self::map_status(status, body));
        }

        let response_text = response.text().await?;
        let api_recipes: Vec<ApiRecipe> = serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                response = %response_text,
                "Failed to deserialize Spoonacular response"
            );
            AppError::ExternalApi(format!("Failed to parse Spoonacular response: {}", e))
        })?;

        let recipes: Vec<Recipe> = api_recipes.into_iter().map(Recipe::from).collect();

        tracing::info!(
            ingredients = ingredients.len(),
            results = recipes.len(),
            provider = "spoonacular",
            "Recipe search completed"
        );

        Ok(recipes)
    }

    fn name(&self) -> &'static str {
        "spoonacular"
    }
}
