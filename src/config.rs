use serde::Deserialize;

/// Which recipe source backs the suggestion endpoints
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecipeSourceKind {
    /// Built-in or file-backed catalog, no network access
    Static,
    /// Spoonacular `findByIngredients` API
    Spoonacular,
}

/// Log output format
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Recipe source to use
    #[serde(default = "default_recipe_source")]
    pub recipe_source: RecipeSourceKind,

    /// Recipe API base URL
    #[serde(default = "default_recipe_api_url")]
    pub recipe_api_url: String,

    /// Recipe API key (required for the spoonacular source)
    #[serde(default)]
    pub recipe_api_key: Option<String>,

    /// JSON file of recipe records for the static source
    #[serde(default)]
    pub recipe_catalog_path: Option<String>,

    /// Default minimum match ratio when a request does not supply one
    #[serde(default = "default_match_threshold")]
    pub match_threshold: f64,

    /// Default number of candidates requested from the source
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Timeout for recipe API calls, in seconds
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,

    /// Redis connection URL; caching is disabled when unset
    #[serde(default)]
    pub redis_url: Option<String>,

    /// TTL for cached recipe source responses, in seconds
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    #[serde(default = "default_log_format")]
    pub log_format: LogFormat,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_recipe_source() -> RecipeSourceKind {
    RecipeSourceKind::Static
}

fn default_recipe_api_url() -> String {
    "https://api.spoonacular.com".to_string()
}

fn default_match_threshold() -> f64 {
    0.5
}

fn default_max_results() -> usize {
    10
}

fn default_http_timeout_secs() -> u64 {
    10
}

fn default_cache_ttl_secs() -> u64 {
    3600
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects combinations that would fail at request time
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=1.0).contains(&self.match_threshold) {
            anyhow::bail!(
                "MATCH_THRESHOLD must be between 0 and 1, got {}",
                self.match_threshold
            );
        }
        if self.max_results == 0 {
            anyhow::bail!("MAX_RESULTS must be at least 1");
        }
        if self.recipe_source == RecipeSourceKind::Spoonacular && self.recipe_api_key.is_none() {
            anyhow::bail!("RECIPE_API_KEY is required when RECIPE_SOURCE=spoonacular");
        }
        Ok(())
    }
}
