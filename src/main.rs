use std::sync::Arc;
use std::time::Duration;

use pantry_api::{
    api::{create_router, AppState},
    cache::{create_redis_client, Cache, CacheWriterHandle},
    config::{Config, RecipeSourceKind},
    models::MatchThreshold,
    services::{
        providers::{CachedRecipeSource, RecipeSource, SpoonacularSource, StaticRecipeSource},
        SuggestionSettings,
    },
    telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    telemetry::init_tracing(config.log_format)?;

    let (recipe_source, cache_handle) = build_recipe_source(&config)?;

    let settings = SuggestionSettings {
        threshold: MatchThreshold::new(config.match_threshold)?,
        max_results: config.max_results,
    };

    let app = create_router(AppState::new(recipe_source, settings));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, source = ?config.recipe_source, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(handle) = cache_handle {
        handle.shutdown().await;
    }

    Ok(())
}

/// Builds the configured recipe source, wrapped in the Redis cache when one
/// is configured
fn build_recipe_source(
    config: &Config,
) -> anyhow::Result<(Arc<dyn RecipeSource>, Option<CacheWriterHandle>)> {
    let source: Arc<dyn RecipeSource> = match config.recipe_source {
        RecipeSourceKind::Spoonacular => {
            let api_key = config
                .recipe_api_key
                .clone()
                .ok_or_else(|| anyhow::anyhow!("RECIPE_API_KEY is not set"))?;
            Arc::new(SpoonacularSource::new(
                api_key,
                config.recipe_api_url.clone(),
                Duration::from_secs(config.http_timeout_secs),
            )?)
        }
        RecipeSourceKind::Static => match &config.recipe_catalog_path {
            Some(path) => Arc::new(StaticRecipeSource::from_path(path)?),
            None => Arc::new(StaticRecipeSource::builtin()),
        },
    };

    let Some(redis_url) = &config.redis_url else {
        return Ok((source, None));
    };

    let (cache, handle) = Cache::new(create_redis_client(redis_url)?);
    tracing::info!(ttl_secs = config.cache_ttl_secs, "Recipe source caching enabled");

    let cached: Arc<dyn RecipeSource> =
        Arc::new(CachedRecipeSource::new(source, cache, config.cache_ttl_secs));
    Ok((cached, Some(handle)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
