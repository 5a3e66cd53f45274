use std::collections::HashMap;
use std::time::Duration;

use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};

use pantry_api::{
    error::AppError,
    models::RecipeId,
    services::providers::{RecipeSource, SpoonacularSource},
};

/// Serves `router` on an ephemeral local port and returns its base URL
async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn source_for(base_url: String) -> SpoonacularSource {
    SpoonacularSource::new("test_key".to_string(), base_url, Duration::from_secs(2)).unwrap()
}

fn tokens(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

async fn find_by_ingredients(Query(params): Query<HashMap<String, String>>) -> (StatusCode, Json<Value>) {
    if params.get("apiKey").map(String::as_str) != Some("test_key") {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "message": "bad key" })));
    }

    assert_eq!(params.get("ingredients").map(String::as_str), Some("chicken,rice"));
    assert_eq!(params.get("number").map(String::as_str), Some("5"));

    (
        StatusCode::OK,
        Json(json!([
            {
                "id": 715538,
                "title": "Chicken Fried Rice",
                "image": "https://img.spoonacular.com/recipes/715538-312x231.jpg",
                "usedIngredients": [
                    { "name": "chicken", "original": "1 lb chicken" },
                    { "name": "rice", "original": "2 cups rice" }
                ],
                "missedIngredients": [
                    { "name": "soy sauce", "original": "2 tbsp soy sauce" }
                ]
            }
        ])),
    )
}

#[tokio::test]
async fn test_fetches_and_converts_recipes() {
    let router = Router::new().route("/recipes/findByIngredients", get(find_by_ingredients));
    let source = source_for(spawn_stub(router).await);

    let recipes = source
        .find_by_ingredients(&tokens(&["chicken", "rice"]), 5)
        .await
        .unwrap();

    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].id, RecipeId::Spoonacular(715538));
    assert_eq!(recipes[0].title, "Chicken Fried Rice");
    assert_eq!(recipes[0].ingredients, vec!["chicken", "rice", "soy sauce"]);
    assert!(recipes[0].image.is_some());
}

#[tokio::test]
async fn test_quota_exhaustion_is_rate_limited() {
    let router = Router::new().route(
        "/recipes/findByIngredients",
        get(|| async { (StatusCode::PAYMENT_REQUIRED, "daily points limit reached") }),
    );
    let source = source_for(spawn_stub(router).await);

    let result = source.find_by_ingredients(&tokens(&["egg"]), 5).await;
    assert!(matches!(result, Err(AppError::RateLimited(_))));
}

#[tokio::test]
async fn test_server_error_is_external_api_error() {
    let router = Router::new().route(
        "/recipes/findByIngredients",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream broke") }),
    );
    let source = source_for(spawn_stub(router).await);

    let result = source.find_by_ingredients(&tokens(&["egg"]), 5).await;
    match result {
        Err(AppError::ExternalApi(msg)) => assert!(msg.contains("upstream broke")),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_unparseable_body_is_external_api_error() {
    let router = Router::new().route(
        "/recipes/findByIngredients",
        get(|| async { Json(json!({ "unexpected": true })) }),
    );
    let source = source_for(spawn_stub(router).await);

    let result = source.find_by_ingredients(&tokens(&["egg"]), 5).await;
    assert!(matches!(result, Err(AppError::ExternalApi(_))));
}

#[tokio::test]
async fn test_unreachable_source_is_unavailable() {
    // Bind then drop to get a port with nothing listening
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let source = source_for(format!("http://{}", addr));
    let result = source.find_by_ingredients(&tokens(&["egg"]), 5).await;
    assert!(matches!(result, Err(AppError::SourceUnavailable(_))));
}
