use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use pantry::domain::config::ApiConfig;
use pantry::kernel::server::{ApiState, system_router};
use pantry::server::catalog_router;
use serde_json::Value;
use tower::ServiceExt;

fn app() -> Router {
    let config = ApiConfig::default();
    let state = ApiState::builder()
        .register_slices(pantry::init(&config).unwrap())
        .config(config)
        .build()
        .unwrap();

    let (router, _api) = catalog_router().merge(system_router()).split_for_parts();
    router.with_state(state)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = app().oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn names(body: &Value) -> Vec<&str> {
    body.as_array().unwrap().iter().map(|item| item["name"].as_str().unwrap()).collect()
}

#[tokio::test]
async fn recipe_by_id_uses_camel_case() {
    let (status, body) = get("/recipes/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Chicken Tikka Masala");
    assert_eq!(body["cookTime"], 45);
    assert_eq!(body["difficulty"], "medium");
    assert_eq!(body["ingredientIds"], serde_json::json!(["1", "2", "3", "4"]));
}

#[tokio::test]
async fn unknown_ids_are_404() {
    for uri in ["/recipes/999", "/recipes/999/ingredients", "/ingredients/999"] {
        let (status, body) = get(uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert!(body["error"].as_str().unwrap().contains("'999'"));
    }
}

#[tokio::test]
async fn listing_keeps_seed_order_and_null_steps() {
    let (status, body) = get("/recipes").await;

    assert_eq!(status, StatusCode::OK);
    let recipes = body.as_array().unwrap();
    assert_eq!(recipes.len(), 4);
    assert!(recipes[3]["steps"].is_null());
}

#[tokio::test]
async fn search_is_case_insensitive() {
    let (_, body) = get("/recipes/search?q=TIKKA").await;
    assert_eq!(names(&body), ["Chicken Tikka Masala"]);

    let (_, body) = get("/recipes/search").await;
    assert_eq!(body.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn ingredient_batch_drops_unknown_ids() {
    let (status, body) = get("/ingredients?ids=1,999").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), ["Chicken"]);

    let (_, body) = get("/ingredients?ids=4,%201,,3").await;
    assert_eq!(names(&body), ["Chicken", "Tomato Sauce", "Cream"]);

    let (_, body) = get("/ingredients").await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn repeated_ids_key_is_a_json_bad_request() {
    let (status, body) = get("/ingredients?ids=1&ids=2").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Bad request: "));
}

#[tokio::test]
async fn recipe_ingredients_are_resolved() {
    let (status, body) = get("/recipes/1/ingredients").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), ["Chicken", "Yogurt", "Tomato Sauce", "Cream"]);
}

#[tokio::test]
async fn single_ingredient_lookup() {
    let (status, body) = get("/ingredients/2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Yogurt");
    assert_eq!(body["quantity"], "1 cup");
}

#[tokio::test]
async fn stats_and_health_report_the_catalog() {
    let (status, stats) = get("/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["recipes"], 4);
    assert_eq!(stats["ingredients"], 15);

    let (status, health) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "up");
    assert_eq!(health["slices"].as_array().unwrap().len(), 3);
}

#[test]
fn openapi_document_lists_catalog_paths() {
    let (_, api) = catalog_router().split_for_parts();
    let paths: Vec<&String> = api.paths.paths.keys().collect();

    for expected in ["/recipes", "/recipes/search", "/recipes/{id}", "/ingredients/{id}", "/stats"] {
        assert!(paths.iter().any(|path| *path == expected), "{expected} missing");
    }
}
