mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::json;
use slink::api::handlers::shorten_handler;

fn shorten_server() -> (TestServer, std::sync::Arc<common::InMemoryStore>) {
    let (state, _rx, store) = common::create_test_state();
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(state);

    (TestServer::new(app).unwrap(), store)
}

#[tokio::test]
async fn test_shorten_success() {
    let (server, _store) = shorten_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "long_url": "https://example.com/page" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["long_url"], "https://example.com/page");

    let short_url = body["short_url"].as_str().unwrap();
    let slug = short_url.strip_prefix("http://localhost:8080/").unwrap();
    assert_eq!(slug.len(), 6);
    assert!(slug.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[tokio::test]
async fn test_shorten_with_custom_slug() {
    let (server, _store) = shorten_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "long_url": "https://example.com",
            "custom_slug": "promo2025"
        }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["short_url"], "http://localhost:8080/promo2025");
}

#[tokio::test]
async fn test_shorten_custom_slug_conflict() {
    let (server, store) = shorten_server();
    store.seed("taken1", "https://other.com/", 0);

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "long_url": "https://example.com",
            "custom_slug": "taken1"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);

    let body = response.json::<serde_json::Value>();
    assert!(body["error"]["message"].is_string());
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let (server, _store) = shorten_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "long_url": "not-a-url" }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_rejects_reserved_slug() {
    let (server, _store) = shorten_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "long_url": "https://example.com",
            "custom_slug": "admin"
        }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_is_idempotent_per_url() {
    let (server, _store) = shorten_server();

    let first = server
        .post("/api/shorten")
        .json(&json!({ "long_url": "https://dedup.example.com" }))
        .await;
    let second = server
        .post("/api/shorten")
        .json(&json!({ "long_url": "https://dedup.example.com" }))
        .await;

    first.assert_status_ok();
    second.assert_status_ok();

    let first_body = first.json::<serde_json::Value>();
    let second_body = second.json::<serde_json::Value>();
    assert_eq!(first_body["short_url"], second_body["short_url"]);
}

#[tokio::test]
async fn test_shorten_normalizes_before_dedup() {
    let (server, _store) = shorten_server();

    let first = server
        .post("/api/shorten")
        .json(&json!({ "long_url": "https://example.com/x" }))
        .await;
    let second = server
        .post("/api/shorten")
        .json(&json!({ "long_url": "https://EXAMPLE.COM:443/x" }))
        .await;

    let first_body = first.json::<serde_json::Value>();
    let second_body = second.json::<serde_json::Value>();
    assert_eq!(first_body["short_url"], second_body["short_url"]);
    assert_eq!(second_body["long_url"], "https://example.com/x");
}
