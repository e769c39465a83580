mod common;

use axum_test::TestServer;
use golinks::domain::repositories::RouteRegistry;
use golinks::infrastructure::persistence::MemoryRouteRegistry;
use golinks::state::AppState;
use serde_json::json;
use std::sync::Arc;

async fn server_with(routes: &[(&str, &str)]) -> (TestServer, Arc<MemoryRouteRegistry>) {
    let registry = common::memory_registry(routes).await;
    let state = AppState::new(registry.clone());
    let server = TestServer::new(common::protected_app(state)).unwrap();
    (server, registry)
}

#[tokio::test]
async fn test_missing_authorization_header() {
    let (server, registry) = server_with(&[]).await;

    let response = server
        .post("/route/docs")
        .json(&json!({ "url": "https://example.com/docs" }))
        .await;

    response.assert_status_unauthorized();
    response.assert_json(&json!({ "ok": false, "error": "No Authorization header" }));
    assert!(registry.get_all_routes().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_token() {
    let (server, registry) = server_with(&[]).await;

    let response = server
        .post("/route/docs")
        .add_header("Authorization", common::bearer("wrong"))
        .json(&json!({ "url": "https://example.com/docs" }))
        .await;

    response.assert_status_unauthorized();
    response.assert_json(&json!({ "ok": false, "error": "Invalid token" }));
    assert_eq!(response.header("www-authenticate"), "Bearer");
    assert!(registry.get_all_routes().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_listing_requires_auth() {
    let (server, _registry) = server_with(&[("a", "https://a.com")]).await;

    server.get("/all").await.assert_status_unauthorized();
    server.get("/route/all").await.assert_status_unauthorized();
}

#[tokio::test]
async fn test_add_route() {
    let (server, registry) = server_with(&[]).await;

    let response = server
        .post("/route/docs")
        .add_header("Authorization", common::auth_header())
        .json(&json!({ "url": "https://example.com/docs" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "ok": true, "msg": "Link added" }));
    assert_eq!(
        registry.get_route("docs").await.unwrap(),
        "https://example.com/docs"
    );
}

#[tokio::test]
async fn test_add_existing_keeps_first_url() {
    let (server, registry) = server_with(&[("docs", "https://first.com")]).await;

    let response = server
        .post("/route/docs")
        .add_header("Authorization", common::auth_header())
        .json(&json!({ "url": "https://second.com" }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["ok"], false);
    assert_eq!(body["error"], "Link 'docs' already exists");
    assert_eq!(registry.get_route("docs").await.unwrap(), "https://first.com");
}

#[tokio::test]
async fn test_add_rejects_non_http_url() {
    let (server, registry) = server_with(&[]).await;

    let response = server
        .post("/route/x")
        .add_header("Authorization", common::auth_header())
        .json(&json!({ "url": "not-a-url" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<serde_json::Value>()["ok"], false);
    assert!(registry.get_all_routes().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_rejects_missing_url() {
    let (server, registry) = server_with(&[]).await;

    let response = server
        .post("/route/x")
        .add_header("Authorization", common::auth_header())
        .json(&json!({}))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "url not specified"
    );
    assert!(registry.get_all_routes().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_rejects_malformed_body() {
    let (server, registry) = server_with(&[]).await;

    let response = server
        .post("/route/x")
        .add_header("Authorization", common::auth_header())
        .add_header("Content-Type", "application/json")
        .bytes("{not json".into())
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<serde_json::Value>()["ok"], false);
    assert!(registry.get_all_routes().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_route() {
    let (server, registry) = server_with(&[("docs", "https://v1.com")]).await;

    let response = server
        .put("/route/docs")
        .add_header("Authorization", common::auth_header())
        .json(&json!({ "url": "https://v2.com" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "ok": true, "msg": "Link updated" }));
    assert_eq!(registry.get_route("docs").await.unwrap(), "https://v2.com");
}

#[tokio::test]
async fn test_update_missing_does_not_create() {
    let (server, registry) = server_with(&[]).await;

    let response = server
        .put("/route/ghost")
        .add_header("Authorization", common::auth_header())
        .json(&json!({ "url": "https://x.com" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "Link 'ghost' does not exist"
    );
    assert!(registry.get_all_routes().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_rejects_invalid_url() {
    let (server, registry) = server_with(&[("docs", "https://v1.com")]).await;

    let response = server
        .put("/route/docs")
        .add_header("Authorization", common::auth_header())
        .json(&json!({ "url": "ftp://files.example.com" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(registry.get_route("docs").await.unwrap(), "https://v1.com");
}

#[tokio::test]
async fn test_delete_route() {
    let (server, registry) = server_with(&[("docs", "https://example.com/docs")]).await;

    let response = server
        .delete("/route/docs")
        .add_header("Authorization", common::auth_header())
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "ok": true, "msg": "Link deleted" }));
    assert!(registry.get_route("docs").await.is_err());
}

#[tokio::test]
async fn test_delete_missing_route() {
    let (server, _registry) = server_with(&[]).await;

    let response = server
        .delete("/route/ghost")
        .add_header("Authorization", common::auth_header())
        .await;

    response.assert_status_not_found();
    assert_eq!(response.json::<serde_json::Value>()["ok"], false);
}

#[tokio::test]
async fn test_list_routes() {
    let (server, _registry) =
        server_with(&[("a", "https://a.com"), ("b", "https://b.com")]).await;

    for path in ["/all", "/route/all"] {
        let response = server
            .get(path)
            .add_header("Authorization", common::auth_header())
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "ok": true,
            "msg": "All routes",
            "routes": { "a": "https://a.com", "b": "https://b.com" },
            "count": 2
        }));
    }
}

#[tokio::test]
async fn test_list_empty() {
    let (server, _registry) = server_with(&[]).await;

    let response = server
        .get("/all")
        .add_header("Authorization", common::auth_header())
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["count"], 0);
    assert_eq!(body["routes"], json!({}));
}

#[tokio::test]
async fn test_raw_token_without_bearer_prefix_is_accepted() {
    let (server, _registry) = server_with(&[]).await;

    let response = server
        .get("/all")
        .add_header("Authorization", common::TEST_SECRET)
        .await;

    response.assert_status_ok();
}
