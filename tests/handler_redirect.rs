mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use golinks::api::handlers::{redirect_handler, which_handler};
use golinks::state::AppState;

fn app(state: AppState) -> Router {
    Router::new()
        .route("/which/{tag}", get(which_handler))
        .route("/{tag}", get(redirect_handler))
        .with_state(state)
}

#[tokio::test]
async fn test_redirect_success() {
    let state = common::create_test_state(&[("docs", "https://example.com/docs")]).await;
    let server = TestServer::new(app(state)).unwrap();

    let response = server.get("/docs").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/docs");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let state = common::create_test_state(&[]).await;
    let server = TestServer::new(app(state)).unwrap();

    let response = server.get("/missing").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["ok"], false);
    assert_eq!(json["error"], "Link 'missing' does not exist");
}

#[tokio::test]
async fn test_redirect_keeps_query_string_in_target() {
    let target = "https://example.com/search?q=rust&page=2";
    let state = common::create_test_state(&[("search", target)]).await;
    let server = TestServer::new(app(state)).unwrap();

    let response = server.get("/search").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), target);
}

#[tokio::test]
async fn test_which_returns_url() {
    let state = common::create_test_state(&[("docs", "https://example.com/docs")]).await;
    let server = TestServer::new(app(state)).unwrap();

    let response = server.get("/which/docs").await;

    response.assert_status_ok();
    response.assert_json(&serde_json::json!({
        "ok": true,
        "url": "https://example.com/docs"
    }));
}

#[tokio::test]
async fn test_which_not_found() {
    let state = common::create_test_state(&[]).await;
    let server = TestServer::new(app(state)).unwrap();

    let response = server.get("/which/nothing").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<serde_json::Value>()["ok"], false);
}
