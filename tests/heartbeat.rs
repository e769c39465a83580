mod common;

use axum::extract::Request;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router, ServiceExt};
use common::*;
use golinks::infrastructure::heartbeat::check_heartbeat;
use golinks::routes::app_router;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

const TIMEOUT: Duration = Duration::from_secs(5);

/// Serves `app` on an ephemeral local port and returns its base URL.
async fn spawn(app: NormalizePath<Router>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
            .await
            .unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn test_running_server_is_healthy() {
    let state = create_test_state(&[]).await;
    let base = spawn(app_router(state, false)).await;

    check_heartbeat(&base, TIMEOUT).await.unwrap();
    check_heartbeat(&format!("{base}/"), TIMEOUT).await.unwrap();
}

#[tokio::test]
async fn test_unreachable_server_fails() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = check_heartbeat(&format!("http://{addr}"), TIMEOUT)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Failed to reach"));
}

#[tokio::test]
async fn test_error_status_fails() {
    let app = Router::new().route(
        "/heartbeat",
        get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    );
    let base = spawn(NormalizePathLayer::trim_trailing_slash().layer(app)).await;

    let err = check_heartbeat(&base, TIMEOUT).await.unwrap_err();
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn test_ok_false_fails() {
    let app = Router::new().route(
        "/heartbeat",
        get(|| async { Json(serde_json::json!({ "ok": false })) }),
    );
    let base = spawn(NormalizePathLayer::trim_trailing_slash().layer(app)).await;

    assert!(check_heartbeat(&base, TIMEOUT).await.is_err());
}
