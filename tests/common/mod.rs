#![allow(dead_code)]

use axum::Router;
use golinks::api::middleware::auth;
use golinks::api::routes::protected_routes;
use golinks::domain::entities::AuthSecret;
use golinks::domain::repositories::RouteRegistry;
use golinks::infrastructure::persistence::{MemoryRouteRegistry, SqliteRouteRegistry};
use golinks::state::AppState;
use std::sync::Arc;
use tempfile::TempDir;

pub const TEST_SECRET: &str = "test-secret";

/// Registry in memory, seeded with `routes`.
pub async fn memory_registry(routes: &[(&str, &str)]) -> Arc<MemoryRouteRegistry> {
    let registry = Arc::new(MemoryRouteRegistry::new(AuthSecret::new(TEST_SECRET)));
    for (tag, url) in routes {
        registry.add_route(tag, url).await.unwrap();
    }
    registry
}

pub async fn create_test_state(routes: &[(&str, &str)]) -> AppState {
    AppState::new(memory_registry(routes).await)
}

/// Opens a fresh SQLite registry inside a temporary directory.
///
/// The directory is removed when the returned `TempDir` is dropped, so keep
/// it alive for the duration of the test.
pub async fn sqlite_registry() -> (SqliteRouteRegistry, TempDir) {
    let dir = TempDir::new().unwrap();
    let registry = SqliteRouteRegistry::connect(&db_path(&dir), AuthSecret::new(TEST_SECRET))
        .await
        .unwrap();
    (registry, dir)
}

pub fn db_path(dir: &TempDir) -> String {
    dir.path().join("links.db").to_string_lossy().into_owned()
}

/// The protected route table behind the auth middleware, as mounted by the app.
pub fn protected_app(state: AppState) -> Router {
    protected_routes()
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth::layer,
        ))
        .with_state(state)
}

/// `Authorization` header value for `token`.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub fn auth_header() -> String {
    bearer(TEST_SECRET)
}
