//! Top-level router combining public and protected routes.
//!
//! # Route Structure
//!
//! - `GET  /heartbeat`     - Liveness check (public)
//! - `GET  /{tag}`         - 307 redirect (public)
//! - `GET  /which/{tag}`   - Lookup without redirect (public)
//! - `GET  /all`, `/route/all`, `POST|PUT|DELETE /route/{tag}` - Bearer token required
//!
//! Static routes win over `{tag}`, so the tags `heartbeat` and `all` cannot be
//! reached through `GET /{tag}`.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Bearer token on protected routes only
//! - **Path normalization** - Trailing slash trimming

use crate::api;
use crate::api::handlers::{
    fallback_handler, heartbeat_handler, method_not_allowed_handler, redirect_handler,
    which_handler,
};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `verbose` - log request starts at `INFO` instead of `DEBUG`
pub fn app_router(state: AppState, verbose: bool) -> NormalizePath<Router> {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let router = Router::new()
        .route("/heartbeat", get(heartbeat_handler))
        .route("/which/{tag}", get(which_handler))
        .route("/{tag}", get(redirect_handler))
        .merge(protected)
        .method_not_allowed_fallback(method_not_allowed_handler)
        .fallback(fallback_handler)
        .with_state(state)
        .layer(tracing::layer(verbose));

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
