//! Liveness and fallback handlers.

use axum::http::Uri;

use crate::api::dto::envelope::ApiResponse;
use crate::error::AppError;

/// Liveness check.
///
/// # Endpoint
///
/// `GET /heartbeat`
///
/// Always answers `200 {"ok": true, "msg": "Service is up and running"}`.
/// The registry is not consulted.
pub async fn heartbeat_handler() -> ApiResponse {
    ApiResponse::message("Service is up and running")
}

/// Envelope-shaped 405 for a known path used with an unsupported method.
pub async fn method_not_allowed_handler() -> AppError {
    AppError::method_not_allowed("Method not allowed")
}

/// Envelope-shaped 404 for paths no route matches.
pub async fn fallback_handler(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "No route matched");
    AppError::not_found("Not found")
}
