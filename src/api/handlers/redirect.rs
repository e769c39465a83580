//! Public lookup handlers: redirect and introspection.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use crate::api::dto::envelope::ApiResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a tag to its stored URL.
///
/// # Endpoint
///
/// `GET /{tag}`
///
/// # Responses
///
/// - **307 Temporary Redirect** with `Location` set to the stored URL
/// - **400 Bad Request** if the tag is not valid UTF-8 after decoding
/// - **404 Not Found** `{"ok": false, "error": ...}` if the tag is unknown
/// - **500** on storage failure, or if the stored URL cannot be sent as a header
pub async fn redirect_handler(
    tag: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let Path(tag) = tag?;
    let url = state.registry.get_route(&tag).await?;

    // Non-ASCII bytes are allowed in a header value; control bytes are not.
    let location = HeaderValue::from_bytes(url.as_bytes()).map_err(|e| {
        error!(tag, error = %e, "Stored URL is not a valid Location header");
        AppError::internal("Stored URL cannot be used as a redirect target")
    })?;

    debug!(tag, url, "Redirecting");

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
}

/// Reports where a tag points without redirecting.
///
/// # Endpoint
///
/// `GET /which/{tag}`
///
/// # Response
///
/// ```json
/// { "ok": true, "url": "https://example.com/docs" }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the tag is unknown.
pub async fn which_handler(
    tag: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<ApiResponse, AppError> {
    let Path(tag) = tag?;
    let url = state.registry.get_route(&tag).await?;

    Ok(ApiResponse::success().with_url(url))
}
