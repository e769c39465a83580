//! Bearer token authentication middleware.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState};

const BEARER_PREFIX: &str = "Bearer ";

/// Message for requests without a usable `Authorization` header.
pub const MISSING_HEADER_MESSAGE: &str = "No Authorization header";

/// Message for requests whose token does not match the secret.
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid token";

/// Authenticates requests against the registry's secret.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// The `Bearer ` prefix is stripped when present. A value without it is
/// compared as-is.
///
/// # Errors
///
/// Returns `401 Unauthorized` with `WWW-Authenticate: Bearer` if:
/// - the header is missing or not valid UTF-8
/// - the token does not match
///
/// The wrapped handler is not called in either case.
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/route/{tag}", post(add_route_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(req.headers())
        .ok_or_else(|| AppError::unauthorized(MISSING_HEADER_MESSAGE))?;

    if !st.registry.validate_auth(token) {
        tracing::warn!(path = %req.uri().path(), "Rejected request with invalid token");
        return Err(AppError::unauthorized(INVALID_TOKEN_MESSAGE));
    }

    Ok(next.run(req).await)
}

/// Extracts the token from the `Authorization` header.
///
/// Returns `None` when the header is absent or unreadable.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    Some(value.strip_prefix(BEARER_PREFIX).unwrap_or(value))
}
