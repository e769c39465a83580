//! DTO for the route create/update endpoints.

use serde::Deserialize;
use validator::Validate;

use crate::error::AppError;
use crate::utils::url_check::validate_http_url;

/// Message returned when the body has no `url`.
pub const URL_MISSING_MESSAGE: &str = "url not specified";

/// Request body for `POST` and `PUT /route/{tag}`.
///
/// ```json
/// { "url": "https://example.com/docs" }
/// ```
///
/// `url` is optional at the serde level so that a missing field produces the
/// same 400 envelope as an invalid one instead of a deserialization error.
#[derive(Debug, Deserialize, Validate)]
pub struct RouteRequest {
    #[validate(
        required(message = "url not specified"),
        custom(function = "validate_http_url")
    )]
    pub url: Option<String>,
}

impl RouteRequest {
    /// Validates the body and returns the target URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `url` is missing or not an
    /// HTTP(S) URL.
    pub fn into_url(self) -> Result<String, AppError> {
        self.validate()?;
        self.url
            .ok_or_else(|| AppError::bad_request(URL_MISSING_MESSAGE))
    }
}
