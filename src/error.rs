//! HTTP-facing error type.
//!
//! Every failure leaves the API as an [`ApiResponse`] envelope with
//! `ok: false`. Client mistakes map to 4xx. Storage failures map to a generic
//! 500 whose text never includes the underlying cause.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use validator::ValidationErrors;

use crate::api::dto::envelope::ApiResponse;
use crate::domain::repositories::RegistryError;

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug)]
pub enum AppError {
    Validation { message: String },
    Unauthorized { message: String },
    NotFound { message: String },
    MethodNotAllowed { message: String },
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::MethodNotAllowed {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message }
            | AppError::Unauthorized { message }
            | AppError::NotFound { message }
            | AppError::MethodNotAllowed { message }
            | AppError::Internal { message } => message,
        }
    }

    /// Maps a registry error where a missing tag is the caller's fault
    /// rather than a missing resource (`PUT` on an unknown tag).
    pub fn from_registry_rejecting_missing(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound(_) => AppError::bad_request(err.to_string()),
            other => other.into(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message(), self.status())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let unauthorized = matches!(self, AppError::Unauthorized { .. });

        let body = match self {
            AppError::Validation { message }
            | AppError::Unauthorized { message }
            | AppError::NotFound { message }
            | AppError::MethodNotAllowed { message }
            | AppError::Internal { message } => ApiResponse::failure(message),
        };

        let mut response = (status, Json(body)).into_response();
        if unauthorized {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                header::HeaderValue::from_static("Bearer"),
            );
        }
        response
    }
}

impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::AlreadyExists(_) => AppError::bad_request(err.to_string()),
            RegistryError::NotFound(_) => AppError::not_found(err.to_string()),
            RegistryError::Integrity(_) => {
                tracing::error!(error = %err, "Registry integrity check failed");
                AppError::internal(err.to_string())
            }
            RegistryError::Storage(e) => {
                tracing::error!(error = %e, "Registry storage failure");
                AppError::internal(INTERNAL_ERROR_MESSAGE)
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::bad_request(rejection.body_text())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .next()
            .unwrap_or_else(|| "Invalid request".to_string());

        AppError::bad_request(message)
    }
}
