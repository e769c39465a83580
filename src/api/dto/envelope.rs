//! Uniform JSON envelope shared by every API response.

use std::collections::HashMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Response body used by all JSON endpoints.
///
/// `ok` is always present. The remaining fields are omitted when unset:
///
/// ```json
/// { "ok": true, "msg": "Link added" }
/// { "ok": true, "url": "https://example.com/docs" }
/// { "ok": true, "msg": "All routes", "routes": { "docs": "https://..." }, "count": 1 }
/// { "ok": false, "error": "Link 'docs' does not exist" }
/// ```
#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct ApiResponse {
    pub ok: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub routes: Option<HashMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl ApiResponse {
    /// A bare `{ "ok": true }`.
    pub fn success() -> Self {
        Self {
            ok: true,
            ..Self::default()
        }
    }

    /// `{ "ok": true, "msg": ... }`.
    pub fn message(msg: impl Into<String>) -> Self {
        Self {
            msg: Some(msg.into()),
            ..Self::success()
        }
    }

    /// `{ "ok": false, "error": ... }`.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Attaches the route map and its size.
    pub fn with_routes(mut self, routes: HashMap<String, String>) -> Self {
        self.count = Some(routes.len());
        self.routes = Some(routes);
        self
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_serializes_only_ok() {
        let value = serde_json::to_value(ApiResponse::success()).unwrap();
        assert_eq!(value, json!({ "ok": true }));
    }

    #[test]
    fn test_message() {
        let value = serde_json::to_value(ApiResponse::message("Link added")).unwrap();
        assert_eq!(value, json!({ "ok": true, "msg": "Link added" }));
    }

    #[test]
    fn test_failure() {
        let value = serde_json::to_value(ApiResponse::failure("Invalid URL")).unwrap();
        assert_eq!(value, json!({ "ok": false, "error": "Invalid URL" }));
    }

    #[test]
    fn test_with_url() {
        let value =
            serde_json::to_value(ApiResponse::success().with_url("https://example.com")).unwrap();
        assert_eq!(value, json!({ "ok": true, "url": "https://example.com" }));
    }

    #[test]
    fn test_with_routes_sets_count() {
        let routes = HashMap::from([
            ("a".to_string(), "https://a.com".to_string()),
            ("b".to_string(), "https://b.com".to_string()),
        ]);

        let value =
            serde_json::to_value(ApiResponse::message("All routes").with_routes(routes)).unwrap();

        assert_eq!(value["ok"], true);
        assert_eq!(value["msg"], "All routes");
        assert_eq!(value["count"], 2);
        assert_eq!(value["routes"]["a"], "https://a.com");
        assert_eq!(value["routes"]["b"], "https://b.com");
    }

    #[test]
    fn test_empty_routes_still_reported() {
        let value = serde_json::to_value(ApiResponse::success().with_routes(HashMap::new())).unwrap();
        assert_eq!(value, json!({ "ok": true, "routes": {}, "count": 0 }));
    }
}
