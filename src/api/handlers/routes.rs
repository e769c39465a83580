//! Handlers for route management endpoints (list, create, update, delete).
//!
//! All of them sit behind [`crate::api::middleware::auth`].

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};

use crate::api::dto::envelope::ApiResponse;
use crate::api::dto::route::RouteRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Tag under `/route/{tag}` that `GET` treats as the listing alias.
pub const LIST_ALIAS_TAG: &str = "all";

/// Lists every route.
///
/// # Endpoint
///
/// `GET /all` (also `GET /route/all`, see [`route_get_handler`])
///
/// # Response
///
/// ```json
/// {
///   "ok": true,
///   "msg": "All routes",
///   "routes": { "docs": "https://example.com/docs" },
///   "count": 1
/// }
/// ```
pub async fn list_routes_handler(State(state): State<AppState>) -> Result<ApiResponse, AppError> {
    let routes = state.registry.get_all_routes().await?;

    Ok(ApiResponse::message("All routes").with_routes(routes))
}

/// Creates a route.
///
/// # Endpoint
///
/// `POST /route/{tag}`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/docs" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if:
/// - the body is not valid JSON
/// - `url` is missing or does not start with `http://` / `https://`
/// - the tag already exists (the stored URL is left untouched)
pub async fn add_route_handler(
    tag: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
    payload: Result<Json<RouteRequest>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    let Path(tag) = tag?;
    let Json(payload) = payload?;
    let url = payload.into_url()?;

    state.registry.add_route(&tag, &url).await?;

    Ok(ApiResponse::message("Link added"))
}

/// Points an existing route at a new URL.
///
/// # Endpoint
///
/// `PUT /route/{tag}`
///
/// # Errors
///
/// Same validation as [`add_route_handler`]. An unknown tag is a 400 and is
/// not created.
pub async fn update_route_handler(
    tag: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
    payload: Result<Json<RouteRequest>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    let Path(tag) = tag?;
    let Json(payload) = payload?;
    let url = payload.into_url()?;

    state
        .registry
        .update_route(&tag, &url)
        .await
        .map_err(AppError::from_registry_rejecting_missing)?;

    Ok(ApiResponse::message("Link updated"))
}

/// Deletes a route.
///
/// # Endpoint
///
/// `DELETE /route/{tag}`
///
/// # Errors
///
/// Returns 404 Not Found if the tag does not exist.
pub async fn delete_route_handler(
    tag: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<ApiResponse, AppError> {
    let Path(tag) = tag?;
    state.registry.remove_route(&tag).await?;

    Ok(ApiResponse::message("Link deleted"))
}

/// `GET /route/{tag}`.
///
/// Only `GET /route/all` is defined, as an alias of [`list_routes_handler`].
/// Living on the `{tag}` route keeps `POST`/`PUT`/`DELETE /route/all` working
/// for a route tagged `all`. Any other tag answers 405.
pub async fn route_get_handler(
    tag: Result<Path<String>, PathRejection>,
    state: State<AppState>,
) -> Result<ApiResponse, AppError> {
    let Path(tag) = tag?;
    if tag != LIST_ALIAS_TAG {
        return Err(AppError::method_not_allowed("Method not allowed"));
    }

    list_routes_handler(state).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockRouteRegistry;
    use axum::{Router, http::StatusCode, routing::post};
    use axum_test::TestServer;
    use serde_json::json;
    use std::sync::Arc;

    fn server(mock: MockRouteRegistry) -> TestServer {
        let app = Router::new()
            .route(
                "/route/{tag}",
                post(add_route_handler)
                    .put(update_route_handler)
                    .delete(delete_route_handler)
                    .get(route_get_handler),
            )
            .with_state(AppState::new(Arc::new(mock)));
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_invalid_url_never_reaches_registry() {
        let mut mock = MockRouteRegistry::new();
        mock.expect_add_route().times(0);
        mock.expect_update_route().times(0);

        let server = server(mock);

        server
            .post("/route/x")
            .json(&json!({ "url": "not-a-url" }))
            .await
            .assert_status_bad_request();
        server
            .put("/route/x")
            .json(&json!({ "url": "ftp://example.com" }))
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_unparsable_body_is_hard_400() {
        let mut mock = MockRouteRegistry::new();
        mock.expect_add_route().times(0);

        let response = server(mock).post("/route/x").text("{ not json").await;

        response.assert_status_bad_request();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["ok"], false);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_add_passes_tag_and_url() {
        let mut mock = MockRouteRegistry::new();
        mock.expect_add_route()
            .withf(|tag, url| tag == "docs" && url == "https://example.com/docs")
            .times(1)
            .returning(|_, _| Ok(()));

        let response = server(mock)
            .post("/route/docs")
            .json(&json!({ "url": "https://example.com/docs" }))
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<serde_json::Value>(),
            json!({ "ok": true, "msg": "Link added" })
        );
    }

    #[tokio::test]
    async fn test_get_route_all_lists() {
        let mut mock = MockRouteRegistry::new();
        mock.expect_get_all_routes()
            .times(1)
            .returning(|| Ok([("a".to_string(), "https://a.com".to_string())].into()));

        let response = server(mock).get("/route/all").await;

        response.assert_status_ok();
        assert_eq!(response.json::<serde_json::Value>()["count"], 1);
    }

    #[tokio::test]
    async fn test_get_other_tag_is_405() {
        let mut mock = MockRouteRegistry::new();
        mock.expect_get_all_routes().times(0);

        let response = server(mock).get("/route/docs").await;

        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.json::<serde_json::Value>()["ok"], false);
    }
}
