//! API route configuration.
//!
//! Every route here requires Bearer token authentication via
//! [`crate::api::middleware::auth`]; the caller attaches it as a
//! `route_layer` so unmatched paths are not turned into 401s.

use crate::api::handlers::{
    add_route_handler, delete_route_handler, list_routes_handler, route_get_handler,
    update_route_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Routes that read the full table or mutate it.
///
/// # Endpoints
///
/// - `GET    /all`          - List every route with a count
/// - `GET    /route/all`    - Same as `/all` (the `{tag}` route with tag `all`)
/// - `POST   /route/{tag}`  - Create a route
/// - `PUT    /route/{tag}`  - Change a route's URL
/// - `DELETE /route/{tag}`  - Delete a route
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/all", get(list_routes_handler))
        .route(
            "/route/{tag}",
            get(route_get_handler)
                .post(add_route_handler)
                .put(update_route_handler)
                .delete(delete_route_handler),
        )
}
