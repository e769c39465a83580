//! HTTP request handlers.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod redirect;
pub mod routes;

pub use health::{fallback_handler, heartbeat_handler, method_not_allowed_handler};
pub use redirect::{redirect_handler, which_handler};
pub use routes::{
    LIST_ALIAS_TAG, add_route_handler, delete_route_handler, list_routes_handler,
    route_get_handler, update_route_handler,
};
