//! # golinks
//!
//! A small tag-to-URL redirector with an authenticated management API, built
//! with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Route entity, bearer secret and the registry trait
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite and in-memory registries, route files, heartbeat client
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - `GET /{tag}` answers with a 307 redirect to the stored URL
//! - Public lookup (`/which/{tag}`) and liveness check (`/heartbeat`)
//! - Bearer-token protected create, update, delete and listing
//! - Admin CLI for offline route management, YAML import and health checks
//!
//! ## Quick Start
//!
//! ```bash
//! export GOLINKS_SECRET_KEY="$(cargo run -q --bin admin -- secret generate | sed -n 's/.*=//p')"
//! cargo run -- --database links.db --port 8080
//!
//! curl -X POST -H "Authorization: Bearer $GOLINKS_SECRET_KEY" \
//!      -H 'Content-Type: application/json' \
//!      -d '{"url":"https://example.com/docs"}' http://localhost:8080/route/docs
//! curl -i http://localhost:8080/docs
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::api::dto::envelope::ApiResponse;
    pub use crate::domain::entities::{AuthSecret, Route};
    pub use crate::domain::repositories::{RegistryError, RouteRegistry};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{MemoryRouteRegistry, SqliteRouteRegistry};
    pub use crate::routes::app_router;
    pub use crate::state::AppState;
}
