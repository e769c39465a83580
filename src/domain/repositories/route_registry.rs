//! Registry trait for tag-to-URL routes.

use std::collections::HashMap;

use async_trait::async_trait;

/// Errors returned by [`RouteRegistry`] operations.
///
/// `AlreadyExists`, `NotFound` and `Integrity` are expected outcomes the HTTP
/// layer turns into client responses. `Storage` means the backing store itself
/// failed and is never reported as a client mistake.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Link '{0}' already exists")]
    AlreadyExists(String),

    #[error("Link '{0}' does not exist")]
    NotFound(String),

    #[error("Failed to clear routes: {0} route(s) remain")]
    Integrity(usize),

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

/// Storage contract for redirect routes.
///
/// Every method copies data in and out; callers never hold references into
/// the store. Implementations must be safe to share across request tasks.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteRouteRegistry`] - SQLite-backed store
/// - [`crate::infrastructure::persistence::MemoryRouteRegistry`] - In-process map
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/registry_sqlite.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RouteRegistry: Send + Sync {
    /// Creates a new route.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::AlreadyExists`] if a route with `tag` exists.
    /// Nothing is written in that case.
    async fn add_route(&self, tag: &str, url: &str) -> Result<(), RegistryError>;

    /// Looks up the redirect target for `tag`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no route has that tag.
    async fn get_route(&self, tag: &str) -> Result<String, RegistryError>;

    /// Replaces the URL of an existing route.
    ///
    /// The lookup and the write happen atomically. A missing tag is never
    /// created.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no route has that tag.
    async fn update_route(&self, tag: &str, url: &str) -> Result<(), RegistryError>;

    /// Deletes a route.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no route has that tag.
    async fn remove_route(&self, tag: &str) -> Result<(), RegistryError>;

    /// Deletes every route, then verifies the store is empty.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Integrity`] if any route survives the delete.
    async fn clear_routes(&self) -> Result<(), RegistryError>;

    /// Returns every route as a `tag -> url` map. Iteration order is unspecified.
    async fn get_all_routes(&self) -> Result<HashMap<String, String>, RegistryError>;

    /// Checks a presented bearer token against the configured secret.
    ///
    /// Always false when no secret is configured.
    fn validate_auth(&self, token: &str) -> bool;
}
