//! In-process implementation of the route registry.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{AuthSecret, Route};
use crate::domain::repositories::{RegistryError, RouteRegistry};

#[derive(Default)]
struct Store {
    routes: HashMap<String, Route>,
    next_id: i64,
}

/// A registry that keeps routes in a map behind an async `RwLock`.
///
/// Nothing is persisted. Each operation holds the lock for its whole
/// read-modify-write, which gives the same atomicity as the SQLite variant.
///
/// Used by handler and router tests that should not touch the filesystem.
#[derive(Default)]
pub struct MemoryRouteRegistry {
    store: RwLock<Store>,
    secret: AuthSecret,
}

impl MemoryRouteRegistry {
    pub fn new(secret: AuthSecret) -> Self {
        Self {
            store: RwLock::new(Store::default()),
            secret,
        }
    }
}

#[async_trait]
impl RouteRegistry for MemoryRouteRegistry {
    async fn add_route(&self, tag: &str, url: &str) -> Result<(), RegistryError> {
        let mut store = self.store.write().await;

        if store.routes.contains_key(tag) {
            return Err(RegistryError::AlreadyExists(tag.to_string()));
        }

        store.next_id += 1;
        let now = Utc::now();
        let route = Route::new(store.next_id, tag.to_string(), url.to_string(), now, now);
        store.routes.insert(tag.to_string(), route);

        debug!(tag, url, "Route added");
        Ok(())
    }

    async fn get_route(&self, tag: &str) -> Result<String, RegistryError> {
        self.store
            .read()
            .await
            .routes
            .get(tag)
            .map(|route| route.url.clone())
            .ok_or_else(|| RegistryError::NotFound(tag.to_string()))
    }

    async fn update_route(&self, tag: &str, url: &str) -> Result<(), RegistryError> {
        let mut store = self.store.write().await;

        let route = store
            .routes
            .get_mut(tag)
            .ok_or_else(|| RegistryError::NotFound(tag.to_string()))?;
        route.set_url(url.to_string());

        Ok(())
    }

    async fn remove_route(&self, tag: &str) -> Result<(), RegistryError> {
        self.store
            .write()
            .await
            .routes
            .remove(tag)
            .map(|_| ())
            .ok_or_else(|| RegistryError::NotFound(tag.to_string()))
    }

    async fn clear_routes(&self) -> Result<(), RegistryError> {
        let mut store = self.store.write().await;
        store.routes.clear();

        if !store.routes.is_empty() {
            return Err(RegistryError::Integrity(store.routes.len()));
        }

        Ok(())
    }

    async fn get_all_routes(&self) -> Result<HashMap<String, String>, RegistryError> {
        Ok(self
            .store
            .read()
            .await
            .routes
            .values()
            .map(|route| (route.tag.clone(), route.url.clone()))
            .collect())
    }

    fn validate_auth(&self, token: &str) -> bool {
        self.secret.verify(token)
    }
}
