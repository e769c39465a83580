//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::domain::repositories::RouteRegistry;

/// State cloned into each request.
///
/// Holds the registry behind its trait so handlers and tests depend only on
/// the storage contract.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<dyn RouteRegistry>,
}

impl AppState {
    pub fn new(registry: Arc<dyn RouteRegistry>) -> Self {
        Self { registry }
    }
}
