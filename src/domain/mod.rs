//! Domain layer containing entities and storage contracts.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Storage trait definitions
//!
//! The domain layer has no dependency on the HTTP layer.
//! Handlers depend on [`repositories::RouteRegistry`] only, never on a
//! concrete store.

pub mod entities;
pub mod repositories;
