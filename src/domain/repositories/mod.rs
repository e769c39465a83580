//! Repository trait definitions for the domain layer.
//!
//! Traits define the storage contract; implementations live in
//! `crate::infrastructure::persistence`. A `mockall` mock is generated for
//! unit tests.
//!
//! # Available Repositories
//!
//! - [`RouteRegistry`] - Route CRUD, bulk clear and token validation
//!
//! # Testing
//!
//! See integration tests in `tests/registry_*.rs` for usage examples.

pub mod route_registry;

pub use route_registry::{RegistryError, RouteRegistry};

#[cfg(test)]
pub use route_registry::MockRouteRegistry;
