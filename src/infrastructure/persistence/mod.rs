//! Route registry implementations.
//!
//! - [`SqliteRouteRegistry`] - SQLite store via SQLx, the production backend
//! - [`MemoryRouteRegistry`] - In-process map for tests

pub mod memory_route_registry;
pub mod schema;
pub mod sqlite_route_registry;

pub use memory_route_registry::MemoryRouteRegistry;
pub use sqlite_route_registry::{SqliteRouteRegistry, SqliteSettings};
