//! Infrastructure layer for external integrations.
//!
//! Implements the storage contracts defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - SQLite and in-memory route registries
//! - [`route_file`] - YAML route files for bulk import
//! - [`heartbeat`] - Liveness check client used by the admin tool

pub mod heartbeat;
pub mod persistence;
pub mod route_file;
