//! Core domain entities.
//!
//! Entities are plain data structures without storage or transport concerns.
//!
//! - [`Route`] - A tag-to-URL mapping as kept by a registry
//! - [`AuthSecret`] - The bearer secret guarding mutating operations

pub mod auth_secret;
pub mod route;

pub use auth_secret::AuthSecret;
pub use route::Route;
