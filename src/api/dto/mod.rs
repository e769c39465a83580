//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs use Serde for deserialization and `validator` for input
//! validation. Every JSON response goes through [`envelope::ApiResponse`].

pub mod envelope;
pub mod route;
