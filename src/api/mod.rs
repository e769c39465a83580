//! HTTP API layer.
//!
//! Translates HTTP requests into registry operations and renders the JSON
//! envelope or redirect.
//!
//! # Modules
//!
//! - [`dto`] - Request/response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authentication and tracing middleware
//! - [`routes`] - Protected route table

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
