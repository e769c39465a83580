//! Helpers shared by the HTTP layer, the registries and the admin CLI.
//!
//! - [`url_check`] - Redirect target validation
//! - [`db_error`] - Database error classification

pub mod db_error;
pub mod url_check;
