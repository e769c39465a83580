//! YAML route files for bulk seeding a registry.
//!
//! ```yaml
//! routes:
//!   docs: https://example.com/docs
//!   wiki: https://wiki.example.com
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};

use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::repositories::{RegistryError, RouteRegistry};
use crate::utils::url_check::is_http_url;

/// Parsed route file. Entries are kept sorted by tag.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct RouteFile {
    #[serde(default)]
    pub routes: BTreeMap<String, String>,
}

impl RouteFile {
    /// Parses a route file.
    ///
    /// # Errors
    ///
    /// Returns the YAML error if the text is not a mapping with a `routes`
    /// table of string values.
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// Reads and parses a route file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Unable to open {}", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("Unable to parse {}", path.display()))
    }
}

/// Outcome of [`import_routes`], by tag.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub added: Vec<String>,
    pub updated: Vec<String>,
    /// Existing tags left alone because overwriting was off.
    pub skipped: Vec<String>,
    /// Empty tags or targets that are not HTTP(S) URLs.
    pub invalid: Vec<String>,
}

/// Writes every entry of `file` into `registry`.
///
/// Invalid entries are reported, not fatal. An existing tag is updated when
/// `overwrite` is set and skipped otherwise.
///
/// # Errors
///
/// Stops at the first storage failure.
pub async fn import_routes(
    registry: &dyn RouteRegistry,
    file: &RouteFile,
    overwrite: bool,
) -> Result<ImportSummary, RegistryError> {
    let mut summary = ImportSummary::default();

    for (tag, url) in &file.routes {
        if tag.is_empty() || !is_http_url(url) {
            warn!(tag, url, "Skipping invalid route entry");
            summary.invalid.push(tag.clone());
            continue;
        }

        match registry.add_route(tag, url).await {
            Ok(()) => summary.added.push(tag.clone()),
            Err(RegistryError::AlreadyExists(_)) if overwrite => {
                registry.update_route(tag, url).await?;
                summary.updated.push(tag.clone());
            }
            Err(RegistryError::AlreadyExists(_)) => summary.skipped.push(tag.clone()),
            Err(e) => return Err(e),
        }
    }

    info!(
        added = summary.added.len(),
        updated = summary.updated.len(),
        skipped = summary.skipped.len(),
        invalid = summary.invalid.len(),
        "Route file imported"
    );

    Ok(summary)
}
