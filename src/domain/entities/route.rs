//! Route entity representing a tag-to-URL mapping.

use chrono::{DateTime, Utc};

/// A stored redirect route.
///
/// `id` and the timestamps are storage bookkeeping. Registry callers only ever
/// see `tag` and `url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub id: i64,
    pub tag: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Route {
    /// Creates a new Route instance.
    pub fn new(
        id: i64,
        tag: String,
        url: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            tag,
            url,
            created_at,
            updated_at,
        }
    }

    /// Replaces the redirect target and bumps `updated_at`.
    ///
    /// The tag is fixed at creation and has no setter.
    pub fn set_url(&mut self, url: String) {
        self.url = url;
        self.updated_at = Utc::now();
    }
}
