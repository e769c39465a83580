//! SQL DDL applied when a SQLite registry is opened.

/// Idempotent schema for the route store.
///
/// `tag` carries a UNIQUE constraint so concurrent inserts of the same tag
/// cannot both succeed. Timestamps are RFC3339 text.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS routes (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    tag TEXT NOT NULL UNIQUE,
    url TEXT NOT NULL,
    created_at TEXT NOT NULL, -- RFC3339
    updated_at TEXT NOT NULL  -- RFC3339
);
"#;
