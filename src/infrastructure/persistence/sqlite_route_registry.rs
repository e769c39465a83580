//! SQLite implementation of the route registry.

use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{FromRow, SqlitePool};
use tracing::{debug, error, info};

use super::schema::SQLITE_INIT;
use crate::domain::entities::{AuthSecret, Route};
use crate::domain::repositories::{RegistryError, RouteRegistry};
use crate::utils::db_error::is_unique_violation;

/// Connection pool settings for [`SqliteRouteRegistry::connect_with`].
#[derive(Debug, Clone)]
pub struct SqliteSettings {
    /// Maximum number of pooled connections.
    pub max_connections: u32,
    /// How long a statement waits on a locked database before failing.
    pub busy_timeout: Duration,
}

impl Default for SqliteSettings {
    fn default() -> Self {
        Self {
            max_connections: 5,
            busy_timeout: Duration::from_secs(5),
        }
    }
}

#[derive(Debug, FromRow)]
struct RouteRow {
    id: i64,
    tag: String,
    url: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<RouteRow> for Route {
    fn from(row: RouteRow) -> Self {
        Route::new(row.id, row.tag, row.url, row.created_at, row.updated_at)
    }
}

/// SQLite-backed registry.
///
/// The pool is opened once and shared by every request. Writers are
/// serialized by SQLite itself; update and delete each run in their own
/// transaction.
pub struct SqliteRouteRegistry {
    pool: SqlitePool,
    secret: AuthSecret,
}

impl SqliteRouteRegistry {
    /// Opens (or creates) the database at `location` with default settings.
    ///
    /// `location` is either a plain file path or a `sqlite:` URL.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Storage`] if the file cannot be opened or the
    /// schema cannot be applied.
    pub async fn connect(location: &str, secret: AuthSecret) -> Result<Self, RegistryError> {
        Self::connect_with(location, secret, SqliteSettings::default()).await
    }

    /// Opens (or creates) the database at `location` with explicit pool settings.
    ///
    /// # Errors
    ///
    /// See [`Self::connect`].
    pub async fn connect_with(
        location: &str,
        secret: AuthSecret,
        settings: SqliteSettings,
    ) -> Result<Self, RegistryError> {
        let connect_opts = if location.starts_with("sqlite:") {
            SqliteConnectOptions::from_str(location)?
        } else {
            SqliteConnectOptions::new().filename(location)
        }
        .create_if_missing(true)
        .busy_timeout(settings.busy_timeout)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(settings.max_connections)
            .connect_with(connect_opts)
            .await?;

        apply_schema(&pool).await?;

        info!(location, "Route registry opened");

        Ok(Self::from_pool(pool, secret))
    }

    /// Wraps an existing pool. The schema is assumed to be in place.
    pub fn from_pool(pool: SqlitePool, secret: AuthSecret) -> Self {
        Self { pool, secret }
    }

    /// Returns the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Closes every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl RouteRegistry for SqliteRouteRegistry {
    async fn add_route(&self, tag: &str, url: &str) -> Result<(), RegistryError> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO routes (tag, url, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(tag) DO NOTHING
            "#,
        )
        .bind(tag)
        .bind(url)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                RegistryError::AlreadyExists(tag.to_string())
            } else {
                log_storage_error("add_route", &e);
                RegistryError::Storage(e)
            }
        })?;

        if result.rows_affected() == 0 {
            return Err(RegistryError::AlreadyExists(tag.to_string()));
        }

        info!(tag, url, "Route added");
        Ok(())
    }

    async fn get_route(&self, tag: &str) -> Result<String, RegistryError> {
        let url: Option<String> = sqlx::query_scalar("SELECT url FROM routes WHERE tag = ?")
            .bind(tag)
            .fetch_optional(&self.pool)
            .await
            .inspect_err(|e| log_storage_error("get_route", e))?;

        match url {
            Some(url) => {
                debug!(tag, url, "Found route");
                Ok(url)
            }
            None => Err(RegistryError::NotFound(tag.to_string())),
        }
    }

    async fn update_route(&self, tag: &str, url: &str) -> Result<(), RegistryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .inspect_err(|e| log_storage_error("update_route", e))?;

        // The write is the first statement, so the transaction holds the write
        // lock before the row is located.
        let result = sqlx::query("UPDATE routes SET url = ?, updated_at = ? WHERE tag = ?")
            .bind(url)
            .bind(Utc::now())
            .bind(tag)
            .execute(&mut *tx)
            .await
            .inspect_err(|e| log_storage_error("update_route", e))?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(RegistryError::NotFound(tag.to_string()));
        }

        tx.commit()
            .await
            .inspect_err(|e| log_storage_error("update_route", e))?;

        info!(tag, url, "Route updated");
        Ok(())
    }

    async fn remove_route(&self, tag: &str) -> Result<(), RegistryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .inspect_err(|e| log_storage_error("remove_route", e))?;

        let result = sqlx::query("DELETE FROM routes WHERE tag = ?")
            .bind(tag)
            .execute(&mut *tx)
            .await
            .inspect_err(|e| log_storage_error("remove_route", e))?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(RegistryError::NotFound(tag.to_string()));
        }

        tx.commit()
            .await
            .inspect_err(|e| log_storage_error("remove_route", e))?;

        info!(tag, "Route removed");
        Ok(())
    }

    async fn clear_routes(&self) -> Result<(), RegistryError> {
        let deleted = sqlx::query("DELETE FROM routes")
            .execute(&self.pool)
            .await
            .inspect_err(|e| log_storage_error("clear_routes", e))?
            .rows_affected();

        let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM routes")
            .fetch_one(&self.pool)
            .await
            .inspect_err(|e| log_storage_error("clear_routes", e))?;

        if remaining > 0 {
            error!(remaining, "Routes left behind after clear");
            return Err(RegistryError::Integrity(remaining as usize));
        }

        info!(deleted, "Routes cleared");
        Ok(())
    }

    async fn get_all_routes(&self) -> Result<HashMap<String, String>, RegistryError> {
        let rows = sqlx::query_as::<_, RouteRow>(
            "SELECT id, tag, url, created_at, updated_at FROM routes",
        )
        .fetch_all(&self.pool)
        .await
        .inspect_err(|e| log_storage_error("get_all_routes", e))?;

        Ok(rows
            .into_iter()
            .map(Route::from)
            .map(|route| (route.tag, route.url))
            .collect())
    }

    fn validate_auth(&self, token: &str) -> bool {
        self.secret.verify(token)
    }
}

fn log_storage_error(operation: &'static str, e: &sqlx::Error) {
    error!(operation, error = %e, "Route store query failed");
}

async fn apply_schema(pool: &SqlitePool) -> Result<(), RegistryError> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}
