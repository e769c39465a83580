//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, optionally overridden by command
//! line flags, and validated before the server starts.
//!
//! ## Required Variables
//!
//! - `GOLINKS_SECRET_KEY` - Bearer secret for the management API (non-empty)
//!
//! ## Optional Variables
//!
//! - `GOLINKS_DATABASE` - SQLite file path or `sqlite:` URL (default: `links.db`)
//! - `GOLINKS_HOST` - Bind host (default: `0.0.0.0`)
//! - `GOLINKS_PORT` - Bind port (default: `8080`)
//! - `GOLINKS_DEBUG` - `true`/`1` enables debug logging (default: `false`)
//! - `GOLINKS_ROUTES` - YAML route file imported at startup (default: none)
//! - `RUST_LOG` - Log filter (default: `info`, or `debug` in debug mode)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5, min: 1)
//! - `DB_BUSY_TIMEOUT` - Seconds to wait on a locked database (default: 5, min: 1)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::domain::entities::AuthSecret;
use crate::infrastructure::persistence::SqliteSettings;

pub const DEFAULT_DATABASE: &str = "links.db";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database: String,
    pub secret_key: String,
    pub host: String,
    pub port: u16,
    pub debug: bool,
    /// Route file seeded at startup. Existing tags are left alone.
    pub routes_file: Option<String>,
    /// Explicit `RUST_LOG` value, if set.
    pub log_filter: Option<String>,
    pub log_format: String,
    pub db_max_connections: u32,
    /// Seconds (`DB_BUSY_TIMEOUT`).
    pub db_busy_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `GOLINKS_SECRET_KEY` is missing or a numeric
    /// variable cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let database = env::var("GOLINKS_DATABASE").unwrap_or_else(|_| DEFAULT_DATABASE.into());
        let secret_key =
            env::var("GOLINKS_SECRET_KEY").context("GOLINKS_SECRET_KEY must be set")?;
        let host = env::var("GOLINKS_HOST").unwrap_or_else(|_| DEFAULT_HOST.into());

        let port = match env::var("GOLINKS_PORT") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("GOLINKS_PORT must be a port number, got '{v}'"))?,
            Err(_) => DEFAULT_PORT,
        };

        let debug = env::var("GOLINKS_DEBUG")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        let routes_file = env::var("GOLINKS_ROUTES").ok().filter(|v| !v.is_empty());
        let log_filter = env::var("RUST_LOG").ok().filter(|v| !v.is_empty());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let db_busy_timeout = env::var("DB_BUSY_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Ok(Self {
            database,
            secret_key,
            host,
            port,
            debug,
            routes_file,
            log_filter,
            log_format,
            db_max_connections,
            db_busy_timeout,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `secret_key` is empty
    /// - `database` is empty
    /// - `log_format` is not `text` or `json`
    /// - pool settings are zero
    pub fn validate(&self) -> Result<()> {
        if self.secret_key.is_empty() {
            anyhow::bail!("GOLINKS_SECRET_KEY must not be empty");
        }

        if self.database.is_empty() {
            anyhow::bail!("GOLINKS_DATABASE must not be empty");
        }

        if self.host.is_empty() {
            anyhow::bail!("GOLINKS_HOST must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_busy_timeout == 0 {
            anyhow::bail!("DB_BUSY_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Applies command line overrides on top of the environment.
    pub fn apply_overrides(&mut self, database: Option<String>, port: Option<u16>, debug: bool) {
        if let Some(database) = database {
            self.database = database;
        }
        if let Some(port) = port {
            self.port = port;
        }
        if debug {
            self.debug = true;
        }
    }

    /// `host:port` for the listener.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Log filter directive: `RUST_LOG` if set, otherwise by debug mode.
    pub fn log_directive(&self) -> &str {
        match &self.log_filter {
            Some(filter) => filter,
            None if self.debug => "debug",
            None => "info",
        }
    }

    pub fn auth_secret(&self) -> AuthSecret {
        AuthSecret::new(&self.secret_key)
    }

    pub fn sqlite_settings(&self) -> SqliteSettings {
        SqliteSettings {
            max_connections: self.db_max_connections,
            busy_timeout: Duration::from_secs(self.db_busy_timeout),
        }
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr());
        tracing::info!("  Database: {}", self.database);
        tracing::info!("  Secret key: {}", mask_secret(&self.secret_key));
        tracing::info!("  Debug: {}", self.debug);
        if let Some(routes_file) = &self.routes_file {
            tracing::info!("  Route file: {}", routes_file);
        }
        tracing::info!("  Log filter: {}", self.log_directive());
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Pool: {} connections, {}s busy timeout",
            self.db_max_connections,
            self.db_busy_timeout
        );
    }
}

fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}

/// Masks a secret for logging, keeping only its length visible.
///
/// - `""` → `<unset>`
/// - `"s3cr3t"` → `****** (6 chars)`
fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return "<unset>".to_string();
    }
    let len = secret.chars().count();
    format!("{} ({len} chars)", "*".repeat(len.min(8)))
}
