//! CLI administration tool for golinks.
//!
//! Manages routes directly in the SQLite file, without a running server and
//! without the bearer secret.
//!
//! # Usage
//!
//! ```bash
//! # Add, change and remove routes
//! cargo run --bin admin -- route add docs https://example.com/docs
//! cargo run --bin admin -- route update docs https://example.com/v2
//! cargo run --bin admin -- route delete docs
//!
//! # Inspect routes
//! cargo run --bin admin -- route which docs
//! cargo run --bin admin -- route list
//!
//! # Remove everything (asks first unless -y)
//! cargo run --bin admin -- route clear
//!
//! # Seed from a YAML file (`routes: { tag: url }`)
//! cargo run --bin admin -- route import links.yaml --overwrite
//!
//! # Check a running server
//! cargo run --bin admin -- heartbeat --url http://localhost:8080
//!
//! # Generate a value for GOLINKS_SECRET_KEY
//! cargo run --bin admin -- secret generate
//!
//! # Check the database file
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `GOLINKS_DATABASE` (default `links.db`): SQLite file, overridden by `--database`
//! - `GOLINKS_PORT` (default `8080`): port used by `heartbeat` when `--url` is absent

use golinks::config::{DEFAULT_DATABASE, DEFAULT_PORT};
use golinks::domain::entities::AuthSecret;
use golinks::domain::repositories::{RegistryError, RouteRegistry};
use golinks::infrastructure::heartbeat::check_heartbeat;
use golinks::infrastructure::persistence::SqliteRouteRegistry;
use golinks::infrastructure::route_file::{RouteFile, import_routes};
use golinks::utils::url_check::{INVALID_URL_MESSAGE, is_http_url};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::time::Duration;

/// CLI tool for managing golinks routes.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQLite database file (overrides GOLINKS_DATABASE)
    #[arg(long, global = true)]
    database: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage routes
    Route {
        #[command(subcommand)]
        action: RouteAction,
    },

    /// Manage the API secret
    Secret {
        #[command(subcommand)]
        action: SecretAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Check that a running server answers /heartbeat
    Heartbeat {
        /// Server base URL (default: http://localhost:$GOLINKS_PORT)
        #[arg(long)]
        url: Option<String>,

        /// Seconds to wait for an answer
        #[arg(long, default_value_t = 5)]
        timeout: u64,
    },
}

#[derive(Subcommand)]
enum RouteAction {
    /// Create a route
    Add { tag: String, url: String },

    /// Point an existing route at a new URL
    Update { tag: String, url: String },

    /// Delete a route
    Delete { tag: String },

    /// Show where a tag points
    Which { tag: String },

    /// List all routes
    List,

    /// Import routes from a YAML file
    Import {
        file: String,

        /// Replace URLs of tags that already exist
        #[arg(long)]
        overwrite: bool,
    },

    /// Delete every route
    Clear {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum SecretAction {
    /// Print a new random secret
    Generate,
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Neither touches the database.
    match &cli.command {
        Commands::Secret { action } => {
            handle_secret_action(action);
            return Ok(());
        }
        Commands::Heartbeat { url, timeout } => {
            return heartbeat(url.clone(), *timeout).await;
        }
        _ => {}
    }

    let database = cli
        .database
        .or_else(|| std::env::var("GOLINKS_DATABASE").ok())
        .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

    let registry = SqliteRouteRegistry::connect(&database, AuthSecret::disabled())
        .await
        .with_context(|| format!("Failed to open database '{database}'"))?;

    let result = match cli.command {
        Commands::Route { action } => handle_route_action(action, &registry).await,
        Commands::Db { action } => handle_db_action(action, &registry, &database).await,
        Commands::Secret { .. } | Commands::Heartbeat { .. } => Ok(()),
    };

    registry.close().await;
    result
}

/// Dispatches route management commands.
async fn handle_route_action(action: RouteAction, registry: &SqliteRouteRegistry) -> Result<()> {
    match action {
        RouteAction::Add { tag, url } => {
            ensure_http_url(&url)?;
            registry
                .add_route(&tag, &url)
                .await
                .map_err(|e| describe("Failed to add route", e))?;
            println!("{} {} → {}", "✅ Added".green().bold(), tag.cyan(), url);
        }
        RouteAction::Update { tag, url } => {
            ensure_http_url(&url)?;
            registry
                .update_route(&tag, &url)
                .await
                .map_err(|e| describe("Failed to update route", e))?;
            println!("{} {} → {}", "✅ Updated".green().bold(), tag.cyan(), url);
        }
        RouteAction::Delete { tag } => {
            registry
                .remove_route(&tag)
                .await
                .map_err(|e| describe("Failed to delete route", e))?;
            println!("{} {}", "✅ Deleted".green().bold(), tag.cyan());
        }
        RouteAction::Which { tag } => {
            let url = registry
                .get_route(&tag)
                .await
                .map_err(|e| describe("Lookup failed", e))?;
            println!("{}", url);
        }
        RouteAction::List => list_routes(registry).await?,
        RouteAction::Import { file, overwrite } => {
            import_file(registry, &file, overwrite).await?
        }
        RouteAction::Clear { yes } => clear_routes(registry, yes).await?,
    }

    Ok(())
}

/// Lists all routes sorted by tag.
///
/// # Output Format
///
/// ```text
/// 📋 Routes
///
///   Tag                  URL
///   ─────────────────────────────────────────────────────────
///   docs                 https://example.com/docs
///
///   Total: 1
/// ```
async fn list_routes(registry: &SqliteRouteRegistry) -> Result<()> {
    println!("{}", "📋 Routes".bright_blue().bold());
    println!();

    let routes = registry
        .get_all_routes()
        .await
        .map_err(|e| describe("Failed to list routes", e))?;

    if routes.is_empty() {
        println!("{}", "  No routes found".yellow());
        println!();
        println!(
            "  Create one with: {} admin route add <tag> <url>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    let mut routes: Vec<_> = routes.into_iter().collect();
    routes.sort();

    println!(
        "  {:<20} {}",
        "Tag".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(60).bright_black());

    for (tag, url) in &routes {
        println!("  {:<20} {}", tag.cyan(), url);
    }

    println!();
    println!(
        "  Total: {}",
        routes.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Deletes every route, asking first (default: No) unless `skip_confirm`.
async fn clear_routes(registry: &SqliteRouteRegistry, skip_confirm: bool) -> Result<()> {
    let count = registry
        .get_all_routes()
        .await
        .map_err(|e| describe("Failed to count routes", e))?
        .len();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete all {count} routes?"))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    registry
        .clear_routes()
        .await
        .map_err(|e| describe("Failed to clear routes", e))?;

    println!(
        "{} {} routes removed",
        "✅ Cleared".green().bold(),
        count.to_string().bright_white()
    );

    Ok(())
}

/// Imports a route file and prints what happened to each tag.
async fn import_file(registry: &SqliteRouteRegistry, path: &str, overwrite: bool) -> Result<()> {
    let file = RouteFile::load(path)?;

    println!(
        "{} {} entries from {}",
        "📥 Importing".bright_blue().bold(),
        file.routes.len(),
        path.bright_white()
    );

    let summary = import_routes(registry, &file, overwrite)
        .await
        .map_err(|e| describe("Import failed", e))?;

    for tag in &summary.invalid {
        println!("  {} {}", "invalid".red(), tag);
    }
    for tag in &summary.skipped {
        println!("  {} {} (use --overwrite)", "exists ".yellow(), tag);
    }

    println!(
        "{} {} added, {} updated, {} skipped, {} invalid",
        "✅ Done".green().bold(),
        summary.added.len().to_string().bright_green(),
        summary.updated.len(),
        summary.skipped.len(),
        summary.invalid.len()
    );

    Ok(())
}

/// Exits non-zero unless the server at `url` reports healthy.
async fn heartbeat(url: Option<String>, timeout: u64) -> Result<()> {
    let url = url.unwrap_or_else(|| {
        let port = std::env::var("GOLINKS_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        format!("http://localhost:{port}")
    });

    check_heartbeat(&url, Duration::from_secs(timeout))
        .await
        .with_context(|| format!("{} is not healthy", url))?;

    println!("{} {}", "✅ Healthy".green().bold(), url);
    Ok(())
}

fn handle_secret_action(action: &SecretAction) {
    match action {
        SecretAction::Generate => {
            let secret = generate_secret();
            println!("{}", "🔑 New secret".bright_blue().bold());
            println!();
            println!("  GOLINKS_SECRET_KEY={}", secret.bright_yellow().bold());
            println!();
            println!("{}", "Send it with each management request:".bright_white());
            println!(
                "  {}: Bearer {}",
                "Authorization".bright_cyan(),
                secret.bright_yellow()
            );
            println!();
        }
    }
}

/// Handles database diagnostic commands.
async fn handle_db_action(
    action: DbAction,
    registry: &SqliteRouteRegistry,
    database: &str,
) -> Result<()> {
    let pool = registry.pool();

    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;
            let routes: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM routes")
                .fetch_one(pool)
                .await?;

            println!("  File:    {}", database.bright_white());
            println!("  SQLite:  {}", version.bright_white());
            println!("  Routes:  {}", routes.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}

fn ensure_http_url(url: &str) -> Result<()> {
    if !is_http_url(url) {
        anyhow::bail!("{INVALID_URL_MESSAGE}");
    }
    Ok(())
}

fn describe(context: &str, err: RegistryError) -> anyhow::Error {
    anyhow::anyhow!("{context}: {err}")
}

/// Generates a random secret.
///
/// # Format
///
/// - Length: 48 characters
/// - Character set: A-Z, a-z, 0-9
fn generate_secret() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const SECRET_LEN: usize = 48;

    let mut rng = rand::rng();

    (0..SECRET_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
