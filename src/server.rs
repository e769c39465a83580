//! HTTP server initialization and runtime setup.
//!
//! Opens the route registry, builds the router, and runs Axum until a
//! shutdown signal arrives.

use crate::config::Config;
use crate::infrastructure::persistence::SqliteRouteRegistry;
use crate::infrastructure::route_file::{RouteFile, import_routes};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::sync::Arc;
use tokio::signal;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite route registry (file created and schema applied if missing)
/// - Routes from `GOLINKS_ROUTES`, if set, without overwriting existing tags
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// The connection pool is closed once the server has drained.
///
/// # Errors
///
/// Returns an error if:
/// - The database cannot be opened
/// - The route file cannot be read or parsed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let registry = Arc::new(
        SqliteRouteRegistry::connect_with(
            &config.database,
            config.auth_secret(),
            config.sqlite_settings(),
        )
        .await
        .with_context(|| format!("Failed to open database '{}'", config.database))?,
    );
    tracing::info!("Connected to database");

    if let Some(path) = &config.routes_file {
        let file = RouteFile::load(path)?;
        import_routes(&*registry, &file, false)
            .await
            .with_context(|| format!("Failed to import routes from {path}"))?;
    }

    let state = AppState::new(registry.clone());
    let app = app_router(state, config.debug);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    registry.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
