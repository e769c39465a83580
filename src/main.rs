use anyhow::{Context, Result};
use clap::Parser;
use golinks::config::Config;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Tag-to-URL redirector with an authenticated management API.
#[derive(Parser)]
#[command(name = "golinks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQLite database file (overrides GOLINKS_DATABASE)
    #[arg(long)]
    database: Option<String>,

    /// Port to listen on (overrides GOLINKS_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    config.apply_overrides(cli.database, cli.port, cli.debug);
    config.validate().context("Invalid configuration")?;

    init_tracing(&config)?;
    config.print_summary();

    golinks::server::run(config).await
}

fn init_tracing(config: &Config) -> Result<()> {
    let env_filter = EnvFilter::try_new(config.log_directive())
        .with_context(|| format!("Invalid log filter '{}'", config.log_directive()))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .init();
    }

    Ok(())
}
