//! ynab-proxy binary.
//!
//! An edge proxy that forwards requests to the YNAB API, injecting the
//! configured bearer token and permissive CORS headers. Configuration comes
//! from an optional TOML file plus the YNAB_TOKEN / YNAB_BUDGET_ID
//! environment variables.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ynab_proxy::config::loader::load_config;
use ynab_proxy::lifecycle::signals::spawn_signal_listener;
use ynab_proxy::{HttpServer, ProxyError, Shutdown};

#[derive(Debug, Parser)]
#[command(name = "ynab-proxy", version, about = "Edge proxy for the YNAB API")]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listener bind address (overrides config file).
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), ProxyError> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ynab_proxy=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("ynab-proxy v{} starting", env!("CARGO_PKG_VERSION"));

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    let missing = config.credentials.missing();
    if !missing.is_empty() {
        // Not fatal: requests are answered with 500 until the values appear.
        tracing::warn!(missing = ?missing, "Starting without required credentials");
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream_base = %config.upstream.base_url,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    spawn_signal_listener(shutdown.clone());

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
