//! Storefront Proxy
//!
//! Minimal HTTP proxy between the Galactic Archives storefront and the
//! Printful fulfillment API.
//!
//! # Architecture Overview
//!
//! ```text
//!   Browser ──▶ http (CORS, request id, trace) ──▶ catalog ──▶ upstream ──▶ Printful
//!                                                    │
//!                                    static demo / sync mapper / pass-through
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use storefront_proxy::config::{load_config, validate_config, CatalogMode, ConfigError, ProxyConfig};
use storefront_proxy::lifecycle::{signals, startup, Shutdown};
use storefront_proxy::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "storefront-proxy")]
#[command(about = "Proxy product data from Printful to the storefront", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Override catalog.mode (static, synced, passthrough).
    #[arg(short, long)]
    mode: Option<CatalogMode>,
}

fn resolve_config(cli: &Cli) -> Result<ProxyConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ProxyConfig::default(),
    };

    if let Some(bind) = &cli.bind {
        config.listener.bind_address = bind.clone();
    }
    if let Some(mode) = cli.mode {
        config.catalog.mode = mode;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    logging::init_logging(&config.observability.log_level);
    tracing::info!("storefront-proxy v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        upstream_timeout_secs = config.upstream.timeout_secs,
        mode = %config.catalog.mode,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = startup::build_server(config)?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::shutdown_signal().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
