//! Educational site on Solidity smart-contract vulnerabilities.
//!
//! A small server-rendered site built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌───────────────────────────────────────────┐
//!                    │                 SITE SERVER                │
//!                    │                                            │
//!   GET /reentrancy  │  ┌────────┐   ┌─────────┐   ┌──────────┐  │
//!   ─────────────────┼─▶│  http  │──▶│ routing │──▶│ content  │  │
//!                    │  │ server │   │  table  │   │ renderer │  │
//!                    │  └────────┘   └─────────┘   └────┬─────┘  │
//!                    │                                   │        │
//!   HTML page        │  ┌────────┐   ┌─────────┐        ▼        │
//!   ◀────────────────┼──│response│◀──│ layout  │◀── Document     │
//!                    │  └────────┘   │  shell  │                 │
//!                    │               └─────────┘                 │
//!                    │                                            │
//!                    │  config · observability · lifecycle        │
//!                    └───────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use solsec_site::config::{loader, SiteConfig};
use solsec_site::http::HttpServer;
use solsec_site::lifecycle::{signals, Shutdown};
use solsec_site::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "solsec-site")]
#[command(about = "Educational site on Solidity smart-contract vulnerabilities", long_about = None)]
struct Cli {
    /// Path to a TOML config file; built-in defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => loader::load_config(path)?,
        None => SiteConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
