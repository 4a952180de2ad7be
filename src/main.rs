//! Selective Response-Header Advice Service
//!
//! A small HTTP service built with Tokio and Axum, demonstrating a response
//! interceptor applied only to endpoints registered as controlled.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌────────────────────────────────────────────┐
//!                      │                 SERVICE                     │
//!                      │                                             │
//!   Client Request     │  ┌─────────┐    ┌───────────────────────┐  │
//!   ──────────────────▶│  │  http   │───▶│ endpoint registry     │  │
//!                      │  │ server  │    │ (controlled flag)     │  │
//!                      │  └─────────┘    └──────────┬────────────┘  │
//!                      │                            │                │
//!                      │         controlled? ───────┤                │
//!                      │              │ yes         │ no             │
//!                      │              ▼             │                │
//!                      │  ┌────────────────────┐    │                │
//!   Client Response    │  │ advice interceptor │    │                │
//!   ◀──────────────────┼──│ + header provider  │◀───┘                │
//!                      │  └────────────────────┘                     │
//!                      │                                             │
//!                      │  ┌───────────────────────────────────────┐  │
//!                      │  │   config  │  observability  │ timeout │  │
//!                      │  └───────────────────────────────────────┘  │
//!                      └────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use response_advice::config::{load_config, ServiceConfig};
use response_advice::http::HttpServer;

#[derive(Parser, Debug)]
#[command(name = "response-advice", about = "HTTP service with selective response-header advice")]
struct Args {
    /// Path to a TOML config file. Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "response_advice=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("response-advice v0.1.0 starting");

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        max_connections = config.listener.max_connections,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
