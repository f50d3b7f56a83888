//! Locale-Routing Reverse Proxy
//!
//! A request-interception layer that sits in front of a web application
//! and decides, per request, which locale to serve and whether the client
//! must be redirected to a canonical locale-qualified path or to a
//! different delivery domain.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌───────────────────────────────────────────────┐
//!                        │                LOCALE ROUTER                  │
//!                        │                                               │
//!   Client Request       │  ┌─────────┐     ┌────────────────────────┐   │
//!   ────────────────────►│  │  http   │────►│  i18n decision engine  │   │
//!                        │  │ server  │     │  redirect? / rewrite?  │   │
//!                        │  └─────────┘     └───────────┬────────────┘   │
//!                        │        │                     │                │
//!                        │        │ 307 + Location      │ /{locale}/path │
//!   Client Response      │        ▼                     ▼                │
//!   ◄────────────────────┼── redirect            ┌────────────┐         │
//!                        │                        │  upstream  │◄────────┼──── Web App
//!                        │                        │  forward   │         │
//!                        │                        └────────────┘         │
//!                        │                                               │
//!                        │  ┌─────────────────────────────────────────┐  │
//!                        │  │          Cross-Cutting Concerns          │  │
//!                        │  │  config · observability · lifecycle      │  │
//!                        │  └─────────────────────────────────────────┘  │
//!                        └───────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use locale_router::config::loader::load_config;
use locale_router::config::RouterConfig;
use locale_router::lifecycle::{signals, Shutdown};
use locale_router::observability::{logging, metrics};
use locale_router::HttpServer;

#[derive(Debug, Parser)]
#[command(name = "locale-router", about = "Locale-detecting routing proxy")]
struct Args {
    /// Path to the TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration before logging so the configured level applies
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => RouterConfig::default(),
    };

    logging::init(&config.observability.log_level);

    tracing::info!("locale-router v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.address,
        i18n_configured = config.i18n.is_some(),
        "Configuration loaded"
    );

    if let Some(i18n) = &config.i18n {
        tracing::info!(
            locales = ?i18n.locales,
            default_locale = %i18n.default_locale,
            locale_detection = i18n.locale_detection,
            domains = i18n.domains.len(),
            "i18n routing enabled"
        );
    }

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Initialize metrics server
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

    // Graceful shutdown on Ctrl+C
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_listener(shutdown);

    // Create and run HTTP server
    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
