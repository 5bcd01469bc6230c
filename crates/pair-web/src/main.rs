//! matter2mqtt-pair: Main Entry Point
//!
//! Resolves configuration, announces the service URL with a terminal QR
//! code, and serves the pairing console over HTTP or HTTPS.

use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pair_http::HttpServer;
use pair_web::{announce, create_router, AppState, Cli, ServiceConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging with environment filter
    tracing_subscriber::registry()
        .with(fmt::layer().compact())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,pair_web=debug")),
        )
        .init();

    let config = ServiceConfig::resolve(cli);
    announce::print_startup(&config);

    let state = Arc::new(AppState::new(config.clone()));
    let app = create_router(state);

    let mut builder = HttpServer::builder()
        .port(config.port)
        .router(app);
    if config.tls_enabled {
        builder = builder.https(config.cert_path.as_str(), config.key_path.as_str());
    }

    let server = builder.build()?;
    info!("starting pairing console on port {}", config.port);
    server.serve().await?;

    Ok(())
}
