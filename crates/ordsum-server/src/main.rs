// Main entry point for the order-summary upload server

use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ordsum_core::models::config::OrdsumConfig;

mod app;
mod routes;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ordsum_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting order-summary server");

    // Load configuration (optional path as first argument)
    let config = match std::env::args().nth(1) {
        Some(path) => {
            OrdsumConfig::from_file(Path::new(&path)).context("Failed to load configuration")?
        }
        None => OrdsumConfig::default(),
    };

    std::fs::create_dir_all(&config.server.upload_dir)
        .context("Failed to create upload directory")?;

    let addr = format!("0.0.0.0:{}", config.server.port);
    let app = app::build_app(config);

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
