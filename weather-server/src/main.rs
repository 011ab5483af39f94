//! Binary crate for the weather aggregation HTTP server.
//!
//! This crate focuses on:
//! - Loading API keys from the local environment file
//! - Wiring the composite provider into the router
//! - Serving the HTTP surface

use std::sync::Arc;

use anyhow::Context;
use weather_core::{composite_from_config, Config};

mod app;

const LISTEN_ADDR: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().context("Error loading .env file")?;
    init_tracing();

    let config = Config::from_env()?;
    let provider = Arc::new(composite_from_config(&config)?);
    let router = app::app_router(provider);

    tracing::info!("Listening on {LISTEN_ADDR}");
    let listener = tokio::net::TcpListener::bind(LISTEN_ADDR)
        .await
        .with_context(|| format!("Failed to bind {LISTEN_ADDR}"))?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}
