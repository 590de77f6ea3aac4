mod analysis;
mod catalog;
mod config;
mod errors;
mod matching;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::routes::{build_router, cors_layer};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Doom API v{}", env!("CARGO_PKG_VERSION"));

    // Load the occupation catalog before serving anything. A corrupt snapshot is fatal.
    let snapshot_path = config.snapshot_path();
    let catalog = Catalog::load(&snapshot_path).with_context(|| {
        format!(
            "Failed to load occupation catalog from {}",
            snapshot_path.display()
        )
    })?;
    info!("Occupation catalog ready ({} occupations)", catalog.len());

    let cors = cors_layer(&config.allowed_origins)?;
    info!("CORS allowed origins: {}", config.allowed_origins.join(", "));

    if config.doom_seed.is_some() {
        info!("DOOM_SEED set: responses are deterministic");
    }

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    let state = AppState::new(catalog, config);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
