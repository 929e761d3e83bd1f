// =============================================================================
// Bandwatch — Main Entry Point
// =============================================================================
//
// Bollinger-band buy-signal analyzer for daily stock data. Boots the REST
// API, which fetches price history on demand, annotates it with bands, and
// scores the buy signal per request. No background loops: all computation is
// per-request and stateless apart from the recent-search list.
// =============================================================================

// ── Module declarations ──────────────────────────────────────────────────────
mod api;
mod app_state;
mod indicators;
mod provider;
mod recent;
mod runtime_config;
mod signals;
mod types;

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::app_state::AppState;
use crate::provider::AlphaVantageClient;
use crate::runtime_config::RuntimeConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Environment & config ──────────────────────────────────────────
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Bandwatch analyzer starting up");

    let config = RuntimeConfig::load("bandwatch.json").unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        RuntimeConfig::default()
    });

    let api_key = std::env::var("ALPHA_VANTAGE_API_KEY").unwrap_or_default();
    if api_key.is_empty() {
        warn!("ALPHA_VANTAGE_API_KEY is not set — every analysis request will fail");
    }

    info!(
        window_size = config.window_size,
        lookback_days = config.lookback_days,
        "Analyzer configured"
    );

    // ── 2. Build shared state ────────────────────────────────────────────
    let provider = AlphaVantageClient::new(api_key, config.lookback_days);
    let bind_addr = std::env::var("BANDWATCH_BIND_ADDR").unwrap_or_else(|_| config.bind_addr.clone());
    let state = Arc::new(AppState::new(config, provider));

    // ── 3. Serve the API ─────────────────────────────────────────────────
    let app = api::rest::router(state);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "API server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Bandwatch shut down complete.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    warn!("Shutdown signal received — stopping gracefully");
}
