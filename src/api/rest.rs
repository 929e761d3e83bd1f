// =============================================================================
// REST API Endpoints — Axum 0.7
// =============================================================================
//
// All endpoints live under `/api/v1/`. Every endpoint is public; the service
// exposes read-only analysis plus the recent-search list, nothing that needs
// an operator token.
//
// CORS is configured permissively for development; tighten `allowed_origins`
// in production.
// =============================================================================

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::app_state::AppState;
use crate::indicators::compute_indicators;
use crate::provider::ProviderError;
use crate::signals::evaluate_signal;
use crate::types::{IndicatorPoint, Recommendation};

// =============================================================================
// Router construction
// =============================================================================

/// Build the full REST API router with CORS middleware and shared state.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/analyze/:ticker", get(analyze))
        .route("/api/v1/recent", get(recent_list))
        .route("/api/v1/recent/:ticker", delete(recent_remove))
        .layer(cors)
        .with_state(state)
}

/// JSON error body shared by all failure responses.
fn error_response(status: StatusCode, message: impl std::fmt::Display) -> Response {
    let body = serde_json::json!({ "error": message.to_string() });
    (status, Json(body)).into_response()
}

/// Map a provider failure to the HTTP status it should surface as.
fn provider_error_status(err: &ProviderError) -> StatusCode {
    match err {
        ProviderError::NotFound(_) => StatusCode::NOT_FOUND,
        ProviderError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        ProviderError::Transport(_) | ProviderError::Payload(_) => StatusCode::BAD_GATEWAY,
    }
}

// =============================================================================
// Health
// =============================================================================

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    server_time: i64,
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        server_time: chrono::Utc::now().timestamp_millis(),
    })
}

// =============================================================================
// Analyze
// =============================================================================

#[derive(Serialize)]
struct AnalyzeResponse {
    ticker: String,
    series: Vec<IndicatorPoint>,
    analysis: Option<Recommendation>,
}

/// Fetch, annotate, and score a ticker. Records the search on success.
async fn analyze(
    State(state): State<Arc<AppState>>,
    Path(ticker): Path<String>,
) -> Response {
    let ticker = ticker.trim().to_uppercase();
    if ticker.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "ticker symbol is required");
    }

    let series = match state.provider.fetch_daily(&ticker).await {
        Ok(series) => series,
        Err(e) => {
            warn!(ticker = %ticker, error = %e, "daily series fetch failed");
            return error_response(provider_error_status(&e), e);
        }
    };

    let annotated = compute_indicators(
        &series,
        state.config.window_size,
        state.config.band_multiplier,
    );
    let analysis = evaluate_signal(&annotated);

    state.recent_searches.write().record(&ticker);

    info!(
        ticker = %ticker,
        points = annotated.len(),
        strength = analysis.as_ref().map(|a| a.strength),
        "analysis complete"
    );

    Json(AnalyzeResponse {
        ticker,
        series: annotated,
        analysis,
    })
    .into_response()
}

// =============================================================================
// Recent searches
// =============================================================================

async fn recent_list(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.recent_searches.read().list())
}

async fn recent_remove(
    State(state): State<Arc<AppState>>,
    Path(ticker): Path<String>,
) -> Response {
    let ticker = ticker.trim().to_uppercase();
    let removed = state.recent_searches.write().remove(&ticker);
    if removed {
        Json(serde_json::json!({ "removed": ticker })).into_response()
    } else {
        error_response(StatusCode::NOT_FOUND, format!("'{ticker}' not in recent searches"))
    }
}

// =============================================================================
// Tests
// =============================================================================
