// =============================================================================
// Central Application State — Bandwatch analyzer
// =============================================================================
//
// Ties the configuration, the provider client, and the recent-search list
// together behind a single `Arc<AppState>` shared by every request handler.
//
// Thread safety: the config is immutable after startup; the recent-search
// list is the only mutable collection and sits behind parking_lot::RwLock.
// The analysis itself is pure and needs no coordination, so concurrent
// requests for different tickers never contend beyond that one lock.

use parking_lot::RwLock;

use crate::provider::AlphaVantageClient;
use crate::recent::RecentSearches;
use crate::runtime_config::RuntimeConfig;

/// Shared state for all request handlers.
pub struct AppState {
    pub config: RuntimeConfig,
    pub provider: AlphaVantageClient,
    pub recent_searches: RwLock<RecentSearches>,
}

impl AppState {
    /// Construct a new `AppState`. The returned value is typically wrapped
    /// in `Arc` immediately.
    pub fn new(config: RuntimeConfig, provider: AlphaVantageClient) -> Self {
        let recent_searches = RecentSearches::new(config.max_recent_searches);
        Self {
            config,
            provider,
            recent_searches: RwLock::new(recent_searches),
        }
    }
}
