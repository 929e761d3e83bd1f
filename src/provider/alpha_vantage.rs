// =============================================================================
// Alpha Vantage REST Client — daily closing-price history
// =============================================================================
//
// Fetches TIME_SERIES_DAILY for a ticker and normalises the payload into an
// ascending, date-deduplicated `PricePoint` series truncated to the most
// recent `lookback_days` observations.
//
// Alpha Vantage reports most failures inside a 200 body: an "Error Message"
// key for unknown symbols and a "Note"/"Information" key when the request
// quota is exhausted. Both are inspected before the time-series key.
//
// The client never retries; callers decide whether a failure is worth
// repeating.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::types::PricePoint;

/// JSON key under which Alpha Vantage nests the per-date records.
const TIME_SERIES_KEY: &str = "Time Series (Daily)";
/// JSON key of the closing price inside a per-date record.
const CLOSE_KEY: &str = "4. close";

/// Failure taxonomy for the daily-series fetch.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("no data for ticker '{0}'")]
    NotFound(String),

    #[error("provider rate limit exceeded, try again later")]
    RateLimited,

    #[error("provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed provider payload: {0}")]
    Payload(String),
}

/// Alpha Vantage REST client.
#[derive(Clone)]
pub struct AlphaVantageClient {
    api_key: String,
    base_url: String,
    lookback_days: usize,
    client: reqwest::Client,
}

impl AlphaVantageClient {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `api_key` — Alpha Vantage API key (free-tier keys work, with a low
    ///   request quota).
    /// * `lookback_days` — maximum number of most-recent observations to
    ///   keep per fetch.
    pub fn new(api_key: impl Into<String>, lookback_days: usize) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("failed to build reqwest client");

        debug!("AlphaVantageClient initialised (base_url=https://www.alphavantage.co)");

        Self {
            api_key: api_key.into(),
            base_url: "https://www.alphavantage.co".to_string(),
            lookback_days,
            client,
        }
    }

    /// Fetch the daily closing-price series for `ticker`.
    ///
    /// Returns an ascending series of at most `lookback_days` points.
    #[instrument(skip(self), name = "alpha_vantage::fetch_daily")]
    pub async fn fetch_daily(&self, ticker: &str) -> Result<Vec<PricePoint>, ProviderError> {
        let url = format!("{}/query", self.base_url);
        let resp = self
            .client
            .get(&url)
            .query(&[
                ("function", "TIME_SERIES_DAILY"),
                ("symbol", ticker),
                ("outputsize", "full"),
                ("apikey", &self.api_key),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: serde_json::Value = resp.json().await?;
        let series = parse_daily_series(&body, ticker, self.lookback_days)?;
        debug!(ticker, points = series.len(), "daily series fetched");
        Ok(series)
    }
}

/// Normalise a TIME_SERIES_DAILY payload into an ascending `PricePoint`
/// series truncated to the most recent `lookback_days` entries.
fn parse_daily_series(
    body: &serde_json::Value,
    ticker: &str,
    lookback_days: usize,
) -> Result<Vec<PricePoint>, ProviderError> {
    if body.get("Error Message").is_some() {
        return Err(ProviderError::NotFound(ticker.to_string()));
    }
    if body.get("Note").is_some() || body.get("Information").is_some() {
        return Err(ProviderError::RateLimited);
    }

    let records = body
        .get(TIME_SERIES_KEY)
        .and_then(|v| v.as_object())
        .ok_or_else(|| ProviderError::NotFound(ticker.to_string()))?;

    // BTreeMap keyed by date both sorts ascending and collapses duplicates.
    let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for (date_str, record) in records {
        let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
            ProviderError::Payload(format!("bad date '{date_str}': {e}"))
        })?;
        let close = record
            .get(CLOSE_KEY)
            .and_then(|v| v.as_str())
            .and_then(|s| s.parse::<f64>().ok())
            .ok_or_else(|| {
                ProviderError::Payload(format!("missing or non-numeric close for {date_str}"))
            })?;
        if !close.is_finite() || close < 0.0 {
            return Err(ProviderError::Payload(format!(
                "invalid close {close} for {date_str}"
            )));
        }
        by_date.insert(date, close);
    }

    if by_date.is_empty() {
        return Err(ProviderError::Payload("empty time series".to_string()));
    }

    let skip = by_date.len().saturating_sub(lookback_days);
    Ok(by_date
        .into_iter()
        .skip(skip)
        .map(|(date, price)| PricePoint { date, price })
        .collect())
}
