// =============================================================================
// Runtime Configuration — analyzer tunables
// =============================================================================
//
// Window width, band multiplier, lookback cap, and the API bind address all
// live here. All fields carry `#[serde(default)]` so that adding new fields
// never breaks loading an older config file; a missing file just means
// defaults.
//
// Secrets stay out of the file: the Alpha Vantage API key is read from the
// `ALPHA_VANTAGE_API_KEY` environment variable at startup.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_window_size() -> usize {
    20
}

fn default_band_multiplier() -> f64 {
    2.0
}

fn default_lookback_days() -> usize {
    120
}

fn default_max_recent_searches() -> usize {
    5
}

fn default_bind_addr() -> String {
    "0.0.0.0:3001".to_string()
}

// =============================================================================
// RuntimeConfig
// =============================================================================

/// Top-level runtime configuration for the analyzer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Bollinger window width in trading days.
    #[serde(default = "default_window_size")]
    pub window_size: usize,

    /// Standard-deviation multiplier for the upper/lower bands.
    #[serde(default = "default_band_multiplier")]
    pub band_multiplier: f64,

    /// How many most-recent daily observations to analyse per ticker.
    #[serde(default = "default_lookback_days")]
    pub lookback_days: usize,

    /// Capacity of the recent-searches list.
    #[serde(default = "default_max_recent_searches")]
    pub max_recent_searches: usize,

    /// Address the REST API binds to. `BANDWATCH_BIND_ADDR` overrides it.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            window_size: default_window_size(),
            band_multiplier: default_band_multiplier(),
            lookback_days: default_lookback_days(),
            max_recent_searches: default_max_recent_searches(),
            bind_addr: default_bind_addr(),
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from a JSON file at `path`.
    ///
    /// If the file does not exist, returns an error so the caller can fall
    /// back to defaults with a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config from {}", path.display()))?;

        info!(
            path = %path.display(),
            window_size = config.window_size,
            lookback_days = config.lookback_days,
            "config loaded"
        );

        Ok(config)
    }
}

// =============================================================================
// Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let cfg = RuntimeConfig::default();
        assert_eq!(cfg.window_size, 20);
        assert!((cfg.band_multiplier - 2.0).abs() < f64::EPSILON);
        assert_eq!(cfg.lookback_days, 120);
        assert_eq!(cfg.max_recent_searches, 5);
        assert_eq!(cfg.bind_addr, "0.0.0.0:3001");
    }

    #[test]
    fn deserialise_empty_json_uses_defaults() {
        let cfg: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.window_size, 20);
        assert_eq!(cfg.lookback_days, 120);
    }

    #[test]
    fn deserialise_partial_json_fills_defaults() {
        let json = r#"{ "window_size": 10 }"#;
        let cfg: RuntimeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.window_size, 10);
        assert!((cfg.band_multiplier - 2.0).abs() < f64::EPSILON);
        assert_eq!(cfg.lookback_days, 120);
        assert_eq!(cfg.max_recent_searches, 5);
    }

    #[test]
    fn roundtrip_serialisation() {
        let cfg = RuntimeConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let cfg2: RuntimeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg.window_size, cfg2.window_size);
        assert_eq!(cfg.bind_addr, cfg2.bind_addr);
    }
}
