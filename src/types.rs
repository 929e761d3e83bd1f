// =============================================================================
// Shared types used across the Bandwatch analyzer
// =============================================================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single daily observation: closing price on a calendar date.
///
/// Series are always sorted ascending by date with no duplicate dates; the
/// provider client enforces both before handing a series to the indicator
/// engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

/// A `PricePoint` annotated with Bollinger Band values.
///
/// Produced one-for-one from the input series; `lower_band <= moving_average
/// <= upper_band` always holds, with all three equal when the window held a
/// single observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPoint {
    pub date: NaiveDate,
    pub price: f64,
    pub moving_average: f64,
    pub upper_band: f64,
    pub lower_band: f64,
}

/// Discrete buy-signal label mapped from the accumulated strength score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalLabel {
    #[serde(rename = "no buy signal")]
    None,
    #[serde(rename = "weak buy signal")]
    Weak,
    #[serde(rename = "moderate buy signal")]
    Moderate,
    #[serde(rename = "strong buy signal")]
    Strong,
}

impl SignalLabel {
    /// Map an accumulated strength score to its label. Thresholds are exact:
    /// 0, 1, 2, and 3-or-more.
    pub fn from_strength(strength: u32) -> Self {
        match strength {
            0 => Self::None,
            1 => Self::Weak,
            2 => Self::Moderate,
            _ => Self::Strong,
        }
    }
}

impl std::fmt::Display for SignalLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "no buy signal"),
            Self::Weak => write!(f, "weak buy signal"),
            Self::Moderate => write!(f, "moderate buy signal"),
            Self::Strong => write!(f, "strong buy signal"),
        }
    }
}

/// The evaluator's verdict for a series. Derived purely from the last one or
/// two indicator points; recomputed from scratch on every analysis, never
/// stored.
///
/// All price/percentage fields are rounded to 2 decimals at construction;
/// `strength` is the raw accumulated score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub signal: SignalLabel,
    pub strength: u32,
    pub reasons: Vec<String>,
    pub current_price: f64,
    pub recommended_buy_price: f64,
    pub target_price: f64,
    pub stop_loss: f64,
    pub moving_average: f64,
    pub upper_band: f64,
    pub lower_band: f64,
    pub band_width_percent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_thresholds_exact() {
        assert_eq!(SignalLabel::from_strength(0), SignalLabel::None);
        assert_eq!(SignalLabel::from_strength(1), SignalLabel::Weak);
        assert_eq!(SignalLabel::from_strength(2), SignalLabel::Moderate);
        assert_eq!(SignalLabel::from_strength(3), SignalLabel::Strong);
        assert_eq!(SignalLabel::from_strength(4), SignalLabel::Strong);
    }

    #[test]
    fn label_serializes_as_display_string() {
        let json = serde_json::to_string(&SignalLabel::Moderate).unwrap();
        assert_eq!(json, "\"moderate buy signal\"");
        assert_eq!(SignalLabel::Moderate.to_string(), "moderate buy signal");
    }
}
