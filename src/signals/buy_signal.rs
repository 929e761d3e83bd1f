// =============================================================================
// Buy-Signal Evaluator — rule-based scoring over the latest band values
// =============================================================================
//
// Consumes the annotated series and scores the most recent point against a
// fixed rule set. Strength accumulates across independent rules; the
// entry-price rules A/B/C are an exclusive chain:
//
//   A. price below the lower band          → +2, buy at market
//   B. within 1% of the lower band         → +1, buy at the band
//   C. otherwise                            → wait 1% above the band
//   D. band width above 5% (volatility)    → +1
//   E. downtrend while within 3% of band   → +1 (needs a prior point)
//
// The stop is always 2% under the lower band. Strength maps to the discrete
// label via `SignalLabel::from_strength`.

use crate::indicators::bollinger::round2;
use crate::types::{IndicatorPoint, Recommendation, SignalLabel};

/// Distance from price to the lower band as a percentage of the band.
///
/// `None` when the ratio is meaningless: a non-positive lower band (the
/// division would yield infinities near zero prices) or a degenerate band
/// that has collapsed onto the moving average, where every price is
/// trivially "at" the band.
fn distance_to_lower_percent(point: &IndicatorPoint) -> Option<f64> {
    if point.lower_band <= 0.0 || point.upper_band <= point.lower_band {
        return None;
    }
    Some((point.price - point.lower_band) / point.lower_band * 100.0)
}

/// Evaluate the buy signal for an annotated series.
///
/// Uses the last point, plus the second-to-last for the downtrend rule when
/// the series has one. Returns `None` only for an empty series; any
/// non-empty input produces a `Recommendation` without panicking or emitting
/// non-finite values.
pub fn evaluate_signal(series: &[IndicatorPoint]) -> Option<Recommendation> {
    let last = series.last()?;
    let prev = series.len().checked_sub(2).map(|i| &series[i]);

    let band_width_percent = if last.moving_average > 0.0 {
        (last.upper_band - last.lower_band) / last.moving_average * 100.0
    } else {
        0.0
    };
    let distance_to_lower = distance_to_lower_percent(last);

    let mut strength: u32 = 0;
    let mut reasons = Vec::new();

    let (recommended_buy_price, target_price) = if last.price < last.lower_band {
        strength += 2;
        reasons.push("current price below lower band: oversold".to_string());
        (last.price, last.price * 1.02)
    } else if distance_to_lower.map_or(false, |d| d <= 1.0) {
        strength += 1;
        reasons.push("price very close to lower band".to_string());
        (last.lower_band, last.moving_average)
    } else {
        // Wait for a pullback to just above the lower band.
        (last.lower_band * 1.01, last.moving_average)
    };

    if band_width_percent > 5.0 {
        strength += 1;
        reasons.push("wide band: high volatility".to_string());
    }

    if let Some(prev) = prev {
        if prev.price > last.price && distance_to_lower.map_or(false, |d| d <= 3.0) {
            strength += 1;
            reasons.push("approaching lower band on a downtrend".to_string());
        }
    }

    Some(Recommendation {
        signal: SignalLabel::from_strength(strength),
        strength,
        reasons,
        current_price: round2(last.price),
        recommended_buy_price: round2(recommended_buy_price),
        target_price: round2(target_price),
        stop_loss: round2(last.lower_band * 0.98),
        moving_average: round2(last.moving_average),
        upper_band: round2(last.upper_band),
        lower_band: round2(last.lower_band),
        band_width_percent: round2(band_width_percent),
    })
}
