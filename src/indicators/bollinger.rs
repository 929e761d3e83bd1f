// =============================================================================
// Bollinger Bands
// =============================================================================
//
// Bollinger Bands consist of a middle band (SMA), an upper band (SMA + k*σ),
// and a lower band (SMA - k*σ), computed here per series index over a
// trailing window: the window expands from width 1 at index 0 until it
// reaches `window_size`, then slides at fixed width.
//
// σ is the population standard deviation (divide by the window count, not
// count - 1). Accumulation runs at full f64 precision; the three band values
// are rounded to 2 decimals only at output, which is the precision the
// evaluator and the API both present.

use crate::types::{IndicatorPoint, PricePoint};

/// Round to 2 decimal places (display precision for all band values).
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Annotate a daily price series with Bollinger Band values.
///
/// Returns one `IndicatorPoint` per input point, same order. The first
/// `window_size - 1` points use a shrinking window, so index 0 always has
/// `upper_band == lower_band == moving_average == price`. Bands sit
/// `band_multiplier` standard deviations either side of the mean
/// (conventionally 2.0).
///
/// Never fails: an empty series yields an empty vector and a `window_size`
/// of 0 is clamped to 1.
///
/// The naive per-index rescan is O(n·W); callers cap the series (typically
/// at 120 observations) so this is not worth an incremental-sum pass.
pub fn compute_indicators(
    series: &[PricePoint],
    window_size: usize,
    band_multiplier: f64,
) -> Vec<IndicatorPoint> {
    let window_size = window_size.max(1);

    let mut result = Vec::with_capacity(series.len());
    for (i, point) in series.iter().enumerate() {
        let start = i.saturating_sub(window_size - 1);
        let window = &series[start..=i];
        let count = window.len() as f64;

        let mean = window.iter().map(|p| p.price).sum::<f64>() / count;
        let variance = window
            .iter()
            .map(|p| (p.price - mean).powi(2))
            .sum::<f64>()
            / count;
        let std_dev = variance.sqrt();

        result.push(IndicatorPoint {
            date: point.date,
            price: point.price,
            moving_average: round2(mean),
            upper_band: round2(mean + band_multiplier * std_dev),
            lower_band: round2(mean - band_multiplier * std_dev),
        });
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn series(prices: &[f64]) -> Vec<PricePoint> {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        prices
            .iter()
            .enumerate()
            .map(|(i, &price)| PricePoint {
                date: base + chrono::Days::new(i as u64),
                price,
            })
            .collect()
    }

    #[test]
    fn output_parallel_to_input() {
        let input = series(&[10.0, 11.0, 12.0, 13.0, 14.0]);
        let out = compute_indicators(&input, 3, 2.0);
        assert_eq!(out.len(), input.len());
        for (a, b) in input.iter().zip(out.iter()) {
            assert_eq!(a.date, b.date);
            assert_eq!(a.price, b.price);
        }
    }

    #[test]
    fn bands_bracket_the_mean() {
        let prices: Vec<f64> = (1..=60).map(|x| 50.0 + (x as f64 * 0.7).sin() * 5.0).collect();
        let out = compute_indicators(&series(&prices), 20, 2.0);
        for point in &out {
            assert!(point.lower_band <= point.moving_average);
            assert!(point.moving_average <= point.upper_band);
        }
    }

    #[test]
    fn first_point_collapses_to_price() {
        let out = compute_indicators(&series(&[42.5, 43.0]), 20, 2.0);
        assert_eq!(out[0].moving_average, 42.5);
        assert_eq!(out[0].upper_band, 42.5);
        assert_eq!(out[0].lower_band, 42.5);
    }

    #[test]
    fn flat_series_collapses_everywhere() {
        let out = compute_indicators(&series(&[100.0; 25]), 20, 2.0);
        for point in &out {
            assert_eq!(point.moving_average, 100.0);
            assert_eq!(point.upper_band, 100.0);
            assert_eq!(point.lower_band, 100.0);
        }
    }

    #[test]
    fn trailing_window_matches_hand_computation() {
        // Window of 3 over [1, 2, 3, 4]: at index 3 the window is [2, 3, 4].
        let out = compute_indicators(&series(&[1.0, 2.0, 3.0, 4.0]), 3, 2.0);
        let last = &out[3];
        assert_eq!(last.moving_average, 3.0);
        // Population σ of [2, 3, 4] = sqrt(2/3); bands = 3 ± 2σ.
        let sigma = (2.0f64 / 3.0).sqrt();
        assert_eq!(last.upper_band, round2(3.0 + 2.0 * sigma));
        assert_eq!(last.lower_band, round2(3.0 - 2.0 * sigma));
    }

    #[test]
    fn expanding_window_uses_only_prefix() {
        // At index 1 the window is [10, 20] regardless of window_size.
        let out = compute_indicators(&series(&[10.0, 20.0, 30.0]), 20, 2.0);
        assert_eq!(out[1].moving_average, 15.0);
        // Population σ of [10, 20] = 5; bands = 15 ± 10.
        assert_eq!(out[1].upper_band, 25.0);
        assert_eq!(out[1].lower_band, 5.0);
    }

    #[test]
    fn band_multiplier_scales_the_offset() {
        // [10, 20] at index 1: mean 15, population σ = 5. With a 1σ
        // multiplier the bands sit at 20/10 instead of the 2σ 25/5.
        let out = compute_indicators(&series(&[10.0, 20.0]), 20, 1.0);
        assert_eq!(out[1].moving_average, 15.0);
        assert_eq!(out[1].upper_band, 20.0);
        assert_eq!(out[1].lower_band, 10.0);
    }

    #[test]
    fn idempotent() {
        let input = series(&[9.0, 8.5, 8.0, 8.2, 7.9, 8.4]);
        assert_eq!(
            compute_indicators(&input, 4, 2.0),
            compute_indicators(&input, 4, 2.0)
        );
    }

    #[test]
    fn empty_series_yields_empty() {
        assert!(compute_indicators(&[], 20, 2.0).is_empty());
    }

    #[test]
    fn zero_window_clamped_to_one() {
        let out = compute_indicators(&series(&[5.0, 6.0]), 0, 2.0);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].moving_average, 6.0);
        assert_eq!(out[1].upper_band, 6.0);
    }
}
