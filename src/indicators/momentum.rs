//! Momentum oscillator: RSI-style directional pressure over recent buckets

use crate::indicators::price_point::PricePoint;

pub const DEFAULT_MOMENTUM_PERIOD: usize = 14;

/// Neutral oscillator reading, reported when there is not enough history.
pub const NEUTRAL_MOMENTUM: f64 = 50.0;

/// Calculates an RSI-style momentum oscillator over a slice of price points.
///
/// Momentum measures the speed and magnitude of recent price changes and
/// oscillates between 0 and 100.
///
/// momentum = 100 - (100 / (1 + RS))
/// where RS = Average Gain / Average Loss over the period
///
/// Common interpretation:
/// - > 70: overbought (risky to buy into)
/// - < 30: oversold (potential buying opportunity)
///
/// Uses a plain arithmetic average of gains and losses over the last `period`
/// steps, not Wilder's smoothing. The scoring thresholds downstream (30/50/70)
/// were tuned against this exact formula, so it must not be swapped for the
/// textbook smoothed variant.
///
/// Pass `None` to use the default period of 14, or `Some(n)` for a custom
/// period. Returns the neutral reading of 50 if there are fewer than
/// `period + 1` points, and 100 if the window contains no losses at all.
pub fn momentum(points: &[PricePoint], period: Option<usize>) -> f64 {
    let period = period.unwrap_or(DEFAULT_MOMENTUM_PERIOD);

    // Need period + 1 points to observe `period` price changes
    if period == 0 || points.len() < period + 1 {
        return NEUTRAL_MOMENTUM;
    }

    let changes = price_changes(&points[points.len() - (period + 1)..]);
    let (gains, losses) = gains_and_losses(&changes);

    let avg_gain: f64 = gains.iter().sum::<f64>() / period as f64;
    let avg_loss: f64 = losses.iter().sum::<f64>() / period as f64;

    if avg_loss == 0.0 {
        // No losses in the window means maximum bullish pressure
        return 100.0;
    }

    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

/// Calculates avg-high price changes between consecutive points.
fn price_changes(points: &[PricePoint]) -> Vec<f64> {
    points
        .windows(2)
        .map(|pair| (pair[1].avg_high - pair[0].avg_high) as f64)
        .collect()
}

/// Separates price changes into gains and losses.
///
/// Returns a tuple of (gains, losses) where:
/// - gains[i] = change if positive, else 0
/// - losses[i] = |change| if negative, else 0
fn gains_and_losses(changes: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let gains: Vec<f64> = changes.iter().map(|&c| if c > 0.0 { c } else { 0.0 }).collect();

    let losses: Vec<f64> = changes
        .iter()
        .map(|&c| if c < 0.0 { c.abs() } else { 0.0 })
        .collect();

    (gains, losses)
}
