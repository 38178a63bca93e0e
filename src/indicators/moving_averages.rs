//! Moving Average indicators: Simple Moving Average (SMA) and Exponential Moving Average (EMA)

use crate::indicators::price_point::PricePoint;

/// Calculates the Simple Moving Average (SMA) over a slice of price points.
///
/// SMA = (P1 + P2 + ... + Pn) / n
///
/// Uses the avg-high prices of the most recent `period` points, truncated to
/// whole currency units. Returns `0` if there are not enough points for the
/// given period.
pub fn sma(points: &[PricePoint], period: usize) -> i64 {
    if period == 0 || points.len() < period {
        return 0;
    }

    let start_index = points.len() - period;
    let sum: f64 = points[start_index..].iter().map(|p| p.avg_high as f64).sum();

    (sum / period as f64) as i64
}

/// Calculates the Exponential Moving Average (EMA) over a slice of price points.
///
/// EMA gives more weight to recent prices using a smoothing multiplier.
/// EMA = Price * multiplier + EMA_prev * (1 - multiplier)
/// where multiplier = 2 / (period + 1)
///
/// The first EMA value is seeded with the raw price of the oldest point in
/// the trailing window (not an SMA seed), then rolled forward over the
/// remaining `period - 1` points. Returns `0` if there are not enough points.
pub fn ema(points: &[PricePoint], period: usize) -> i64 {
    if period == 0 || points.len() < period {
        return 0;
    }

    let multiplier = 2.0 / (period as f64 + 1.0);
    let window = &points[points.len() - period..];

    let mut ema = window[0].avg_high as f64;
    for point in &window[1..] {
        ema = (point.avg_high as f64 - ema) * multiplier + ema;
    }

    ema as i64
}
