//! Volatility indicators: per-step return volatility and margin stability

use crate::indicators::price_point::PricePoint;

/// Margin-stability reading reported when the spread cannot be assessed.
/// By convention an unknown spread counts as maximally unstable.
pub const MAX_INSTABILITY: f64 = 100.0;

/// Calculates price volatility as the standard deviation of per-step returns,
/// expressed as a percentage.
///
/// For each consecutive pair of points with a positive previous price:
/// r = (high[i] - high[i-1]) / high[i-1]
///
/// Lower is more stable. Returns `0.0` when fewer than 2 points are supplied
/// or no valid return can be computed (e.g. all previous prices are 0).
pub fn volatility(points: &[PricePoint]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }

    let returns: Vec<f64> = points
        .windows(2)
        .filter(|pair| pair[0].avg_high > 0)
        .map(|pair| (pair[1].avg_high - pair[0].avg_high) as f64 / pair[0].avg_high as f64)
        .collect();

    if returns.is_empty() {
        return 0.0;
    }

    std_dev(&returns) * 100.0
}

/// Calculates margin stability as the coefficient of variation of the
/// buy/sell spread across the window, expressed as a percentage.
///
/// stability = stdev(margin) / mean(margin) * 100
///
/// Lower is more stable. Returns the maximally-unstable reading of 100 when
/// fewer than 5 points are supplied or the mean margin is 0.
pub fn margin_stability(points: &[PricePoint]) -> f64 {
    if points.len() < 5 {
        return MAX_INSTABILITY;
    }

    let margins: Vec<f64> = points.iter().map(|p| p.margin() as f64).collect();
    let mean = margins.iter().sum::<f64>() / margins.len() as f64;
    if mean == 0.0 {
        return MAX_INSTABILITY;
    }

    (std_dev(&margins) / mean) * 100.0
}

/// Population standard deviation of a non-empty sample.
fn std_dev(values: &[f64]) -> f64 {
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
