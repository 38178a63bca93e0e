//! Trend indicators: price trend strength (OLS slope) and volume trend

use crate::indicators::price_point::PricePoint;

/// Calculates trend strength as the ordinary least-squares slope of avg-high
/// prices against bucket index, normalized by the window's mean price and
/// expressed as a percentage change per bucket.
///
/// Positive = uptrend, negative = downtrend, near zero = sideways.
/// Returns `0.0` when fewer than 5 points are supplied or the mean price is
/// not positive.
pub fn trend_strength(points: &[PricePoint]) -> f64 {
    if points.len() < 5 {
        return 0.0;
    }

    let n = points.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;

    for (i, point) in points.iter().enumerate() {
        let x = i as f64;
        let y = point.avg_high as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }

    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator == 0.0 {
        return 0.0;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let mean_price = sum_y / n;

    if mean_price > 0.0 {
        (slope / mean_price) * 100.0
    } else {
        0.0
    }
}

/// Calculates the volume trend by comparing total traded volume over the most
/// recent 5 buckets against the 5 buckets before them, as a percentage change.
///
/// Positive = liquidity picking up, negative = drying up. Returns `0.0` when
/// fewer than 10 points are supplied or the earlier window traded nothing.
pub fn volume_trend(points: &[PricePoint]) -> f64 {
    if points.len() < 10 {
        return 0.0;
    }

    let size = points.len();
    let recent: i64 = points[size - 5..].iter().map(|p| p.total_volume()).sum();
    let earlier: i64 = points[size - 10..size - 5].iter().map(|p| p.total_volume()).sum();

    if earlier == 0 {
        return 0.0;
    }

    ((recent - earlier) as f64 / earlier as f64) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn points_from_highs(highs: &[i64]) -> Vec<PricePoint> {
        highs
            .iter()
            .enumerate()
            .map(|(i, &high)| PricePoint::new(i as u64 * 300, high, high - 5, 100, 100))
            .collect()
    }

    fn points_from_volumes(volumes: &[i64]) -> Vec<PricePoint> {
        volumes
            .iter()
            .enumerate()
            .map(|(i, &vol)| PricePoint::new(i as u64 * 300, 100, 95, vol, 0))
            .collect()
    }

    #[test]
    fn test_trend_strength_positive_for_rising_series() {
        let points = points_from_highs(&[100, 102, 104, 106, 108, 110]);
        assert!(trend_strength(&points) > 0.0);
    }

    #[test]
    fn test_trend_strength_negative_for_falling_series() {
        let points = points_from_highs(&[110, 108, 106, 104, 102, 100]);
        assert!(trend_strength(&points) < 0.0);
    }

    #[test]
    fn test_trend_strength_zero_for_flat_series() {
        let points = points_from_highs(&[100; 8]);
        assert_relative_eq!(trend_strength(&points), 0.0);
    }

    #[test]
    fn test_trend_strength_insufficient_points() {
        let points = points_from_highs(&[100, 105, 110, 115]);
        assert_eq!(trend_strength(&points), 0.0);
    }

    #[test]
    fn test_trend_strength_known_value() {
        // Slope 1/bucket on prices 98..=102, mean 100 -> 1% per bucket
        let points = points_from_highs(&[98, 99, 100, 101, 102]);
        assert_relative_eq!(trend_strength(&points), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_volume_trend_rising() {
        let points = points_from_volumes(&[100, 100, 100, 100, 100, 200, 200, 200, 200, 200]);
        assert_relative_eq!(volume_trend(&points), 100.0);
    }

    #[test]
    fn test_volume_trend_falling() {
        let points = points_from_volumes(&[200, 200, 200, 200, 200, 100, 100, 100, 100, 100]);
        assert_relative_eq!(volume_trend(&points), -50.0);
    }

    #[test]
    fn test_volume_trend_insufficient_points() {
        let points = points_from_volumes(&[100; 9]);
        assert_eq!(volume_trend(&points), 0.0);
    }

    #[test]
    fn test_volume_trend_zero_earlier_window() {
        let points = points_from_volumes(&[0, 0, 0, 0, 0, 100, 100, 100, 100, 100]);
        assert_eq!(volume_trend(&points), 0.0);
    }

    #[test]
    fn test_volume_trend_uses_trailing_ten_points() {
        // Only the last 10 points matter
        let mut volumes = vec![9999; 5];
        volumes.extend_from_slice(&[100, 100, 100, 100, 100, 100, 100, 100, 100, 100]);
        let points = points_from_volumes(&volumes);
        assert_relative_eq!(volume_trend(&points), 0.0);
    }
}
