//! Derived per-item metrics snapshot, recomputed wholesale from a price series

use crate::indicators::momentum::momentum;
use crate::indicators::moving_averages::{ema, sma};
use crate::indicators::price_point::PricePoint;
use crate::indicators::trend::{trend_strength, volume_trend};
use crate::indicators::volatility::{margin_stability, volatility};

/// Trailing window for the short moving averages (1 hour of 5-minute buckets).
pub const SHORT_MA_PERIOD: usize = 12;
/// Trailing window for the long moving average (2 hours of 5-minute buckets).
pub const LONG_MA_PERIOD: usize = 24;

// Lookback offsets for price-change fields, in buckets at 5-minute cadence.
const HOUR_LOOKBACK: usize = 12;
const SIX_HOUR_LOOKBACK: usize = 72;

/// An immutable snapshot of everything the analysis knows about one item's
/// recent price behaviour.
///
/// Snapshots are recomputed wholesale from a series copy whenever requested
/// and never partially mutated. Two computations over the same series yield
/// identical snapshots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemMetrics {
    pub item_id: u32,
    /// Timestamp of the newest observation the snapshot was derived from
    pub calculated_at: u64,

    // Current state (from the latest point)
    pub current_high: i64,
    pub current_low: i64,
    pub current_margin: i64,
    pub current_volume: i64,
    /// Spread as a percentage of the buy price (0 when the low side is empty)
    pub spread_percent: f64,

    // Price changes over fixed lookbacks (0 when the window is too short)
    pub price_change_1h: i64,
    pub price_change_percent_1h: f64,
    pub price_change_6h: i64,
    pub price_change_percent_6h: f64,

    // Technical indicators
    /// Stdev of per-step returns, as a percentage (lower = more stable)
    pub volatility: f64,
    /// Normalized OLS slope; positive = uptrend, negative = downtrend
    pub trend_strength: f64,
    /// Recent vs earlier traded volume, as a percentage change
    pub volume_trend: f64,
    /// Coefficient of variation of the spread (lower = more stable)
    pub margin_stability: f64,
    /// RSI-style oscillator in [0, 100]; 50 when history is too short
    pub momentum: f64,

    // Moving averages of the avg-high price
    pub sma_short: i64,
    pub sma_long: i64,
    pub ema_short: i64,
}

impl ItemMetrics {
    /// Computes a metrics snapshot from an ordered price series.
    ///
    /// Returns `None` when fewer than 2 points are available — there is
    /// nothing meaningful to derive from a single observation. Individual
    /// indicators that need longer windows fall back to their documented
    /// neutral defaults instead of failing the whole snapshot.
    pub fn compute(item_id: u32, points: &[PricePoint]) -> Option<ItemMetrics> {
        if points.len() < 2 {
            return None;
        }

        let latest = points[points.len() - 1];
        let current_margin = latest.margin();

        let spread_percent = if latest.avg_low > 0 {
            current_margin as f64 / latest.avg_low as f64 * 100.0
        } else {
            0.0
        };

        let (price_change_1h, price_change_percent_1h) = change_over(points, HOUR_LOOKBACK);
        let (price_change_6h, price_change_percent_6h) = change_over(points, SIX_HOUR_LOOKBACK);

        Some(ItemMetrics {
            item_id,
            calculated_at: latest.timestamp,
            current_high: latest.avg_high,
            current_low: latest.avg_low,
            current_margin,
            current_volume: latest.total_volume(),
            spread_percent,
            price_change_1h,
            price_change_percent_1h,
            price_change_6h,
            price_change_percent_6h,
            volatility: volatility(points),
            trend_strength: trend_strength(points),
            volume_trend: volume_trend(points),
            margin_stability: margin_stability(points),
            momentum: momentum(points, None),
            sma_short: sma(points, SHORT_MA_PERIOD),
            sma_long: sma(points, LONG_MA_PERIOD),
            ema_short: ema(points, SHORT_MA_PERIOD),
        })
    }

    /// Is this item in a confirmed uptrend?
    pub fn is_uptrend(&self) -> bool {
        self.trend_strength > 0.1 && self.current_high > self.sma_short
    }

    /// Is this item in a confirmed downtrend?
    pub fn is_downtrend(&self) -> bool {
        self.trend_strength < -0.1 && self.current_high < self.sma_short
    }

    /// Is the spread consistent enough for reliable flipping?
    pub fn has_stable_margin(&self) -> bool {
        self.margin_stability < 30.0
    }

    /// Is there enough volume in the latest bucket for quick flips?
    pub fn has_good_liquidity(&self) -> bool {
        self.current_volume > 100
    }
}

/// Absolute and percentage avg-high change against the point `lookback`
/// positions before the latest one. (0, 0) when the window is too short or
/// the reference price is not positive.
fn change_over(points: &[PricePoint], lookback: usize) -> (i64, f64) {
    if points.len() < lookback {
        return (0, 0.0);
    }

    let latest = points[points.len() - 1];
    let reference = points[points.len() - lookback];
    let change = latest.avg_high - reference.avg_high;

    let percent = if reference.avg_high > 0 {
        change as f64 / reference.avg_high as f64 * 100.0
    } else {
        0.0
    };

    (change, percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::volatility::MAX_INSTABILITY;

    fn series(highs: &[i64]) -> Vec<PricePoint> {
        highs
            .iter()
            .enumerate()
            .map(|(i, &high)| PricePoint::new(1_700_000_000 + i as u64 * 300, high, high - 10, 400, 300))
            .collect()
    }

    #[test]
    fn test_compute_requires_two_points() {
        assert!(ItemMetrics::compute(1, &[]).is_none());
        assert!(ItemMetrics::compute(1, &series(&[100])).is_none());
        assert!(ItemMetrics::compute(1, &series(&[100, 101])).is_some());
    }

    #[test]
    fn test_current_state_from_latest_point() {
        let metrics = ItemMetrics::compute(42, &series(&[100, 110])).unwrap();
        assert_eq!(metrics.item_id, 42);
        assert_eq!(metrics.current_high, 110);
        assert_eq!(metrics.current_low, 100);
        assert_eq!(metrics.current_margin, 10);
        assert_eq!(metrics.current_volume, 700);
        assert_eq!(metrics.spread_percent, 10.0);
        assert_eq!(metrics.calculated_at, 1_700_000_000 + 300);
    }

    #[test]
    fn test_short_series_falls_back_to_neutral_defaults() {
        let metrics = ItemMetrics::compute(1, &series(&[100, 101])).unwrap();
        assert_eq!(metrics.momentum, 50.0);
        assert_eq!(metrics.trend_strength, 0.0);
        assert_eq!(metrics.volume_trend, 0.0);
        assert_eq!(metrics.margin_stability, MAX_INSTABILITY);
        assert_eq!(metrics.sma_short, 0);
        assert_eq!(metrics.sma_long, 0);
        assert_eq!(metrics.ema_short, 0);
        assert_eq!(metrics.price_change_1h, 0);
        assert_eq!(metrics.price_change_6h, 0);
    }

    #[test]
    fn test_price_change_lookbacks() {
        let mut highs = vec![100; 72];
        let last = highs.len() - 1;
        highs[last] = 150;
        highs[last - 11] = 120; // 12 positions back from the latest

        let metrics = ItemMetrics::compute(1, &series(&highs)).unwrap();
        assert_eq!(metrics.price_change_1h, 30); // 150 - 120
        assert_eq!(metrics.price_change_percent_1h, 25.0);
        assert_eq!(metrics.price_change_6h, 50); // 150 - 100 (oldest point)
        assert_eq!(metrics.price_change_percent_6h, 50.0);
    }

    #[test]
    fn test_uptrend_and_downtrend_flags() {
        let rising: Vec<i64> = (0..30).map(|i| 100 + i * 2).collect();
        let metrics = ItemMetrics::compute(1, &series(&rising)).unwrap();
        assert!(metrics.is_uptrend());
        assert!(!metrics.is_downtrend());

        let falling: Vec<i64> = (0..30).map(|i| 160 - i * 2).collect();
        let metrics = ItemMetrics::compute(1, &series(&falling)).unwrap();
        assert!(metrics.is_downtrend());
        assert!(!metrics.is_uptrend());
    }

    #[test]
    fn test_stable_margin_flag() {
        // Constant spread of 10 -> stability CoV 0
        let metrics = ItemMetrics::compute(1, &series(&[100, 100, 100, 100, 100, 100])).unwrap();
        assert!(metrics.has_stable_margin());

        // Too little history counts as unstable
        let metrics = ItemMetrics::compute(1, &series(&[100, 100])).unwrap();
        assert!(!metrics.has_stable_margin());
    }

    #[test]
    fn test_compute_is_idempotent() {
        let points = series(&[100, 105, 103, 108, 110, 107, 112, 115, 111, 118, 120, 117, 122, 125, 121]);
        let first = ItemMetrics::compute(7, &points).unwrap();
        let second = ItemMetrics::compute(7, &points).unwrap();
        assert_eq!(first, second);
    }
}
