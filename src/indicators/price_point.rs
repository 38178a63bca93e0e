//! Price point (interval-averaged price/volume observation) data structure

use serde::{Deserialize, Serialize};

/// A single time bucket of aggregated trade data for one item.
///
/// The timestamp is Unix time in seconds (bucket open time), which is the
/// format used by the upstream price feed. Prices are in base currency units
/// (gp); `avg_high` is the volume-weighted average of instant-buy trades in
/// the bucket, `avg_low` the average of instant-sell trades.
///
/// A `PricePoint` is immutable once appended to a history: series analysis
/// assumes observations never change after the fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Unix timestamp in seconds (bucket open time)
    pub timestamp: u64,
    /// Average instant-buy price over the bucket (0 when no buy trades)
    pub avg_high: i64,
    /// Average instant-sell price over the bucket (0 when no sell trades)
    pub avg_low: i64,
    /// Quantity traded at the high (instant-buy) side
    pub high_volume: i64,
    /// Quantity traded at the low (instant-sell) side
    pub low_volume: i64,
}

impl PricePoint {
    pub fn new(timestamp: u64, avg_high: i64, avg_low: i64, high_volume: i64, low_volume: i64) -> Self {
        Self {
            timestamp,
            avg_high,
            avg_low,
            high_volume,
            low_volume,
        }
    }

    /// Returns the buy/sell spread of this bucket (avg_high - avg_low).
    ///
    /// Can be negative when the feed reports a crossed bucket; callers that
    /// care guard on it explicitly.
    pub fn margin(&self) -> i64 {
        self.avg_high - self.avg_low
    }

    /// Returns the total quantity traded in this bucket (both sides).
    pub fn total_volume(&self) -> i64 {
        self.high_volume + self.low_volume
    }

    /// Returns true if both sides of the bucket carry a usable price.
    pub fn has_both_prices(&self) -> bool {
        self.avg_high > 0 && self.avg_low > 0
    }
}
