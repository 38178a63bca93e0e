//! Wire types for the external price feed.
//!
//! The feed itself (HTTP fetch, caching, retry) is an external collaborator;
//! this module only defines the JSON payload shapes and how they map onto the
//! analysis types. Field names follow the upstream API (`avgHighPrice`,
//! `highPriceVolume`, ...), with `null` prices treated as 0 the same way the
//! feed reports buckets with no trades on one side.

use std::collections::HashMap;

use anyhow::Context;
use serde::{Deserialize, Deserializer, Serialize};

use crate::indicators::price_point::PricePoint;

/// The current best-ask / best-bid style price pair for one item, plus the
/// traded volume behind each side over the feed's reporting window.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Quote {
    #[serde(default, deserialize_with = "null_to_zero")]
    pub high: i64,
    #[serde(default, deserialize_with = "null_to_zero")]
    pub low: i64,
    #[serde(default, rename = "highPriceVolume", deserialize_with = "null_to_zero")]
    pub high_volume: i64,
    #[serde(default, rename = "lowPriceVolume", deserialize_with = "null_to_zero")]
    pub low_volume: i64,
}

impl Quote {
    pub fn new(high: i64, low: i64, high_volume: i64, low_volume: i64) -> Self {
        Self {
            high,
            low,
            high_volume,
            low_volume,
        }
    }

    /// Total quantity traded across both sides of the reporting window.
    pub fn daily_volume(&self) -> i64 {
        self.high_volume + self.low_volume
    }

    /// Returns true when both sides carry a usable price.
    pub fn is_priced(&self) -> bool {
        self.high > 0 && self.low > 0
    }
}

/// One fetch of the snapshot feed: current quotes for every known item.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SnapshotFeed {
    #[serde(default)]
    pub data: HashMap<u32, Quote>,
    /// Fetch timestamp reported by the feed (Unix seconds)
    #[serde(default)]
    pub timestamp: Option<u64>,
}

impl SnapshotFeed {
    pub fn from_json(body: &str) -> anyhow::Result<Self> {
        serde_json::from_str(body).context("malformed snapshot feed payload")
    }

    pub fn quote(&self, item_id: u32) -> Option<&Quote> {
        self.data.get(&item_id)
    }
}

/// One item's entry in an interval (5-minute or hourly) feed fetch.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct IntervalEntry {
    #[serde(default, rename = "avgHighPrice", deserialize_with = "null_to_zero")]
    pub avg_high_price: i64,
    #[serde(default, rename = "avgLowPrice", deserialize_with = "null_to_zero")]
    pub avg_low_price: i64,
    #[serde(default, rename = "highPriceVolume", deserialize_with = "null_to_zero")]
    pub high_price_volume: i64,
    #[serde(default, rename = "lowPriceVolume", deserialize_with = "null_to_zero")]
    pub low_price_volume: i64,
}

/// One fetch of an interval feed: averaged buckets for every traded item,
/// all stamped with the fetch's shared bucket timestamp.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntervalSnapshot {
    #[serde(default)]
    pub data: HashMap<u32, IntervalEntry>,
    /// Bucket open time reported by the feed (Unix seconds)
    #[serde(default)]
    pub timestamp: Option<u64>,
}

impl IntervalSnapshot {
    pub fn from_json(body: &str) -> anyhow::Result<Self> {
        serde_json::from_str(body).context("malformed interval feed payload")
    }

    /// Converts every entry into a `PricePoint` stamped with the fetch's
    /// bucket timestamp (0 when the feed omitted it).
    pub fn points(&self) -> impl Iterator<Item = (u32, PricePoint)> + '_ {
        let timestamp = self.timestamp.unwrap_or(0);
        self.data.iter().map(move |(&item_id, entry)| {
            let point = PricePoint::new(
                timestamp,
                entry.avg_high_price,
                entry.avg_low_price,
                entry.high_price_volume,
                entry.low_price_volume,
            );
            (item_id, point)
        })
    }
}

/// Deserializes a JSON number, treating explicit `null` (a one-sided bucket)
/// and absent fields as 0.
fn null_to_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_feed_parsing() {
        let body = r#"{"data":{"554":{"high":5,"low":4,"highPriceVolume":120000,"lowPriceVolume":95000},"4151":{"high":1500000,"low":1480000,"highPriceVolume":800,"lowPriceVolume":750}},"timestamp":1700000000}"#;
        let feed = SnapshotFeed::from_json(body).unwrap();

        assert_eq!(feed.data.len(), 2);
        assert_eq!(feed.timestamp, Some(1_700_000_000));

        let whip = feed.quote(4151).unwrap();
        assert_eq!(whip.high, 1_500_000);
        assert_eq!(whip.low, 1_480_000);
        assert_eq!(whip.daily_volume(), 1550);
        assert!(whip.is_priced());
    }

    #[test]
    fn test_null_prices_default_to_zero() {
        let body = r#"{"data":{"2":{"high":null,"low":180,"highPriceVolume":null,"lowPriceVolume":40}}}"#;
        let feed = SnapshotFeed::from_json(body).unwrap();
        let quote = feed.quote(2).unwrap();

        assert_eq!(quote.high, 0);
        assert_eq!(quote.low, 180);
        assert_eq!(quote.daily_volume(), 40);
        assert!(!quote.is_priced());
    }

    #[test]
    fn test_interval_snapshot_points() {
        let body = r#"{"data":{"554":{"avgHighPrice":5,"avgLowPrice":4,"highPriceVolume":9000,"lowPriceVolume":7000},"565":{"avgHighPrice":210,"avgLowPrice":null,"highPriceVolume":500,"lowPriceVolume":null}},"timestamp":1700000300}"#;
        let snapshot = IntervalSnapshot::from_json(body).unwrap();

        let points: HashMap<u32, PricePoint> = snapshot.points().collect();
        assert_eq!(points.len(), 2);

        let fire = &points[&554];
        assert_eq!(fire.timestamp, 1_700_000_300);
        assert_eq!(fire.avg_high, 5);
        assert_eq!(fire.total_volume(), 16_000);

        let blood = &points[&565];
        assert_eq!(blood.avg_low, 0);
        assert_eq!(blood.low_volume, 0);
    }

    #[test]
    fn test_missing_timestamp_defaults_to_zero() {
        let body = r#"{"data":{"1":{"avgHighPrice":100,"avgLowPrice":90,"highPriceVolume":10,"lowPriceVolume":10}}}"#;
        let snapshot = IntervalSnapshot::from_json(body).unwrap();
        let (_, point) = snapshot.points().next().unwrap();
        assert_eq!(point.timestamp, 0);
    }

    #[test]
    fn test_malformed_payload_is_an_error() {
        assert!(SnapshotFeed::from_json("not json").is_err());
        assert!(IntervalSnapshot::from_json(r#"{"data":[]}"#).is_err());
    }
}
