//! Bounded per-item price history store

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::{debug, info};

use crate::indicators::metrics::ItemMetrics;
use crate::indicators::price_point::PricePoint;
use crate::indicators::timeframe::Timeframe;
use crate::market::feed::IntervalSnapshot;

/// Time-ordered, capacity-bounded price series for many items at one
/// sampling cadence.
///
/// The store owns the only mutable state in the analysis core. Appends go to
/// the tail; once a series exceeds the cadence's capacity the oldest points
/// are evicted FIFO. Readers only ever get owned copies — the live series
/// never escapes the lock.
///
/// Callers are responsible for feeding points in cadence order; the store
/// does not validate or reorder timestamps.
pub struct PriceHistory {
    timeframe: Timeframe,
    capacity: usize,
    series: RwLock<HashMap<u32, Vec<PricePoint>>>,
}

impl PriceHistory {
    /// Creates an empty history with the cadence's standard retention
    /// (288 points for 5-minute data, 168 for hourly).
    pub fn new(timeframe: Timeframe) -> Self {
        Self::with_capacity(timeframe, timeframe.capacity())
    }

    /// Creates an empty history with an explicit per-item capacity.
    pub fn with_capacity(timeframe: Timeframe, capacity: usize) -> Self {
        Self {
            timeframe,
            capacity,
            series: RwLock::new(HashMap::new()),
        }
    }

    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends one observation for an item, evicting from the head once the
    /// series exceeds capacity.
    pub fn record(&self, item_id: u32, point: PricePoint) {
        let mut series = self.series.write().expect("price history lock poisoned");
        let points = series.entry(item_id).or_default();
        points.push(point);
        if points.len() > self.capacity {
            let excess = points.len() - self.capacity;
            points.drain(..excess);
        }
    }

    /// Appends every entry of one interval-feed fetch. Returns how many
    /// items were updated.
    pub fn ingest(&self, snapshot: &IntervalSnapshot) -> usize {
        let mut updated = 0;
        for (item_id, point) in snapshot.points() {
            self.record(item_id, point);
            updated += 1;
        }
        info!(
            timeframe = %self.timeframe,
            items = updated,
            "ingested interval feed snapshot"
        );
        updated
    }

    /// Returns an owned copy of an item's series, oldest first.
    pub fn snapshot(&self, item_id: u32) -> Option<Vec<PricePoint>> {
        let series = self.series.read().expect("price history lock poisoned");
        series.get(&item_id).cloned()
    }

    /// Number of stored points for an item.
    pub fn len(&self, item_id: u32) -> usize {
        let series = self.series.read().expect("price history lock poisoned");
        series.get(&item_id).map_or(0, Vec::len)
    }

    /// Ids of every item with at least one stored point.
    pub fn tracked_items(&self) -> Vec<u32> {
        let series = self.series.read().expect("price history lock poisoned");
        series.keys().copied().collect()
    }

    /// Computes a fresh metrics snapshot for one item.
    ///
    /// `None` when the item is unknown or has fewer than 2 points.
    pub fn metrics(&self, item_id: u32) -> Option<ItemMetrics> {
        let points = self.snapshot(item_id)?;
        ItemMetrics::compute(item_id, &points)
    }

    /// Computes fresh metrics for every tracked item with enough history.
    ///
    /// The returned map is intended as a write-once-per-refresh cache:
    /// callers replace their previous map wholesale instead of mutating it.
    pub fn compute_all_metrics(&self) -> HashMap<u32, ItemMetrics> {
        let series = self.series.read().expect("price history lock poisoned");

        let metrics: HashMap<u32, ItemMetrics> = series
            .iter()
            .filter_map(|(&item_id, points)| {
                ItemMetrics::compute(item_id, points).map(|m| (item_id, m))
            })
            .collect();

        debug!(
            timeframe = %self.timeframe,
            tracked = series.len(),
            computed = metrics.len(),
            "refreshed item metrics"
        );
        metrics
    }
}
