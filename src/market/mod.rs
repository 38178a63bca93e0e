//! Market data layer: feed payloads, bounded price history, turnover limits

pub mod feed;
pub mod history;
pub mod limits;

// Re-exports for convenience
pub use feed::{IntervalSnapshot, Quote, SnapshotFeed};
pub use history::PriceHistory;
pub use limits::BuyLimits;
