//! Technical indicators for flip analysis

pub mod metrics;
pub mod momentum;
pub mod moving_averages;
pub mod price_point;
pub mod timeframe;
pub mod trend;
pub mod volatility;

// Re-exports for convenience
pub use metrics::ItemMetrics;
pub use price_point::PricePoint;
pub use timeframe::Timeframe;
