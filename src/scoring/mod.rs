//! Multi-factor flip scoring and ranking

pub mod config;
pub mod engine;
pub mod score;

// Re-exports for convenience
pub use config::{ConfigError, FeeSchedule, ScanFilter, ScoreConfig, Weights};
pub use engine::FlipScorer;
pub use score::{Confidence, FlipScore, Recommendation};
