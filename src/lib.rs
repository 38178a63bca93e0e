//! flipscout: market analytics for flip opportunities.
//!
//! Turns a stream of time-stamped price/volume observations for tradable
//! items into a ranked list of flip opportunities, each annotated with a
//! composite 0-100 score, a confidence tier, a recommendation tier, a
//! human-readable rationale, and risk warnings.
//!
//! The crate has three layers:
//!
//! - [`market`]: feed payload types, the bounded per-item price history
//!   ([`market::PriceHistory`]), and the turnover-limit lookup
//!   ([`market::BuyLimits`]).
//! - [`indicators`]: pure functions from a price series to technical
//!   indicators, combined into an immutable [`indicators::ItemMetrics`]
//!   snapshot.
//! - [`scoring`]: the weighted multi-factor scorer
//!   ([`scoring::FlipScorer`]) producing [`scoring::FlipScore`] records and
//!   the ranked batch scan.
//!
//! The price feed itself (HTTP, caching, scheduling) is an external
//! collaborator: an orchestrator fetches data, hands payloads to
//! [`market::PriceHistory::ingest`], and invokes the scorer once data has
//! arrived. Everything here is synchronous and CPU-bound.
//!
//! ```
//! use flipscout::market::{BuyLimits, PriceHistory, Quote};
//! use flipscout::indicators::Timeframe;
//! use flipscout::scoring::{FlipScorer, ScoreConfig};
//!
//! let history = PriceHistory::new(Timeframe::M5);
//! let scorer = FlipScorer::new(ScoreConfig::default(), BuyLimits::builtin());
//!
//! let quote = Quote::new(110, 100, 6000, 4000);
//! let score = scorer.score(4151, Some(&quote), history.metrics(4151).as_ref());
//! assert!(score.overall_score >= 0.0 && score.overall_score <= 100.0);
//! ```

pub mod indicators;
pub mod market;
pub mod scoring;

pub use indicators::{ItemMetrics, PricePoint, Timeframe};
pub use market::{BuyLimits, IntervalSnapshot, PriceHistory, Quote, SnapshotFeed};
pub use scoring::{Confidence, FlipScore, FlipScorer, Recommendation, ScanFilter, ScoreConfig};
