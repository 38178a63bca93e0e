//! Multi-factor flip scorer and the ranked batch scan built on top of it.
//!
//! Factors combined into the composite score:
//! 1. Margin (raw profit potential)
//! 2. Volume (liquidity / speed of sale)
//! 3. Margin stability (consistency over time)
//! 4. Price trend (avoid buying into crashes)
//! 5. Volatility (risk assessment)
//! 6. Momentum (overbought / oversold conditions)
//! 7. ROI (capital efficiency)

use std::collections::HashMap;

use tracing::{debug, info};

use crate::indicators::metrics::ItemMetrics;
use crate::market::feed::Quote;
use crate::market::limits::BuyLimits;
use crate::scoring::config::{ScanFilter, ScoreConfig};
use crate::scoring::score::{Confidence, FlipScore, Recommendation};

// Batch results below this composite are not worth surfacing.
const MIN_BATCH_SCORE: f64 = 30.0;

// Flips faster than this still count as half an hour when estimating hourly
// profit, so very fast cycles don't blow the estimate up.
const MIN_CYCLE_HOURS: f64 = 0.5;

/// Scores flip opportunities from current quotes plus (optional) derived
/// metrics. Stateless beyond its injected configuration: every call returns
/// a fresh, independently owned [`FlipScore`].
pub struct FlipScorer {
    config: ScoreConfig,
    limits: BuyLimits,
}

impl FlipScorer {
    pub fn new(config: ScoreConfig, limits: BuyLimits) -> Self {
        Self { config, limits }
    }

    /// Scores a single item.
    ///
    /// A missing or unpriced quote is not an error: it yields the terminal
    /// "insufficient price data" score (very-low confidence, avoid). Missing
    /// metrics degrade the history-based components to neutral 50s.
    pub fn score(&self, item_id: u32, quote: Option<&Quote>, metrics: Option<&ItemMetrics>) -> FlipScore {
        let mut score = FlipScore {
            item_id,
            ..FlipScore::default()
        };

        let Some(quote) = quote.filter(|q| q.is_priced()) else {
            score.confidence = Confidence::VeryLow;
            score.recommendation = Recommendation::Avoid;
            score.rationale = "Insufficient price data".to_string();
            return score;
        };

        // Price math
        let raw_margin = quote.high - quote.low;
        let fee = self.config.fee.fee(quote.high);
        let net_margin = raw_margin - fee;

        score.buy_price = quote.low;
        score.sell_price = quote.high;
        score.raw_margin = raw_margin;
        score.fee = fee;
        score.net_margin = net_margin;
        score.daily_volume = quote.daily_volume();
        score.roi = net_margin as f64 / quote.low as f64 * 100.0;

        // Turnover-limit economics
        score.buy_limit = self.limits.get(item_id);
        if score.daily_volume > 0 && score.buy_limit > 0 {
            let hourly_volume = score.daily_volume as f64 / 24.0;
            score.est_flip_time_hours = score.buy_limit as f64 / hourly_volume;
        }
        if score.buy_limit > 0 {
            score.profit_per_cycle = net_margin * score.buy_limit;
            if score.est_flip_time_hours > 0.0 {
                score.est_hourly_profit =
                    (score.profit_per_cycle as f64 / score.est_flip_time_hours.max(MIN_CYCLE_HOURS)) as i64;
            }
        }

        // Component scores, each clamped to [0, 100]

        // A 10% net margin saturates the margin score
        let margin_percent = net_margin as f64 / quote.low as f64 * 100.0;
        score.margin_score = (margin_percent * 10.0).clamp(0.0, 100.0);

        // 10k+ daily volume saturates the volume score
        score.volume_score = (score.daily_volume as f64 / 100.0).clamp(0.0, 100.0);

        score.stability_score = match metrics {
            Some(m) => (100.0 - m.margin_stability).clamp(0.0, 100.0),
            None => 50.0,
        };

        // -5% trend pins 0, +5% pins 100, sideways sits at 50
        score.trend_score = match metrics {
            Some(m) => (50.0 + m.trend_strength * 10.0).clamp(0.0, 100.0),
            None => 50.0,
        };

        score.volatility_score = match metrics {
            Some(m) => (100.0 - m.volatility * 10.0).clamp(0.0, 100.0),
            None => 50.0,
        };

        // The sweet spot for buying is slightly oversold to neutral;
        // overbought items risk a correction right after the buy
        (score.momentum_score, score.momentum) = match metrics {
            Some(m) => {
                let tier = if m.momentum < 30.0 {
                    90.0
                } else if m.momentum < 50.0 {
                    80.0
                } else if m.momentum < 70.0 {
                    60.0
                } else {
                    30.0
                };
                (tier, m.momentum)
            }
            None => (50.0, 50.0),
        };

        // 5% ROI saturates the ROI score
        score.roi_score = (score.roi * 20.0).clamp(0.0, 100.0);

        // Weighted composite
        let w = &self.config.weights;
        score.overall_score = (score.margin_score * w.margin
            + score.volume_score * w.volume
            + score.stability_score * w.stability
            + score.trend_score * w.trend
            + score.volatility_score * w.volatility
            + score.momentum_score * w.momentum
            + score.roi_score * w.roi)
            / 100.0;

        score.confidence = confidence(&score, metrics);
        score.recommendation = recommendation(&score, metrics);
        score.rationale = rationale(&score);
        score.warnings = warnings(&score, metrics);

        debug!(item_id, overall = score.overall_score, confidence = %score.confidence, "scored item");
        score
    }

    /// Scores every quoted item, keeps the worthwhile opportunities, and
    /// returns them ranked best-first.
    ///
    /// Cheap filters (price cap, volume floor, positive net margin) run
    /// before the full scoring pass. Ties on the composite break by
    /// ascending item id so a batch over the same inputs always ranks
    /// identically.
    pub fn score_all(
        &self,
        quotes: &HashMap<u32, Quote>,
        metrics: &HashMap<u32, ItemMetrics>,
        filter: &ScanFilter,
        limit: usize,
    ) -> Vec<FlipScore> {
        let mut scores: Vec<FlipScore> = quotes
            .iter()
            .filter(|(_, quote)| {
                quote.is_priced()
                    && quote.low <= filter.max_price
                    && quote.daily_volume() >= filter.min_volume
                    && quote.high - quote.low - self.config.fee.fee(quote.high) > 0
            })
            .map(|(&item_id, quote)| self.score(item_id, Some(quote), metrics.get(&item_id)))
            .filter(|score| score.overall_score > MIN_BATCH_SCORE)
            .collect();

        scores.sort_by(|a, b| {
            b.overall_score
                .total_cmp(&a.overall_score)
                .then(a.item_id.cmp(&b.item_id))
        });
        scores.truncate(limit);

        info!(
            quoted = quotes.len(),
            returned = scores.len(),
            "ranked flip opportunities"
        );
        scores
    }
}

/// Accumulates evidence points and maps them onto the confidence tiers.
fn confidence(score: &FlipScore, metrics: Option<&ItemMetrics>) -> Confidence {
    let mut factors = 0;

    if score.daily_volume > 5000 {
        factors += 2;
    } else if score.daily_volume > 1000 {
        factors += 1;
    }

    if score.stability_score > 70.0 {
        factors += 2;
    } else if score.stability_score > 50.0 {
        factors += 1;
    }

    if let Some(m) = metrics {
        factors += 1;
        if m.has_stable_margin() {
            factors += 1;
        }
    }

    if score.volatility_score > 70.0 {
        factors += 1;
    }

    match factors {
        6.. => Confidence::VeryHigh,
        4.. => Confidence::High,
        2.. => Confidence::Medium,
        1.. => Confidence::Low,
        _ => Confidence::VeryLow,
    }
}

/// Maps the composite score and red flags onto an action label, strongest
/// condition first.
fn recommendation(score: &FlipScore, metrics: Option<&ItemMetrics>) -> Recommendation {
    if score.overall_score >= 75.0 && score.confidence.rank() >= Confidence::High.rank() {
        return Recommendation::StrongBuy;
    }

    if score.overall_score >= 60.0 && score.confidence.rank() >= Confidence::Medium.rank() {
        return Recommendation::Buy;
    }

    if score.overall_score >= 45.0 {
        if metrics.is_some_and(|m| m.is_downtrend()) {
            return Recommendation::Caution;
        }
        if score.volatility_score < 30.0 {
            return Recommendation::Caution;
        }
        return Recommendation::Consider;
    }

    if score.overall_score >= 30.0 {
        return Recommendation::Caution;
    }

    Recommendation::Avoid
}

/// Builds the one-sentence explanation from notable component readings.
fn rationale(score: &FlipScore) -> String {
    let mut positives = Vec::new();
    let mut negatives = Vec::new();

    if score.margin_score >= 70.0 {
        positives.push("excellent margin");
    } else if score.margin_score < 30.0 {
        negatives.push("low margin");
    }

    if score.volume_score >= 70.0 {
        positives.push("high liquidity");
    } else if score.volume_score < 30.0 {
        negatives.push("low volume");
    }

    if score.stability_score >= 70.0 {
        positives.push("stable spread");
    } else if score.stability_score < 30.0 {
        negatives.push("unstable margin");
    }

    if score.trend_score >= 60.0 {
        positives.push("uptrend");
    } else if score.trend_score < 40.0 {
        negatives.push("downtrend");
    }

    if score.volatility_score >= 70.0 {
        positives.push("low risk");
    } else if score.volatility_score < 30.0 {
        negatives.push("high volatility");
    }

    if score.momentum < 35.0 {
        positives.push("oversold");
    } else if score.momentum > 65.0 {
        negatives.push("overbought");
    }

    let mut rationale = String::new();
    if !positives.is_empty() {
        rationale.push_str("Good: ");
        rationale.push_str(&positives.join(", "));
    }
    if !negatives.is_empty() {
        if !rationale.is_empty() {
            rationale.push_str(". ");
        }
        rationale.push_str("Risk: ");
        rationale.push_str(&negatives.join(", "));
    }

    if rationale.is_empty() {
        "Average opportunity".to_string()
    } else {
        rationale
    }
}

/// Independent risk checks, each contributing its own warning string.
fn warnings(score: &FlipScore, metrics: Option<&ItemMetrics>) -> Vec<String> {
    let mut warnings = Vec::new();

    if score.daily_volume < 500 {
        warnings.push("Very low volume - may take long to sell".to_string());
    }

    if score.stability_score < 30.0 {
        warnings.push("Margin is highly variable".to_string());
    }

    if let Some(m) = metrics {
        if m.is_downtrend() {
            warnings.push("Price is in a downtrend".to_string());
        }
        if m.volatility > 5.0 {
            warnings.push("High price volatility".to_string());
        }
        if m.momentum > 75.0 {
            warnings.push("Momentum indicates overbought".to_string());
        }
        if m.volume_trend < -30.0 {
            warnings.push("Trading volume declining".to_string());
        }
    }

    if score.est_flip_time_hours > 4.0 {
        warnings.push(format!("May take >{}h to flip", score.est_flip_time_hours as i64));
    }

    warnings
}
