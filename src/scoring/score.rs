//! Flip score record and its confidence / recommendation tiers

use serde::Serialize;

/// How much evidence backs a score, lowest to highest.
///
/// Tier comparisons go through [`Confidence::rank`] so the ordering is
/// explicit rather than an accident of declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Confidence {
    #[default]
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Confidence {
    /// Total order, 0 (very low) to 4 (very high).
    pub fn rank(&self) -> u8 {
        match self {
            Confidence::VeryLow => 0,
            Confidence::Low => 1,
            Confidence::Medium => 2,
            Confidence::High => 3,
            Confidence::VeryHigh => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::VeryLow => "very low",
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
            Confidence::VeryHigh => "very high",
        }
    }
}

impl PartialOrd for Confidence {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Confidence {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The action label attached to a score, strongest buy to avoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Recommendation {
    /// High confidence, excellent opportunity
    StrongBuy,
    /// Good opportunity
    Buy,
    /// Decent but not amazing
    Consider,
    /// Some red flags
    Caution,
    /// Not recommended
    #[default]
    Avoid,
}

impl Recommendation {
    /// Total order by buy strength, 0 (avoid) to 4 (strong buy).
    pub fn rank(&self) -> u8 {
        match self {
            Recommendation::Avoid => 0,
            Recommendation::Caution => 1,
            Recommendation::Consider => 2,
            Recommendation::Buy => 3,
            Recommendation::StrongBuy => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::StrongBuy => "strong buy",
            Recommendation::Buy => "buy",
            Recommendation::Consider => "consider",
            Recommendation::Caution => "caution",
            Recommendation::Avoid => "avoid",
        }
    }
}

impl PartialOrd for Recommendation {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Recommendation {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The full analysis of one flip opportunity.
///
/// Constructed once per scoring call and never mutated after return; a new
/// call replaces the record wholesale. Every component score and the overall
/// score sit in [0, 100].
#[derive(Debug, Clone, Default, Serialize)]
pub struct FlipScore {
    pub item_id: u32,

    // Price info
    pub buy_price: i64,
    pub sell_price: i64,
    pub raw_margin: i64,
    pub fee: i64,
    pub net_margin: i64,
    pub daily_volume: i64,
    /// Return on investment, percent of the buy price
    pub roi: f64,

    // Turnover-limit economics
    pub buy_limit: i64,
    /// Estimated hours to move one buy-limit's worth of quantity
    pub est_flip_time_hours: f64,
    /// Net profit for one full buy-limit cycle
    pub profit_per_cycle: i64,
    pub est_hourly_profit: i64,

    // Component scores (0-100)
    pub margin_score: f64,
    pub volume_score: f64,
    pub stability_score: f64,
    pub trend_score: f64,
    pub volatility_score: f64,
    pub momentum_score: f64,
    pub roi_score: f64,
    /// Raw oscillator reading behind `momentum_score`
    pub momentum: f64,

    // Overall
    pub overall_score: f64,
    pub confidence: Confidence,
    pub recommendation: Recommendation,
    pub rationale: String,
    pub warnings: Vec<String>,
}

impl std::fmt::Display for FlipScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "item {}: score={:.1}, margin={}, volume={}, confidence={}, rec={}",
            self.item_id,
            self.overall_score,
            self.net_margin,
            self.daily_volume,
            self.confidence,
            self.recommendation
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_rank_order() {
        assert!(Confidence::VeryHigh > Confidence::High);
        assert!(Confidence::High > Confidence::Medium);
        assert!(Confidence::Medium > Confidence::Low);
        assert!(Confidence::Low > Confidence::VeryLow);
        assert_eq!(Confidence::VeryLow.rank(), 0);
        assert_eq!(Confidence::VeryHigh.rank(), 4);
    }

    #[test]
    fn test_recommendation_rank_order() {
        assert!(Recommendation::StrongBuy > Recommendation::Buy);
        assert!(Recommendation::Consider > Recommendation::Caution);
        assert!(Recommendation::Caution > Recommendation::Avoid);
    }

    #[test]
    fn test_defaults_are_the_terminal_tiers() {
        let score = FlipScore::default();
        assert_eq!(score.confidence, Confidence::VeryLow);
        assert_eq!(score.recommendation, Recommendation::Avoid);
        assert_eq!(score.overall_score, 0.0);
        assert!(score.warnings.is_empty());
    }

    #[test]
    fn test_display() {
        let score = FlipScore {
            item_id: 4151,
            overall_score: 72.5,
            net_margin: 9,
            daily_volume: 10_000,
            confidence: Confidence::Medium,
            recommendation: Recommendation::Buy,
            ..Default::default()
        };
        assert_eq!(
            score.to_string(),
            "item 4151: score=72.5, margin=9, volume=10000, confidence=medium, rec=buy"
        );
    }
}
