//! Scoring configuration: fee schedule, component weights, scan filters.
//!
//! Malformed configuration is a programmer error and fails fast at
//! construction time; nothing in the per-item scoring path validates or
//! returns errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("fee rate must be within [0, 1], got {0}")]
    InvalidFeeRate(f64),
    #[error("fee cap must be non-negative, got {0}")]
    InvalidFeeCap(i64),
    #[error("component weight '{name}' must be non-negative, got {value}")]
    NegativeWeight { name: &'static str, value: f64 },
    #[error("component weights must sum to 100, got {0}")]
    WeightSum(f64),
}

/// Proportional transaction tax with an absolute cap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeSchedule {
    rate: f64,
    cap: i64,
}

impl FeeSchedule {
    pub fn new(rate: f64, cap: i64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(ConfigError::InvalidFeeRate(rate));
        }
        if cap < 0 {
            return Err(ConfigError::InvalidFeeCap(cap));
        }
        Ok(Self { rate, cap })
    }

    /// Fee charged when selling at `sell_price`:
    /// min(floor(sell_price * rate), cap).
    pub fn fee(&self, sell_price: i64) -> i64 {
        ((sell_price as f64 * self.rate).floor() as i64).min(self.cap)
    }
}

impl Default for FeeSchedule {
    /// The standard exchange tax: 1%, capped at 5,000,000.
    fn default() -> Self {
        Self {
            rate: 0.01,
            cap: 5_000_000,
        }
    }
}

/// Relative weight of each component sub-score in the composite.
/// Must sum to 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub margin: f64,
    pub volume: f64,
    pub stability: f64,
    pub trend: f64,
    pub volatility: f64,
    pub momentum: f64,
    pub roi: f64,
}

impl Weights {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        margin: f64,
        volume: f64,
        stability: f64,
        trend: f64,
        volatility: f64,
        momentum: f64,
        roi: f64,
    ) -> Result<Self, ConfigError> {
        let weights = Self {
            margin,
            volume,
            stability,
            trend,
            volatility,
            momentum,
            roi,
        };
        weights.validate()?;
        Ok(weights)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let named = [
            ("margin", self.margin),
            ("volume", self.volume),
            ("stability", self.stability),
            ("trend", self.trend),
            ("volatility", self.volatility),
            ("momentum", self.momentum),
            ("roi", self.roi),
        ];
        for (name, value) in named {
            if value < 0.0 {
                return Err(ConfigError::NegativeWeight { name, value });
            }
        }

        let sum: f64 = named.iter().map(|(_, v)| v).sum();
        if (sum - 100.0).abs() > 1e-9 {
            return Err(ConfigError::WeightSum(sum));
        }
        Ok(())
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            margin: 25.0,
            volume: 20.0,
            stability: 15.0,
            trend: 15.0,
            volatility: 10.0,
            momentum: 10.0,
            roi: 5.0,
        }
    }
}

/// Full scoring configuration handed to the scorer at construction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreConfig {
    pub fee: FeeSchedule,
    pub weights: Weights,
}

impl ScoreConfig {
    pub fn new(fee: FeeSchedule, weights: Weights) -> Self {
        Self { fee, weights }
    }
}

/// Cheap pre-filters applied before the full per-item scoring pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanFilter {
    /// Items trading less than this per day are skipped
    pub min_volume: i64,
    /// Items buying above this price are skipped
    pub max_price: i64,
}

impl Default for ScanFilter {
    fn default() -> Self {
        Self {
            min_volume: 0,
            max_price: i64::MAX,
        }
    }
}
