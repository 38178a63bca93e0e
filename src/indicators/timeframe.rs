/// Represents the sampling cadence of a price history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timeframe {
    M5, // 5 minutes
    H1, // 1 hour
}

impl Timeframe {
    /// Returns the duration of one bucket in seconds
    pub fn to_seconds(&self) -> u64 {
        match self {
            Timeframe::M5 => 5 * 60,
            Timeframe::H1 => 60 * 60,
        }
    }

    /// Returns how many buckets a history at this cadence retains.
    ///
    /// 288 five-minute buckets cover 24 hours; 168 hourly buckets cover
    /// 7 days. Eviction is strict FIFO once the capacity is reached.
    pub fn capacity(&self) -> usize {
        match self {
            Timeframe::M5 => 288,
            Timeframe::H1 => 168,
        }
    }

    /// Returns the wire label used by the upstream feed endpoints
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::M5 => "5m",
            Timeframe::H1 => "1h",
        }
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
