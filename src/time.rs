use chrono::{DateTime, Utc};

/// Signed number of whole minutes.
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, PartialOrd)]
pub struct Minutes(pub i64);

impl Minutes {
    /// Minutes elapsed from `from` to `to`, truncated towards zero.
    pub fn between(from: DateTime<Utc>, to: DateTime<Utc>) -> Minutes {
        Minutes((to - from).num_minutes())
    }

    /// Drops the fractional part of a statistic before it is split into hours.
    pub fn truncated(value: f64) -> Minutes {
        Minutes(value as i64)
    }

    pub fn hours(&self) -> i64 {
        self.0 / 60
    }

    pub fn minutes(&self) -> i64 {
        self.0 % 60
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl std::fmt::Display for Minutes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} h, {} min", self.hours(), self.minutes())
    }
}
