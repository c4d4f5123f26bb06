use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single point of a price series (instant → price).
///
/// Series are always ordered by ascending timestamp; the 7-day chart
/// paths produce exactly one point per day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}
