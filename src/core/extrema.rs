use serde::{Deserialize, Serialize};

use crate::core::Bar;

/// Min/max reference points used to scale the price, time and volume axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extrema {
    pub highest_price: f64,
    pub lowest_price: f64,
    pub min_time: i64,
    pub max_time: i64,
    pub min_volume: f64,
    pub max_volume: f64,
}

impl Extrema {
    /// Scans the series once.
    ///
    /// Returns `None` for an empty series, which callers treat as "nothing to
    /// draw". Zero is a legitimate extremum and is reported as such.
    #[must_use]
    pub fn extract(series: &[Bar]) -> Option<Self> {
        let (first, rest) = series.split_first()?;
        let seed = Self {
            highest_price: first.high,
            lowest_price: first.low,
            min_time: first.open_time,
            max_time: first.open_time,
            min_volume: first.volume,
            max_volume: first.volume,
        };

        Some(rest.iter().fold(seed, |acc, bar| Self {
            highest_price: acc.highest_price.max(bar.high),
            lowest_price: acc.lowest_price.min(bar.low),
            min_time: acc.min_time.min(bar.open_time),
            max_time: acc.max_time.max(bar.open_time),
            min_volume: acc.min_volume.min(bar.volume),
            max_volume: acc.max_volume.max(bar.volume),
        }))
    }

    #[must_use]
    pub fn price_span(&self) -> f64 {
        self.highest_price - self.lowest_price
    }

    #[must_use]
    pub fn time_span(&self) -> i64 {
        self.max_time.saturating_sub(self.min_time)
    }
}
