use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_millis, decimal_to_f64};
use crate::error::{ChartError, ChartResult};

/// Pixel dimensions of the target canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn ensure_valid(self) -> ChartResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        f64::from(self.width)
    }

    #[must_use]
    pub fn height_px(self) -> f64 {
        f64::from(self.height)
    }
}

/// One OHLCV record.
///
/// `open_time` is a Unix timestamp in milliseconds. Values are taken as-is:
/// the render path never validates a bar, so malformed input simply yields
/// whatever geometry it maps to. Hosts that want a boundary check can call
/// [`Bar::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bar {
    pub low: f64,
    pub high: f64,
    pub open: f64,
    pub close: f64,
    pub open_time: i64,
    pub volume: f64,
}

impl Bar {
    #[must_use]
    pub const fn new(
        low: f64,
        high: f64,
        open: f64,
        close: f64,
        open_time: i64,
        volume: f64,
    ) -> Self {
        Self {
            low,
            high,
            open,
            close,
            open_time,
            volume,
        }
    }

    /// Converts strongly-typed temporal/decimal input into a bar.
    pub fn from_decimal_time(
        open_time: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: Decimal,
    ) -> ChartResult<Self> {
        Ok(Self::new(
            decimal_to_f64(low, "low")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(open, "open")?,
            decimal_to_f64(close, "close")?,
            datetime_to_unix_millis(open_time),
            decimal_to_f64(volume, "volume")?,
        ))
    }

    /// Optional boundary check.
    ///
    /// Invariants:
    /// - all values are finite
    /// - `low <= min(open, close)` and `max(open, close) <= high`
    /// - `volume >= 0`
    pub fn validate(&self) -> ChartResult<()> {
        if !self.low.is_finite()
            || !self.high.is_finite()
            || !self.open.is_finite()
            || !self.close.is_finite()
            || !self.volume.is_finite()
        {
            return Err(ChartError::InvalidData(
                "ohlcv values must be finite".to_owned(),
            ));
        }

        if self.low > self.open.min(self.close) || self.open.max(self.close) > self.high {
            return Err(ChartError::InvalidData(
                "ohlc open/close must be within low/high range".to_owned(),
            ));
        }

        if self.volume < 0.0 {
            return Err(ChartError::InvalidData(
                "volume must be >= 0".to_owned(),
            ));
        }

        Ok(())
    }
}
