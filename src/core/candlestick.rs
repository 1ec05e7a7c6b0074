use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{Bar, CandleLayout, ScaleMapper};

/// Smallest body height drawn, so doji bars stay visible.
pub const MIN_BODY_HEIGHT_PX: f64 = 1.0;

/// Wick stroke width.
pub const WICK_WIDTH_PX: f64 = 1.0;

/// Up/down classification shared by candle bodies, wicks and volume bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandleDirection {
    /// `close >= open`.
    Up,
    Down,
}

impl CandleDirection {
    #[must_use]
    pub fn of(open: f64, close: f64) -> Self {
        if close >= open { Self::Up } else { Self::Down }
    }
}

/// Projected candle geometry in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleGeometry {
    pub body_left: f64,
    pub body_top: f64,
    pub body_width: f64,
    pub body_height: f64,
    pub wick_x: f64,
    pub wick_top: f64,
    pub wick_height: f64,
    pub close_y: f64,
    pub direction: CandleDirection,
}

/// Resolves the open used for the body.
///
/// A bar without a usable open continues from the previous close; at the
/// start of history it falls back to its own close.
#[must_use]
pub fn resolve_open(prev_close: Option<f64>, open: f64, close: f64) -> f64 {
    if open.is_finite() {
        open
    } else {
        prev_close.filter(|value| value.is_finite()).unwrap_or(close)
    }
}

/// Pixel Y of the top of the candle body.
///
/// The body spans `min(open, close)..max(open, close)` in price space; its top
/// is the larger of the two mapped through `(highest_price - price) * height_unit`.
#[must_use]
pub fn calc_top_body(
    prev_close: Option<f64>,
    open: f64,
    close: f64,
    height_unit: f64,
    highest_price: f64,
) -> f64 {
    let open = resolve_open(prev_close, open, close);
    (highest_price - open.max(close)) * height_unit
}

/// Body height in pixels, never thinner than [`MIN_BODY_HEIGHT_PX`].
#[must_use]
pub fn calc_body_height(open: f64, close: f64, height_unit: f64) -> f64 {
    let height = ((open - close) * height_unit).abs();
    if height.is_nan() {
        return MIN_BODY_HEIGHT_PX;
    }
    height.max(MIN_BODY_HEIGHT_PX)
}

/// Projects one bar into its slot.
#[must_use]
pub fn project_candle(
    bar: &Bar,
    prev_close: Option<f64>,
    scales: &ScaleMapper,
    slot_offset: f64,
    slot_width: f64,
) -> CandleGeometry {
    let open = resolve_open(prev_close, bar.open, bar.close);
    let height_unit = scales.height_unit();

    CandleGeometry {
        body_left: slot_offset,
        body_top: calc_top_body(
            prev_close,
            bar.open,
            bar.close,
            height_unit,
            scales.highest_price(),
        ),
        body_width: slot_width,
        body_height: calc_body_height(open, bar.close, height_unit),
        wick_x: slot_offset + slot_width / 2.0,
        wick_top: scales.price_to_y(bar.high),
        wick_height: scales.price_delta_to_px(bar.high - bar.low),
        close_y: scales.price_to_y(bar.close),
        direction: CandleDirection::of(open, bar.close),
    }
}

/// Close of the bar right before raw index `raw_index`, if there is one.
#[must_use]
pub fn previous_close(series: &[Bar], raw_index: usize) -> Option<f64> {
    raw_index
        .checked_sub(1)
        .and_then(|prev| series.get(prev))
        .map(|bar| bar.close)
}

/// Projects every visible bar of `series` according to `layout`.
///
/// The result is ordered left to right; entry `i` occupies visible slot `i`.
#[must_use]
pub fn project_candles(
    series: &[Bar],
    layout: &CandleLayout,
    scales: &ScaleMapper,
) -> Vec<CandleGeometry> {
    let visible = series.get(layout.ignored_count..).unwrap_or_default();
    let project = |(index, bar): (usize, &Bar)| {
        let raw_index = layout.ignored_count + index;
        project_candle(
            bar,
            previous_close(series, raw_index),
            scales,
            layout.slot_offset(index),
            layout.slot_width,
        )
    };

    #[cfg(feature = "parallel-projection")]
    {
        visible.par_iter().enumerate().map(project).collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        visible.iter().enumerate().map(project).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_treats_equal_prices_as_up() {
        assert_eq!(CandleDirection::of(10.0, 10.0), CandleDirection::Up);
        assert_eq!(CandleDirection::of(10.0, 9.0), CandleDirection::Down);
    }

    #[test]
    fn missing_open_continues_from_previous_close() {
        assert_eq!(resolve_open(Some(14.0), f64::NAN, 18.0), 14.0);
        assert_eq!(resolve_open(None, f64::NAN, 18.0), 18.0);
        assert_eq!(resolve_open(Some(14.0), 12.0, 18.0), 12.0);
    }

    #[test]
    fn previous_close_is_none_at_start_of_history() {
        let series = [Bar::new(1.0, 2.0, 1.5, 1.8, 0, 1.0)];
        assert_eq!(previous_close(&series, 0), None);
        assert_eq!(previous_close(&series, 1), Some(1.8));
    }
}
