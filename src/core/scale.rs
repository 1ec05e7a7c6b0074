use tracing::warn;

use crate::core::primitives::guarded_ratio;
use crate::core::{Extrema, Viewport};

/// Linear transforms from domain extrema to pixel space for one render pass.
///
/// Horizontal candle placement does not go through `width_unit`: candles sit
/// in evenly sized slots regardless of the real time elapsed between bars
/// (see [`crate::core::CandleLayout`]). `width_unit` is kept for hosts that
/// want to map raw timestamps onto the canvas themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleMapper {
    height_unit: f64,
    width_unit: f64,
    highest_price: f64,
    max_volume: f64,
    canvas_height: f64,
}

impl ScaleMapper {
    /// Builds the transforms. A flat price series (or a flat time/volume
    /// range) yields a zero unit rather than an infinite one.
    #[must_use]
    pub fn new(extrema: Extrema, viewport: Viewport) -> Self {
        let price_span = extrema.price_span();
        let height_unit = guarded_ratio(viewport.height_px(), price_span);
        if height_unit == 0.0 && price_span != 0.0 {
            warn!(
                price_span,
                "price span produced a non-finite height unit, forcing zero"
            );
        }
        let width_unit = guarded_ratio(viewport.width_px(), extrema.time_span() as f64);

        Self {
            height_unit,
            width_unit,
            highest_price: extrema.highest_price,
            max_volume: extrema.max_volume,
            canvas_height: viewport.height_px(),
        }
    }

    /// Pixels per unit of price.
    #[must_use]
    pub fn height_unit(&self) -> f64 {
        self.height_unit
    }

    /// Pixels per unit of time (millisecond).
    #[must_use]
    pub fn width_unit(&self) -> f64 {
        self.width_unit
    }

    #[must_use]
    pub fn highest_price(&self) -> f64 {
        self.highest_price
    }

    #[must_use]
    pub fn max_volume(&self) -> f64 {
        self.max_volume
    }

    #[must_use]
    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Price grows upward, so higher prices map to smaller Y.
    #[must_use]
    pub fn price_to_y(&self, price: f64) -> f64 {
        (self.highest_price - price) * self.height_unit
    }

    /// Converts a price distance into a pixel distance.
    #[must_use]
    pub fn price_delta_to_px(&self, delta: f64) -> f64 {
        delta * self.height_unit
    }

    /// Fraction of the largest volume in the series; `0` when every volume is zero.
    #[must_use]
    pub fn volume_ratio(&self, volume: f64) -> f64 {
        guarded_ratio(volume, self.max_volume)
    }

    /// Height in pixels of a volume bar occupying at most `pane_fraction` of the canvas.
    #[must_use]
    pub fn volume_height(&self, volume: f64, pane_fraction: f64) -> f64 {
        self.volume_ratio(volume) * pane_fraction * self.canvas_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extrema(highest: f64, lowest: f64, max_volume: f64) -> Extrema {
        Extrema {
            highest_price: highest,
            lowest_price: lowest,
            min_time: 0,
            max_time: 1_000,
            min_volume: 0.0,
            max_volume,
        }
    }

    #[test]
    fn flat_price_series_maps_to_zero_unit() {
        let scales = ScaleMapper::new(extrema(15.0, 15.0, 1.0), Viewport::new(100, 100));
        assert_eq!(scales.height_unit(), 0.0);
        assert_eq!(scales.price_to_y(15.0), 0.0);
    }

    #[test]
    fn single_timestamp_maps_to_zero_width_unit() {
        let mut ext = extrema(20.0, 10.0, 1.0);
        ext.max_time = ext.min_time;
        let scales = ScaleMapper::new(ext, Viewport::new(100, 100));
        assert_eq!(scales.width_unit(), 0.0);
    }

    #[test]
    fn volume_height_uses_pane_fraction() {
        let scales = ScaleMapper::new(extrema(20.0, 10.0, 200.0), Viewport::new(100, 400));
        assert_eq!(scales.volume_height(100.0, 0.25), 50.0);
        assert_eq!(scales.volume_height(0.0, 0.25), 0.0);
    }
}
