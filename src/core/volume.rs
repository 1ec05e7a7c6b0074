use serde::{Deserialize, Serialize};

use crate::core::{Bar, CandleDirection, ScaleMapper};

/// Volume bar anchored to the bottom edge of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeBarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub direction: CandleDirection,
}

/// Sizes a volume bar against the largest volume of the series.
///
/// The bar grows upward from the canvas bottom and is at most
/// `pane_fraction` of the canvas height tall. `direction` comes from the
/// candle so both share one color.
#[must_use]
pub fn project_volume_bar(
    bar: &Bar,
    direction: CandleDirection,
    scales: &ScaleMapper,
    slot_offset: f64,
    slot_width: f64,
    pane_fraction: f64,
) -> VolumeBarGeometry {
    let height = scales.volume_height(bar.volume, pane_fraction);
    VolumeBarGeometry {
        x: slot_offset,
        y: scales.canvas_height() - height,
        width: slot_width,
        height,
        direction,
    }
}
