use serde::{Deserialize, Serialize};

/// Horizontal slot layout for one render pass.
///
/// Every bar of the series gets a slot of `canvas_width / len` pixels. The
/// earliest `ignored_count` bars are dropped so the remaining ones end before
/// the reserved right margin; history is dropped, never compressed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleLayout {
    pub slot_width: f64,
    pub ignored_count: usize,
    pub visible_count: usize,
}

impl CandleLayout {
    /// Returns `None` for an empty series.
    ///
    /// A negative or non-finite margin reserves nothing. A margin wider than
    /// the canvas ignores every bar, which is a valid, empty layout.
    #[must_use]
    pub fn compute(series_len: usize, canvas_width: f64, right_margin_px: f64) -> Option<Self> {
        if series_len == 0 {
            return None;
        }

        let slot_width = canvas_width / series_len as f64;
        let reserves_margin = right_margin_px.is_finite() && right_margin_px > 0.0;
        let ignored_count = if slot_width > 0.0 && reserves_margin {
            let ignored = (right_margin_px / slot_width).floor();
            if ignored >= series_len as f64 {
                series_len
            } else {
                ignored as usize
            }
        } else {
            0
        };

        Some(Self {
            slot_width,
            ignored_count,
            visible_count: series_len - ignored_count,
        })
    }

    /// Left edge of the slot at visible index `index`.
    #[must_use]
    pub fn slot_offset(&self, index: usize) -> f64 {
        index as f64 * self.slot_width
    }

    /// Horizontal center of the slot at visible index `index`.
    #[must_use]
    pub fn slot_center(&self, index: usize) -> f64 {
        self.slot_offset(index) + self.slot_width / 2.0
    }

    /// Width covered by the visible candles, i.e. the region left of the gutter.
    #[must_use]
    pub fn plot_width(&self) -> f64 {
        self.visible_count as f64 * self.slot_width
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible_count == 0
    }
}
