use serde::{Deserialize, Serialize};

use crate::core::{CandleLayout, ScaleMapper};

/// One horizontal gridline at a price level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceGridLine {
    pub price: f64,
    pub y: f64,
}

/// One vertical gridline at a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeGridLine {
    pub time: i64,
    pub x: f64,
}

/// Evenly spaced fractions `0..=1` for `count` gridlines.
fn grid_fractions(count: usize) -> impl Iterator<Item = f64> {
    (0..count).map(move |index| {
        if count <= 1 {
            0.0
        } else {
            index as f64 / (count - 1) as f64
        }
    })
}

/// `count` price levels from `highest_price` down to `lowest_price`, both inclusive.
///
/// A flat range collapses to a single line.
#[must_use]
pub fn price_grid_lines(
    highest_price: f64,
    lowest_price: f64,
    count: usize,
    scales: &ScaleMapper,
) -> Vec<PriceGridLine> {
    let span = highest_price - lowest_price;
    let count = if span == 0.0 { count.min(1) } else { count };

    grid_fractions(count)
        .map(|fraction| {
            let price = highest_price - span * fraction;
            PriceGridLine {
                price,
                y: scales.price_to_y(price),
            }
        })
        .collect()
}

/// `count` timestamps from `min_time` to `max_time`, spread across the plot
/// width of `layout` so no line enters the reserved right margin.
///
/// The plot width only holds the visible candles, so callers pass the time
/// range of the visible bars for the labels to line up with them.
#[must_use]
pub fn time_grid_lines(
    max_time: i64,
    min_time: i64,
    count: usize,
    layout: &CandleLayout,
) -> Vec<TimeGridLine> {
    let span = max_time.saturating_sub(min_time) as f64;
    let plot_width = layout.plot_width();
    let count = if span == 0.0 { count.min(1) } else { count };

    grid_fractions(count)
        .map(|fraction| TimeGridLine {
            time: min_time.saturating_add((span * fraction).round() as i64),
            x: plot_width * fraction,
        })
        .collect()
}
