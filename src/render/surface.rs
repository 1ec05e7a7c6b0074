use crate::error::ChartResult;
use crate::render::{Color, LinePrimitive, RectPrimitive, TextPrimitive};

/// Raster canvas the chart draws onto.
///
/// The chart only ever writes to a surface; it never reads pixels back.
pub trait DrawSurface {
    /// Fills the whole surface with `color`.
    fn clear(&mut self, color: Color) -> ChartResult<()>;

    fn fill_rect(&mut self, rect: &RectPrimitive) -> ChartResult<()>;

    fn draw_line(&mut self, line: &LinePrimitive) -> ChartResult<()>;

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()>;
}
