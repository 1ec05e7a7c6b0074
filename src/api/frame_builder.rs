use tracing::{debug, trace};

use crate::core::{
    Bar, CandleGeometry, CandleLayout, Extrema, ScaleMapper, Viewport, WICK_WIDTH_PX,
    price_grid_lines, project_candles, project_volume_bar, time_grid_lines,
};
use crate::error::ChartResult;
use crate::render::{
    LinePrimitive, LineStrokeStyle, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::ChartConfig;
use super::label_format::{format_price_label, format_time_label};

const GRID_LINE_WIDTH_PX: f64 = 1.0;
const PRICE_LINE_WIDTH_PX: f64 = 1.0;
const LABEL_PADDING_PX: f64 = 4.0;

/// Builds the complete draw list for one render pass.
///
/// Pure function of its inputs: nothing computed here outlives the call. An
/// empty series produces a frame that only clears the background.
pub fn build_render_frame(
    series: &[Bar],
    viewport: Viewport,
    config: &ChartConfig,
) -> ChartResult<RenderFrame> {
    viewport.ensure_valid()?;
    config.validate()?;

    let mut frame = RenderFrame::new(viewport, config.background_color);
    let (Some(extrema), Some(layout)) = (
        Extrema::extract(series),
        CandleLayout::compute(series.len(), viewport.width_px(), config.right_margin_px),
    ) else {
        trace!("empty series, clearing background only");
        return Ok(frame);
    };

    let scales = ScaleMapper::new(extrema, viewport);
    debug!(
        bars = series.len(),
        visible = layout.visible_count,
        ignored = layout.ignored_count,
        slot_width = layout.slot_width,
        height_unit = scales.height_unit(),
        "building candlestick frame"
    );

    let mut builder = FrameBuilder {
        frame: &mut frame,
        config,
        viewport,
        scales: &scales,
    };
    let visible = series.get(layout.ignored_count..).unwrap_or_default();
    builder.push_price_grid(&extrema);
    // Time labels describe the candles under them, not the dropped history.
    builder.push_time_grid(&Extrema::extract(visible).unwrap_or(extrema), &layout);

    let candles = project_candles(series, &layout, &scales);
    for (index, (bar, candle)) in visible.iter().zip(&candles).enumerate() {
        builder.push_candle(candle);
        builder.push_volume_bar(bar, candle, layout.slot_offset(index), layout.slot_width);
    }
    if let (Some(last_bar), Some(last_candle)) = (visible.last(), candles.last()) {
        builder.push_price_line(last_bar, last_candle);
    }

    Ok(frame)
}

struct FrameBuilder<'a> {
    frame: &'a mut RenderFrame,
    config: &'a ChartConfig,
    viewport: Viewport,
    scales: &'a ScaleMapper,
}

impl FrameBuilder<'_> {
    fn push_price_grid(&mut self, extrema: &Extrema) {
        let width = self.viewport.width_px();
        for line in price_grid_lines(
            extrema.highest_price,
            extrema.lowest_price,
            self.config.horizontal_grid_line_count,
            self.scales,
        ) {
            self.frame.push_line(LinePrimitive::new(
                0.0,
                line.y,
                width,
                line.y,
                GRID_LINE_WIDTH_PX,
                self.config.grid_color,
            ));
            self.frame.push_text(TextPrimitive::new(
                format_price_label(line.price, self.config.price_precision),
                width - LABEL_PADDING_PX,
                (line.y - LABEL_PADDING_PX / 2.0).max(self.config.font_size_px),
                self.config.font_size_px,
                self.config.text_color,
                TextHAlign::Right,
            ));
        }
    }

    fn push_time_grid(&mut self, extrema: &Extrema, layout: &CandleLayout) {
        let height = self.viewport.height_px();
        let lines = time_grid_lines(
            extrema.max_time,
            extrema.min_time,
            self.config.vertical_grid_line_count,
            layout,
        );
        let last_index = lines.len().saturating_sub(1);
        for (index, line) in lines.into_iter().enumerate() {
            self.frame.push_line(LinePrimitive::new(
                line.x,
                0.0,
                line.x,
                height,
                GRID_LINE_WIDTH_PX,
                self.config.grid_color,
            ));
            // Edge labels hug the plot so neither spills into the price gutter.
            let h_align = if index == 0 {
                TextHAlign::Left
            } else if index == last_index {
                TextHAlign::Right
            } else {
                TextHAlign::Center
            };
            self.frame.push_text(TextPrimitive::new(
                format_time_label(line.time, &self.config.time_label_format),
                line.x,
                height - LABEL_PADDING_PX / 2.0,
                self.config.font_size_px,
                self.config.text_color,
                h_align,
            ));
        }
    }

    fn push_candle(&mut self, candle: &CandleGeometry) {
        let color = self.config.direction_color(candle.direction);
        self.frame.push_rect(RectPrimitive::new(
            candle.body_left,
            candle.body_top,
            candle.body_width,
            candle.body_height,
            color,
        ));
        self.frame.push_line(LinePrimitive::new(
            candle.wick_x,
            candle.wick_top,
            candle.wick_x,
            candle.wick_top + candle.wick_height,
            WICK_WIDTH_PX,
            color,
        ));
    }

    fn push_volume_bar(&mut self, bar: &Bar, candle: &CandleGeometry, offset: f64, width: f64) {
        let volume = project_volume_bar(
            bar,
            candle.direction,
            self.scales,
            offset,
            width,
            self.config.volume_pane_fraction,
        );
        self.frame.push_rect(RectPrimitive::new(
            volume.x,
            volume.y,
            volume.width,
            volume.height,
            self.config.direction_color(volume.direction),
        ));
    }

    fn push_price_line(&mut self, last_bar: &Bar, last_candle: &CandleGeometry) {
        let width = self.viewport.width_px();
        let y = last_candle.close_y;
        self.frame.push_line(
            LinePrimitive::new(
                0.0,
                y,
                width,
                y,
                PRICE_LINE_WIDTH_PX,
                self.config.price_line_color,
            )
            .with_stroke_style(LineStrokeStyle::Dashed),
        );
        self.frame.push_text(TextPrimitive::new(
            format_price_label(last_bar.close, self.config.price_precision),
            width - LABEL_PADDING_PX,
            (y - LABEL_PADDING_PX / 2.0).max(self.config.font_size_px),
            self.config.font_size_px,
            self.config.price_line_color,
            TextHAlign::Right,
        ));
    }
}
