use crate::error::ChartResult;
use crate::render::{
    Color, DrawSurface, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextPrimitive,
};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content and counts what a real surface would
/// receive, so tests can catch invalid geometry without a raster backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_clear_count: usize,
    pub last_rect_count: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
    pub last_background: Option<Color>,
}

impl NullRenderer {
    fn reset(&mut self) {
        self.last_clear_count = 0;
        self.last_rect_count = 0;
        self.last_line_count = 0;
        self.last_text_count = 0;
        self.last_background = None;
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.reset();
        frame.replay_onto(self)
    }
}

impl DrawSurface for NullRenderer {
    fn clear(&mut self, color: Color) -> ChartResult<()> {
        self.last_clear_count += 1;
        self.last_background = Some(color);
        Ok(())
    }

    fn fill_rect(&mut self, _rect: &RectPrimitive) -> ChartResult<()> {
        self.last_rect_count += 1;
        Ok(())
    }

    fn draw_line(&mut self, _line: &LinePrimitive) -> ChartResult<()> {
        self.last_line_count += 1;
        Ok(())
    }

    fn draw_text(&mut self, _text: &TextPrimitive) -> ChartResult<()> {
        self.last_text_count += 1;
        Ok(())
    }
}
