use std::io::Write;

use cairo::{Context, Format, ImageSurface, Operator};
use pango::FontDescription;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, DrawSurface, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub clears: usize,
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango + PangoCairo raster backend drawing into an ARGB32 image surface.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    context: Context,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        Ok(Self {
            surface,
            context,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Encodes the current surface content as PNG.
    pub fn write_png<W: Write>(&self, writer: &mut W) -> ChartResult<()> {
        self.surface.flush();
        self.surface
            .write_to_png(writer)
            .map_err(|err| ChartError::Backend(format!("failed to encode png: {err}")))
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_stats = CairoRenderStats::default();
        frame.replay_onto(self)
    }
}

impl DrawSurface for CairoRenderer {
    fn clear(&mut self, color: Color) -> ChartResult<()> {
        // Source replaces the previous frame even when the background is translucent.
        apply_color(&self.context, color);
        self.context.set_operator(Operator::Source);
        let painted = self
            .context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err));
        self.context.set_operator(Operator::Over);
        painted?;
        self.last_stats.clears += 1;
        Ok(())
    }

    fn fill_rect(&mut self, rect: &RectPrimitive) -> ChartResult<()> {
        apply_color(&self.context, rect.fill_color);
        self.context.rectangle(rect.x, rect.y, rect.width, rect.height);
        self.context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        self.last_stats.rects_drawn += 1;
        Ok(())
    }

    fn draw_line(&mut self, line: &LinePrimitive) -> ChartResult<()> {
        apply_color(&self.context, line.color);
        self.context.set_line_width(line.stroke_width);
        self.context.set_dash(line.stroke_style.dash_pattern(), 0.0);
        self.context.move_to(line.x1, line.y1);
        self.context.line_to(line.x2, line.y2);
        let stroked = self
            .context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err));
        self.context.set_dash(&[], 0.0);
        stroked?;
        self.last_stats.lines_drawn += 1;
        Ok(())
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        let layout = pangocairo::functions::create_layout(&self.context);
        let font_description = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, text_height) = layout.pixel_size();
        let x = match text.h_align {
            TextHAlign::Left => text.x,
            TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => text.x - f64::from(text_width),
        };

        // `text.y` is the bottom edge of the label; pango lays out from the top.
        apply_color(&self.context, text.color);
        self.context.move_to(x, text.y - f64::from(text_height));
        pangocairo::functions::show_layout(&self.context, &layout);
        self.last_stats.texts_drawn += 1;
        Ok(())
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
