use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawSurface, LinePrimitive, RectPrimitive, TextPrimitive};

/// One draw call, in the order it must reach the surface.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect(RectPrimitive),
    Line(LinePrimitive),
    Text(TextPrimitive),
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Replaying a frame always clears the whole surface with `background` first,
/// then issues `commands` in order, so every pass is a full redraw.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub background: Color,
    pub commands: Vec<DrawCommand>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, background: Color) -> Self {
        Self {
            viewport,
            background,
            commands: Vec::new(),
        }
    }

    pub fn push_rect(&mut self, rect: RectPrimitive) {
        self.commands.push(DrawCommand::FillRect(rect));
    }

    pub fn push_line(&mut self, line: LinePrimitive) {
        self.commands.push(DrawCommand::Line(line));
    }

    pub fn push_text(&mut self, text: TextPrimitive) {
        self.commands.push(DrawCommand::Text(text));
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::FillRect(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text(text) => Some(text),
            _ => None,
        })
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.background.validate()?;

        for command in &self.commands {
            match command {
                DrawCommand::FillRect(rect) => rect.validate()?,
                DrawCommand::Line(line) => line.validate()?,
                DrawCommand::Text(text) => text.validate()?,
            }
        }

        Ok(())
    }

    /// `true` when the frame only clears the background.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clears `surface` and issues every command in order.
    pub fn replay_onto<S: DrawSurface + ?Sized>(&self, surface: &mut S) -> ChartResult<()> {
        surface.clear(self.background)?;
        for command in &self.commands {
            match command {
                DrawCommand::FillRect(rect) => surface.fill_rect(rect)?,
                DrawCommand::Line(line) => surface.draw_line(line)?,
                DrawCommand::Text(text) => surface.draw_text(text)?,
            }
        }
        Ok(())
    }
}
