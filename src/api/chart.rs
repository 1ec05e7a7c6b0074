use tracing::debug;

use crate::core::{Bar, Viewport};
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

use super::{ChartConfig, build_render_frame};

/// Host-facing wrapper pairing a renderer with the canvas size and config.
///
/// The host calls [`CandleChart::render`] whenever the series, the canvas size
/// or the config changes. Every call is a full clear-and-redraw; no geometry
/// is cached between calls.
pub struct CandleChart<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    config: ChartConfig,
}

impl<R: Renderer> CandleChart<R> {
    pub fn new(renderer: R, viewport: Viewport, config: ChartConfig) -> ChartResult<Self> {
        viewport.ensure_valid()?;
        config.validate()?;
        Ok(Self {
            renderer,
            viewport,
            config,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        viewport.ensure_valid()?;
        debug!(width = viewport.width, height = viewport.height, "resize chart");
        self.viewport = viewport;
        Ok(())
    }

    pub fn set_config(&mut self, config: ChartConfig) -> ChartResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Builds the frame for `series` without drawing it.
    pub fn build_render_frame(&self, series: &[Bar]) -> ChartResult<RenderFrame> {
        build_render_frame(series, self.viewport, &self.config)
    }

    /// Runs one complete render pass and hands the frame to the renderer.
    pub fn render(&mut self, series: &[Bar]) -> ChartResult<RenderFrame> {
        let frame = self.build_render_frame(series)?;
        self.renderer.render(&frame)?;
        Ok(frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
