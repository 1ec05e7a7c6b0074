use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::core::CandleDirection;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Render configuration.
///
/// This type is serializable so host applications can load chart setup from
/// JSON without inventing their own ad-hoc format. Missing fields take their
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Width of the label gutter reserved on the right edge.
    pub right_margin_px: f64,
    pub horizontal_grid_line_count: usize,
    pub vertical_grid_line_count: usize,
    pub background_color: Color,
    pub up_color: Color,
    pub down_color: Color,
    pub grid_color: Color,
    pub text_color: Color,
    pub price_line_color: Color,
    /// Maximum share of the canvas height taken by the tallest volume bar.
    pub volume_pane_fraction: f64,
    pub font_size_px: f64,
    /// Decimals shown on price labels.
    pub price_precision: u8,
    /// `chrono` strftime pattern for time labels, rendered in UTC.
    pub time_label_format: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            right_margin_px: 80.0,
            horizontal_grid_line_count: 8,
            vertical_grid_line_count: 6,
            background_color: Color::BLACK,
            up_color: Color::from_rgb8(0x26, 0xa6, 0x9a),
            down_color: Color::from_rgb8(0xef, 0x53, 0x50),
            grid_color: Color::from_rgba8(0xff, 0xff, 0xff, 0x1f),
            text_color: Color::from_rgb8(0xc7, 0xcc, 0xd6),
            price_line_color: Color::from_rgb8(0x29, 0x62, 0xff),
            volume_pane_fraction: 0.2,
            font_size_px: 11.0,
            price_precision: 2,
            time_label_format: "%m-%d %H:%M".to_owned(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn with_right_margin_px(mut self, right_margin_px: f64) -> Self {
        self.right_margin_px = right_margin_px;
        self
    }

    #[must_use]
    pub fn with_grid_line_counts(mut self, horizontal: usize, vertical: usize) -> Self {
        self.horizontal_grid_line_count = horizontal;
        self.vertical_grid_line_count = vertical;
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    #[must_use]
    pub fn with_direction_colors(mut self, up: Color, down: Color) -> Self {
        self.up_color = up;
        self.down_color = down;
        self
    }

    #[must_use]
    pub fn with_volume_pane_fraction(mut self, fraction: f64) -> Self {
        self.volume_pane_fraction = fraction;
        self
    }

    /// Body, wick and volume color for a direction.
    #[must_use]
    pub fn direction_color(&self, direction: CandleDirection) -> Color {
        match direction {
            CandleDirection::Up => self.up_color,
            CandleDirection::Down => self.down_color,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.right_margin_px.is_finite() || self.right_margin_px < 0.0 {
            return Err(ChartError::InvalidConfig(
                "right margin must be finite and >= 0".to_owned(),
            ));
        }
        if !self.volume_pane_fraction.is_finite()
            || !(0.0..=1.0).contains(&self.volume_pane_fraction)
        {
            return Err(ChartError::InvalidConfig(
                "volume pane fraction must be in [0, 1]".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        if self.time_label_format.trim().is_empty() {
            return Err(ChartError::InvalidConfig(
                "time label format must not be empty".to_owned(),
            ));
        }
        if StrftimeItems::new(&self.time_label_format).any(|item| matches!(item, Item::Error)) {
            return Err(ChartError::InvalidConfig(format!(
                "time label format `{}` is not a valid strftime pattern",
                self.time_label_format
            )));
        }

        for (name, color) in [
            ("background_color", self.background_color),
            ("up_color", self.up_color),
            ("down_color", self.down_color),
            ("grid_color", self.grid_color),
            ("text_color", self.text_color),
            ("price_line_color", self.price_line_color),
        ] {
            color
                .validate()
                .map_err(|err| ChartError::InvalidConfig(format!("{name}: {err}")))?;
        }

        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to parse chart config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize chart config: {e}"))
        })
    }
}
