//! candle-raster: candlestick chart rendering core.
//!
//! Maps a chronological OHLCV series onto a raster canvas: candle bodies and
//! wicks, a volume strip along the bottom edge, price and time gridlines with
//! labels, and a dashed line at the latest close. Geometry lives in `core`,
//! draw commands and backends in `render`, and the render entry points in
//! `api`.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{CandleChart, ChartConfig, build_render_frame};
pub use error::{ChartError, ChartResult};
