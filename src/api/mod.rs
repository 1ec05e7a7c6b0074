mod chart;
mod config;
mod frame_builder;
mod label_format;

pub use chart::CandleChart;
pub use config::ChartConfig;
pub use frame_builder::build_render_frame;
pub use label_format::{format_price_label, format_time_label};
