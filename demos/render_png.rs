//! Renders a synthetic OHLCV series into `candles.png`.
//!
//! Run with:
//! `cargo run --example render_png --features "cairo-backend telemetry"`

use std::fs::File;
use std::io::BufWriter;

use candle_raster::core::{Bar, Viewport};
use candle_raster::render::CairoRenderer;
use candle_raster::telemetry::init_default_tracing;
use candle_raster::{CandleChart, ChartConfig, ChartResult};

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;

fn synthetic_series(count: usize) -> Vec<Bar> {
    let mut close = 42_000.0_f64;
    (0..count)
        .map(|i| {
            let open = close;
            let drift = ((i as f64) * 0.37).sin() * 180.0 + ((i as f64) * 0.11).cos() * 90.0;
            close = (open + drift).max(1.0);
            let high = open.max(close) + 40.0 + (i % 7) as f64 * 12.0;
            let low = open.min(close) - 35.0 - (i % 5) as f64 * 10.0;
            let volume = 50.0 + ((i as f64) * 0.23).sin().abs() * 450.0;
            Bar::new(low, high, open, close, 1_709_251_200_000 + i as i64 * 3_600_000, volume)
        })
        .collect()
}

fn main() -> ChartResult<()> {
    let _ = init_default_tracing();

    let renderer = CairoRenderer::new(WIDTH as i32, HEIGHT as i32)?;
    let mut chart = CandleChart::new(
        renderer,
        Viewport::new(WIDTH, HEIGHT),
        ChartConfig::default(),
    )?;
    chart.render(&synthetic_series(160))?;

    let file = File::create("candles.png")
        .map_err(|err| candle_raster::ChartError::Backend(format!("create candles.png: {err}")))?;
    chart.renderer().write_png(&mut BufWriter::new(file))?;
    println!("{:?}", chart.renderer().last_stats());
    Ok(())
}
