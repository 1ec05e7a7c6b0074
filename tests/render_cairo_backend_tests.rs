#![cfg(feature = "cairo-backend")]

use candle_raster::core::{Bar, Viewport};
use candle_raster::render::{CairoRenderer, Color};
use candle_raster::{CandleChart, ChartConfig, ChartError};

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_every_command_in_one_pass() {
    let renderer = CairoRenderer::new(400, 300).expect("renderer");
    let config = ChartConfig::default()
        .with_right_margin_px(0.0)
        .with_grid_line_counts(3, 2);
    let mut chart = CandleChart::new(renderer, Viewport::new(400, 300), config).expect("chart");

    let series = vec![
        Bar::new(10.0, 20.0, 12.0, 18.0, 0, 100.0),
        Bar::new(11.0, 19.0, 18.0, 15.0, 60_000, 40.0),
    ];
    let frame = chart.render(&series).expect("render");

    let stats = chart.renderer().last_stats();
    assert_eq!(stats.clears, 1);
    assert_eq!(stats.rects_drawn, frame.rects().count());
    assert_eq!(stats.lines_drawn, frame.lines().count());
    assert_eq!(stats.texts_drawn, frame.texts().count());
    assert_eq!(stats.rects_drawn, 4);
}

#[test]
fn cairo_renderer_exports_png() {
    let renderer = CairoRenderer::new(120, 80).expect("renderer");
    let mut chart =
        CandleChart::new(renderer, Viewport::new(120, 80), ChartConfig::default()).expect("chart");
    chart
        .render(&[Bar::new(10.0, 20.0, 12.0, 18.0, 0, 100.0)])
        .expect("render");

    let mut png = Vec::new();
    chart.renderer().write_png(&mut png).expect("png export");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}

fn pixel_at(renderer: &CairoRenderer, x: usize, y: usize) -> [u8; 4] {
    let surface = renderer.surface();
    let offset = y * surface.stride() as usize + x * 4;
    let mut pixel = [0; 4];
    surface
        .with_data(|data| pixel.copy_from_slice(&data[offset..offset + 4]))
        .expect("surface data");
    pixel
}

#[test]
fn translucent_background_replaces_the_previous_frame() {
    let renderer = CairoRenderer::new(100, 100).expect("renderer");
    let config = ChartConfig::default()
        .with_right_margin_px(0.0)
        .with_grid_line_counts(0, 0)
        .with_background_color(Color::from_rgba8(0, 0, 0, 0x80));
    let mut chart = CandleChart::new(renderer, Viewport::new(100, 100), config).expect("chart");

    chart
        .render(&[Bar::new(10.0, 20.0, 12.0, 18.0, 0, 100.0)])
        .expect("render candle");
    // Inside the body, away from the wick. ARGB32 is stored as premultiplied BGRA.
    assert_ne!(pixel_at(chart.renderer(), 25, 50), [0, 0, 0, 0x80]);

    chart.render(&[]).expect("render empty");
    assert_eq!(pixel_at(chart.renderer(), 25, 50), [0, 0, 0, 0x80]);
}
