use candle_raster::core::{
    Bar, CandleDirection, Extrema, ScaleMapper, Viewport, project_volume_bar,
};
use candle_raster::render::NullRenderer;
use candle_raster::{CandleChart, ChartConfig, build_render_frame};

#[test]
fn volume_bar_grows_up_from_the_bottom_edge() {
    let series = vec![
        Bar::new(10.0, 20.0, 12.0, 18.0, 0, 50.0),
        Bar::new(10.0, 20.0, 18.0, 12.0, 1, 100.0),
    ];
    let scales = ScaleMapper::new(
        Extrema::extract(&series).expect("non-empty"),
        Viewport::new(100, 200),
    );

    let half = project_volume_bar(&series[0], CandleDirection::Up, &scales, 0.0, 50.0, 0.2);
    assert_eq!(half.height, 20.0);
    assert_eq!(half.y, 180.0);
    assert_eq!(half.x, 0.0);
    assert_eq!(half.width, 50.0);

    let full = project_volume_bar(&series[1], CandleDirection::Down, &scales, 50.0, 50.0, 0.2);
    assert_eq!(full.height, 40.0);
    assert_eq!(full.y, 160.0);
    assert_eq!(full.direction, CandleDirection::Down);
}

#[test]
fn all_zero_volumes_render_zero_height_bars() {
    let series = vec![
        Bar::new(10.0, 20.0, 12.0, 18.0, 0, 0.0),
        Bar::new(10.0, 20.0, 18.0, 12.0, 1, 0.0),
        Bar::new(10.0, 20.0, 14.0, 16.0, 2, 0.0),
    ];
    let config = ChartConfig::default()
        .with_right_margin_px(0.0)
        .with_grid_line_counts(0, 0);

    let frame = build_render_frame(&series, Viewport::new(300, 100), &config).expect("frame");
    frame.validate().expect("finite geometry");

    // body, volume per bar
    let rects: Vec<_> = frame.rects().collect();
    assert_eq!(rects.len(), 6);
    for volume in rects.iter().skip(1).step_by(2) {
        assert_eq!(volume.height, 0.0);
        assert_eq!(volume.y, 100.0);
    }

    let mut chart = CandleChart::new(NullRenderer::default(), Viewport::new(300, 100), config)
        .expect("chart");
    chart.render(&series).expect("zero volumes render");
    assert_eq!(chart.renderer().last_rect_count, 6);
}
