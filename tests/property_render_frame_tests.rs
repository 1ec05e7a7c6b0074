use candle_raster::core::{Bar, CandleLayout, Viewport};
use candle_raster::render::DrawCommand;
use candle_raster::{ChartConfig, build_render_frame};
use proptest::prelude::*;

fn bar_strategy() -> impl Strategy<Value = (f64, f64, f64, f64, f64, bool)> {
    (
        1.0f64..500.0,
        0.0f64..50.0,
        0.0f64..1.0,
        0.0f64..1.0,
        0.0f64..1e6,
        any::<bool>(),
    )
}

fn build_series(raw: Vec<(f64, f64, f64, f64, f64, bool)>) -> Vec<Bar> {
    raw.into_iter()
        .enumerate()
        .map(|(i, (low, span, open_factor, close_factor, volume, doji))| {
            let open = low + open_factor * span;
            let close = if doji { open } else { low + close_factor * span };
            Bar::new(low, low + span, open, close, i as i64 * 60_000, volume)
        })
        .collect()
}

proptest! {
    #[test]
    fn body_and_volume_share_the_direction_color(
        raw in prop::collection::vec(bar_strategy(), 1..80),
        width in 50u32..2_000,
        height in 50u32..1_200,
        margin in 0.0f64..200.0,
    ) {
        let series = build_series(raw);
        let config = ChartConfig::default().with_right_margin_px(margin);
        let frame = build_render_frame(&series, Viewport::new(width, height), &config)
            .expect("frame");
        prop_assert!(frame.validate().is_ok());

        let layout = CandleLayout::compute(series.len(), f64::from(width), margin)
            .expect("layout");
        let visible = &series[layout.ignored_count..];
        let rects: Vec<_> = frame.rects().collect();
        prop_assert_eq!(rects.len(), visible.len() * 2);

        for (bar, pair) in visible.iter().zip(rects.chunks(2)) {
            let expected = if bar.close >= bar.open { config.up_color } else { config.down_color };
            prop_assert_eq!(pair[0].fill_color, expected);
            prop_assert_eq!(pair[1].fill_color, expected);
        }
    }

    #[test]
    fn every_body_is_at_least_one_pixel_tall(
        raw in prop::collection::vec(bar_strategy(), 1..80),
        height in 10u32..1_200,
    ) {
        let series = build_series(raw);
        let config = ChartConfig::default().with_right_margin_px(0.0);
        let frame = build_render_frame(&series, Viewport::new(800, height), &config)
            .expect("frame");

        let bodies = frame
            .commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::FillRect(rect) => Some(rect),
                _ => None,
            })
            .step_by(2);
        let mut count = 0;
        for body in bodies {
            prop_assert!(body.height >= 1.0);
            count += 1;
        }
        prop_assert_eq!(count, series.len());
    }
}
