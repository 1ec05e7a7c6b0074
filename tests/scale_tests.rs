use approx::assert_relative_eq;
use candle_raster::core::{Extrema, ScaleMapper, Viewport};
use proptest::prelude::*;

fn extrema(highest: f64, lowest: f64, min_time: i64, max_time: i64, max_volume: f64) -> Extrema {
    Extrema {
        highest_price: highest,
        lowest_price: lowest,
        min_time,
        max_time,
        min_volume: 0.0,
        max_volume,
    }
}

#[test]
fn height_unit_is_pixels_per_price_unit() {
    let scales = ScaleMapper::new(extrema(20.0, 10.0, 0, 0, 100.0), Viewport::new(100, 100));
    assert_eq!(scales.height_unit(), 10.0);
    assert_eq!(scales.price_to_y(20.0), 0.0);
    assert_eq!(scales.price_to_y(10.0), 100.0);
    assert_eq!(scales.price_to_y(18.0), 20.0);
}

#[test]
fn width_unit_is_documented_but_time_linear() {
    let scales = ScaleMapper::new(extrema(20.0, 10.0, 0, 4_000, 1.0), Viewport::new(800, 100));
    assert_relative_eq!(scales.width_unit(), 0.2);
}

#[test]
fn zero_max_volume_yields_zero_heights() {
    let scales = ScaleMapper::new(extrema(20.0, 10.0, 0, 10, 0.0), Viewport::new(100, 100));
    assert_eq!(scales.volume_ratio(0.0), 0.0);
    assert_eq!(scales.volume_height(0.0, 0.2), 0.0);
}

proptest! {
    #[test]
    fn scale_factors_are_finite_and_non_negative(
        lowest in 0.0f64..10_000.0,
        span in prop_oneof![Just(0.0f64), 0.0f64..10_000.0],
        max_volume in prop_oneof![Just(0.0f64), 0.0f64..1e9],
        volume_factor in 0.0f64..1.0,
        width in 1u32..4_000,
        height in 1u32..4_000,
    ) {
        let scales = ScaleMapper::new(
            extrema(lowest + span, lowest, 0, 60_000, max_volume),
            Viewport::new(width, height),
        );

        prop_assert!(scales.height_unit().is_finite());
        prop_assert!(scales.height_unit() >= 0.0);
        if span == 0.0 {
            prop_assert_eq!(scales.height_unit(), 0.0);
        }

        let ratio = scales.volume_ratio(max_volume * volume_factor);
        prop_assert!(ratio.is_finite());
        prop_assert!((0.0..=1.0 + 1e-12).contains(&ratio));
    }
}
