pub mod candlestick;
pub mod extrema;
pub mod grid;
pub mod layout;
pub mod primitives;
pub mod scale;
pub mod types;
pub mod volume;

pub use candlestick::{
    CandleDirection, CandleGeometry, MIN_BODY_HEIGHT_PX, WICK_WIDTH_PX, calc_body_height,
    calc_top_body, project_candle, project_candles,
};
pub use extrema::Extrema;
pub use grid::{PriceGridLine, TimeGridLine, price_grid_lines, time_grid_lines};
pub use layout::CandleLayout;
pub use scale::ScaleMapper;
pub use types::{Bar, Viewport};
pub use volume::{VolumeBarGeometry, project_volume_bar};
