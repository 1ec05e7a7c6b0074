use std::fmt::Write;

use chrono::DateTime;

/// Formats a price label with a fixed number of decimals.
#[must_use]
pub fn format_price_label(price: f64, precision: u8) -> String {
    if !price.is_finite() {
        return "-".to_owned();
    }
    format!("{price:.*}", usize::from(precision))
}

/// Formats a millisecond Unix timestamp in UTC.
///
/// Falls back to the raw integer when the timestamp is outside chrono's range
/// or the pattern cannot be rendered.
#[must_use]
pub fn format_time_label(open_time_millis: i64, pattern: &str) -> String {
    let Some(time) = DateTime::from_timestamp_millis(open_time_millis) else {
        return open_time_millis.to_string();
    };

    let mut out = String::new();
    if write!(out, "{}", time.format(pattern)).is_err() || out.is_empty() {
        return open_time_millis.to_string();
    }
    out
}
