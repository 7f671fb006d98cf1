//! Point labels for the launch-window charts.

use chrono::NaiveDate;

/// Format a duration with 30-day "months": 75.0 → `"2m15d"`.
///
/// This is a coarse approximation, not calendar months.
pub fn format_months_days(days: f64) -> String {
    let months = (days / 30.0).floor() as i64;
    let rest = days.rem_euclid(30.0).floor() as i64;
    format!("{months}m{rest}d")
}

/// Short calendar label such as `"Mar 15"`.
pub fn date_label(date: NaiveDate) -> String {
    date.format("%b %d").to_string()
}
