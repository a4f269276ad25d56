use time::macros::format_description;
use time::{Date, OffsetDateTime};

const MS_PER_DAY: f64 = 86_400_000.0;

/// Parse the `YYYY-MM-DD` prefix of an API date into milliseconds since the
/// epoch at UTC midnight. Anything after the first ten characters (a time of
/// day) is ignored.
pub fn parse_quote_date(date: &str) -> Option<f64> {
    let day = date.get(..10)?;
    let parsed = Date::parse(day, format_description!("[year]-[month]-[day]")).ok()?;
    let seconds = parsed.midnight().assume_utc().unix_timestamp();
    Some(seconds as f64 * 1000.0)
}

fn to_datetime(millis: f64) -> Option<OffsetDateTime> {
    if !millis.is_finite() {
        return None;
    }
    OffsetDateTime::from_unix_timestamp_nanos(millis as i128 * 1_000_000).ok()
}

/// X-axis label in `%y-%b-%e` form, e.g. `23-Jan-1`
pub fn format_axis_label(millis: f64) -> String {
    let Some(dt) = to_datetime(millis) else {
        return String::new();
    };
    let month = dt.month().to_string();
    format!("{:02}-{}-{}", dt.year().rem_euclid(100), &month[..3], dt.day())
}

/// Full date for the tooltip header, e.g. `2023-01-01`
pub fn format_tooltip_date(millis: f64) -> String {
    to_datetime(millis)
        .and_then(|dt| dt.format(format_description!("[year]-[month]-[day]")).ok())
        .unwrap_or_default()
}

/// Padding used when all points share one timestamp
pub fn single_point_padding() -> f64 {
    MS_PER_DAY
}
