use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const DEFAULT_RATING: i32 = 5;
const INVALID_DATE: &str = "Invalid Date";

/// Parses a rating key such as `"4"`. Anything that is not an integer,
/// including a missing key, yields the top rating of 5.
pub fn parse_rating(rating_key: Option<&str>) -> i32 {
    rating_key
        .and_then(|key| key.trim().parse::<i32>().ok())
        .unwrap_or(DEFAULT_RATING)
}

/// Formats an employment period as `"Jun 2021 - Mar 2023"`.
///
/// A current position, or one without an end date, renders as
/// `"{start} - Present"`. Dates that cannot be parsed render as
/// `"Invalid Date"` instead of failing.
pub fn format_date_range(start: &str, end: Option<&str>, is_current: bool) -> String {
    let start = month_year(start);

    match end.filter(|e| !e.trim().is_empty()) {
        Some(end) if !is_current => format!("{} - {}", start, month_year(end)),
        _ => format!("{} - Present", start),
    }
}

fn month_year(raw: &str) -> String {
    parse_date(raw)
        .map(|date| date.format("%b %Y").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// Accepts RFC 3339 timestamps, naive timestamps, and `YYYY-MM-DD`,
/// `YYYY-MM` or `YYYY` dates. Date-only values are taken as calendar dates.
pub(crate) fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc).date_naive());
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(ts.date());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d") {
        return Some(date);
    }

    if raw.len() == 4 && raw.bytes().all(|b| b.is_ascii_digit()) {
        let year = raw.parse::<i32>().ok()?;
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }

    None
}
