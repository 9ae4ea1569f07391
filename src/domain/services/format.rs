use chrono::{DateTime, NaiveDate};

// The feed's dateJoined strings are ISO-ish but not uniform; accept full
// RFC 3339 timestamps as well as bare dates.
pub(crate) fn parse_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = raw.parse::<chrono::NaiveDateTime>() {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Renders a stored date string as e.g. `02 Jan 2026`. Anything that does not
/// parse is echoed back unchanged rather than dropped.
pub fn format_date(raw: &str) -> String {
    match parse_day(raw) {
        Some(day) => day.format("%d %b %Y").to_string(),
        None => raw.to_string(),
    }
}
