/// Utilities for date and time formatting
///
/// The API returns dates as `YYYY-MM-DD`, RFC 3339 timestamps, SQL-style
/// `YYYY-MM-DD HH:MM:SS` or epoch milliseconds, depending on the endpoint.
/// Timestamps that carry an instant are shown as the calendar day in the
/// viewer's offset; bare dates and naive date-times are taken as written.
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Offset, Utc};
use serde_json::Value;

/// Placeholder the booking widget stores for an open-ended check-out
pub const UNSET_DATE: &str = "00-00-0000";

/// Parse a calendar date out of any of the shapes the API uses, as seen
/// from `offset`
pub fn parse_calendar_date(value: &Value, offset: FixedOffset) -> Option<NaiveDate> {
    match value {
        Value::String(s) => parse_date_str(s, offset),
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .map(|dt| dt.with_timezone(&offset).date_naive()),
        _ => None,
    }
}

fn parse_date_str(raw: &str, offset: FixedOffset) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&offset).date_naive());
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
}

/// Format as DD/MM/YYYY in `offset`
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_day_month_year(value: &Value, offset: FixedOffset) -> Option<String> {
    parse_calendar_date(value, offset).map(|date| date.format("%d/%m/%Y").to_string())
}

/// Format with an ordinal day in `offset`: "2024-03-01" -> "1st Mar 2024".
///
/// Empty values, the unset placeholder and unparsable input are returned
/// unchanged.
pub fn format_date_with_suffix(raw: &str, offset: FixedOffset) -> String {
    if raw.is_empty() || raw == UNSET_DATE {
        return raw.to_string();
    }
    let Some(date) = parse_date_str(raw, offset) else {
        return raw.to_string();
    };
    let day = date.day();
    format!("{}{} {}", day, ordinal_suffix(day), date.format("%b %Y"))
}

fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Offset of the browser's local time zone, UTC when it cannot be represented
pub fn local_offset() -> FixedOffset {
    let minutes = js_sys::Date::new_0().get_timezone_offset();
    FixedOffset::west_opt((minutes * 60.0) as i32).unwrap_or_else(|| Utc.fix())
}

/// Format a creation timestamp as "dd-M-yy, hh:mm AM" in the given offset.
/// Unparsable input is returned unchanged.
pub fn format_created_at(raw: &str, offset: FixedOffset) -> String {
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(dt) => dt
            .with_timezone(&offset)
            .format("%d-%-m-%y, %I:%M %p")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn utc() -> FixedOffset {
        Utc.fix()
    }

    fn ist() -> FixedOffset {
        FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap()
    }

    #[test]
    fn test_format_day_month_year() {
        let fmt = |v: Value| format_day_month_year(&v, utc());
        assert_eq!(fmt(json!("2024-03-15")).as_deref(), Some("15/03/2024"));
        assert_eq!(fmt(json!("2024-03-15T14:02:26.123Z")).as_deref(), Some("15/03/2024"));
        assert_eq!(fmt(json!("2024-12-31 23:59:59")).as_deref(), Some("31/12/2024"));
        assert_eq!(fmt(json!(1710460800000i64)).as_deref(), Some("15/03/2024"));
    }

    #[test]
    fn test_timestamps_use_the_viewer_offset() {
        // Midnight IST is stored as the previous evening in UTC
        let stored = json!("2024-04-30T18:30:00.000Z");
        assert_eq!(format_day_month_year(&stored, ist()).as_deref(), Some("01/05/2024"));
        assert_eq!(format_day_month_year(&stored, utc()).as_deref(), Some("30/04/2024"));

        let millis = json!(1714501800000i64);
        assert_eq!(format_day_month_year(&millis, ist()).as_deref(), Some("01/05/2024"));

        // Bare dates carry no instant and keep their day
        assert_eq!(
            format_day_month_year(&json!("2024-05-01"), FixedOffset::west_opt(8 * 3600).unwrap())
                .as_deref(),
            Some("01/05/2024")
        );
    }

    #[test]
    fn test_invalid_format() {
        for value in [json!("invalid"), json!("2024-02-30"), json!(null), json!({"d": 1})] {
            assert_eq!(format_day_month_year(&value, utc()), None, "{value}");
        }
    }

    #[test]
    fn test_format_date_with_suffix() {
        assert_eq!(format_date_with_suffix("2024-03-01", utc()), "1st Mar 2024");
        assert_eq!(format_date_with_suffix("2024-03-02", utc()), "2nd Mar 2024");
        assert_eq!(format_date_with_suffix("2024-03-03", utc()), "3rd Mar 2024");
        assert_eq!(format_date_with_suffix("2024-03-11", utc()), "11th Mar 2024");
        assert_eq!(format_date_with_suffix("2024-03-22", utc()), "22nd Mar 2024");
        assert_eq!(format_date_with_suffix(UNSET_DATE, utc()), UNSET_DATE);
        assert_eq!(format_date_with_suffix("", utc()), "");
        assert_eq!(format_date_with_suffix("soon", utc()), "soon");
        assert_eq!(format_date_with_suffix("2024-04-30T18:30:00Z", ist()), "1st May 2024");
    }

    #[test]
    fn test_format_created_at() {
        assert_eq!(format_created_at("2024-03-05T08:45:00Z", ist()), "05-3-24, 02:15 PM");
        assert_eq!(format_created_at("yesterday", ist()), "yesterday");
    }
}
