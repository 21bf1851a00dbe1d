//! Parsing of user-typed values.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Accepts "now", RFC 3339, "YYYY-MM-DD HH:MM" (UTC) or a bare date
/// (midnight UTC).
pub fn parse_when(value: &str) -> Result<DateTime<Utc>, String> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("now") {
        return Ok(Utc::now());
    }
    if let Ok(at) = DateTime::parse_from_rfc3339(value) {
        return Ok(at.with_timezone(&Utc));
    }
    for fmt in DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, fmt) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }
    Err(format!(
        "cannot parse '{value}' as a date (use 'now', RFC 3339 or 'YYYY-MM-DD HH:MM')"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_supported_forms() {
        let expected = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        assert_eq!(parse_when("2024-05-01T09:30:00Z"), Ok(expected));
        assert_eq!(parse_when("2024-05-01T11:30:00+02:00"), Ok(expected));
        assert_eq!(parse_when("2024-05-01 09:30"), Ok(expected));
        assert_eq!(parse_when("2024-05-01T09:30"), Ok(expected));
        assert_eq!(
            parse_when("2024-05-01"),
            Ok(Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn now_is_close_to_wall_clock() {
        let parsed = parse_when("NOW").unwrap();
        assert!((Utc::now() - parsed).num_seconds().abs() < 5);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_when("yesterday-ish").is_err());
    }
}
