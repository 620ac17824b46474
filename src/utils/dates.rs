//! Date parsing and normalization

use anyhow::{Result, anyhow};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use log::warn;

/// Lower bound meaning "all events"
pub const DEFAULT_DATETIME: DateTime<Utc> = DateTime::<Utc>::UNIX_EPOCH;

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parse a user-supplied date into UTC
///
/// Accepted forms:
/// - RFC 3339: `2018-04-13T15:45:00Z`, `2018-04-13T17:45:00+02:00`
/// - naive date and time, read as UTC: `2018-04-13 15:45:00`, `2018-04-13T15:45`
/// - date only, midnight UTC: `2018-04-13`
pub fn str_to_datetime(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Ok(datetime_to_utc(&datetime));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| anyhow!("Invalid date format: '{}'", value))
}

/// Convert a timestamp in any zone to UTC
pub fn datetime_to_utc<Tz: TimeZone>(datetime: &DateTime<Tz>) -> DateTime<Utc> {
    datetime.with_timezone(&Utc)
}

/// Parse an optional `--from-date`, falling back to [`DEFAULT_DATETIME`]
///
/// An unparsable value is logged and treated like a missing one.
pub fn parse_from_date(value: Option<&str>) -> DateTime<Utc> {
    match value {
        None => DEFAULT_DATETIME,
        Some(value) => str_to_datetime(value).unwrap_or_else(|err| {
            warn!("{}; fetching all events", err);
            DEFAULT_DATETIME
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn test_str_to_datetime_rfc3339() {
        assert_eq!(
            str_to_datetime("2018-04-13T15:45:00Z").unwrap(),
            utc(2018, 4, 13, 15, 45, 0)
        );
        assert_eq!(
            str_to_datetime("2018-04-13T17:45:00+02:00").unwrap(),
            utc(2018, 4, 13, 15, 45, 0)
        );
    }

    #[test]
    fn test_str_to_datetime_naive() {
        assert_eq!(
            str_to_datetime("2018-04-13 15:45:00").unwrap(),
            utc(2018, 4, 13, 15, 45, 0)
        );
        assert_eq!(
            str_to_datetime("2018-04-13T15:45").unwrap(),
            utc(2018, 4, 13, 15, 45, 0)
        );
    }

    #[test]
    fn test_str_to_datetime_date_only() {
        assert_eq!(str_to_datetime("1970-01-01").unwrap(), DEFAULT_DATETIME);
        assert_eq!(
            str_to_datetime(" 2018-04-13 ").unwrap(),
            utc(2018, 4, 13, 0, 0, 0)
        );
    }

    #[test]
    fn test_str_to_datetime_invalid() {
        assert!(str_to_datetime("yesterday").is_err());
        assert!(str_to_datetime("2018-13-40").is_err());
        assert!(str_to_datetime("").is_err());
    }

    #[test]
    fn test_datetime_to_utc() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let local = offset.with_ymd_and_hms(2018, 4, 13, 17, 45, 0).unwrap();
        assert_eq!(datetime_to_utc(&local), utc(2018, 4, 13, 15, 45, 0));
    }

    #[test]
    fn test_parse_from_date_fallback() {
        assert_eq!(parse_from_date(None), DEFAULT_DATETIME);
        assert_eq!(parse_from_date(Some("not a date")), DEFAULT_DATETIME);
        assert_eq!(
            parse_from_date(Some("2018-04-13")),
            utc(2018, 4, 13, 0, 0, 0)
        );
    }
}
