//! Lenient date parsing for the `Date` property.
//!
//! Authors write dates in many ways, so this accepts the common ones rather
//! than insisting on a single format. ISO-8601 is still the recommendation.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

// %B also accepts abbreviated month names when parsing.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
];

/// Parse a date or date-time string.
///
/// Values carrying a UTC offset are normalized to UTC. Plain dates resolve to
/// midnight.
///
/// # Example
///
/// ```rust
/// use supermark::date::parse_date;
///
/// assert!(parse_date("2015-12-30T00:11:19.411Z").is_some());
/// assert!(parse_date("2015-03-12").is_some());
/// assert!(parse_date("March 12, 2015").is_some());
/// assert!(parse_date("Can't just put anything").is_none());
/// ```
pub fn parse_date(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Some(dt.naive_utc());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
                .or_else(|| parse_partial_date(input))
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// `YYYY-MM` and `YYYY`.
fn parse_partial_date(input: &str) -> Option<NaiveDate> {
    let (year, month) = match input.split_once('-') {
        Some((year, month)) => (year, month),
        None => (input, "1"),
    };
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if month.is_empty() || month.len() > 2 || !month.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_rfc3339_normalized_to_utc() {
        let dt = parse_date("2015-12-30T01:11:19+01:00").unwrap();
        assert_eq!((dt.hour(), dt.minute()), (0, 11));
    }

    #[test]
    fn test_rfc2822() {
        let dt = parse_date("Wed, 30 Dec 2015 00:11:19 +0000").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2015, 12, 30));
    }

    #[test]
    fn test_local_date_times() {
        assert!(parse_date("2015-12-30T00:11:19").is_some());
        assert!(parse_date("2015-12-30T00:11").is_some());
        assert!(parse_date("2015-12-30 00:11:19.5").is_some());
        assert!(parse_date("2015-12-30 00:11").is_some());
    }

    #[test]
    fn test_calendar_dates() {
        for input in [
            "2015-03-12",
            "2015/03/12",
            "03/12/2015",
            "March 12, 2015",
            "Mar 12 2015",
            "12 March 2015",
        ] {
            let dt = parse_date(input).unwrap_or_else(|| panic!("{input} should parse"));
            assert_eq!((dt.year(), dt.month(), dt.day()), (2015, 3, 12), "{input}");
        }
    }

    #[test]
    fn test_partial_dates() {
        let dt = parse_date("2015-03").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2015, 3, 1));
        let dt = parse_date("2015").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2015, 1, 1));
    }

    #[test]
    fn test_rejects_garbage() {
        for input in [
            "",
            "   ",
            "Can't just put anything",
            "2015-13-01",
            "2015-02-30",
            "15",
            "2015-",
            "tomorrow",
        ] {
            assert!(parse_date(input).is_none(), "{input:?} should not parse");
        }
    }
}
