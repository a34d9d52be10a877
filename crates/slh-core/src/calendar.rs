//! Calendar helpers shared by both extraction paths.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, Weekday};

/// English month names, indexed by month number minus one.
const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Resolves a full English month name (any case) to its number.
pub fn month_from_name(name: &str) -> Option<u32> {
    let lowered = name.to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|m| *m == lowered)
        .and_then(|idx| u32::try_from(idx + 1).ok())
}

/// Parses an ISO-8601 timestamp, keeping the offset it was recorded with.
///
/// Timestamps without an offset are read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts);
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc().fixed_offset())
}

/// Saturday and Sunday.
pub fn is_weekend(ts: &DateTime<FixedOffset>) -> bool {
    matches!(ts.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_names_are_case_insensitive() {
        assert_eq!(month_from_name("January"), Some(1));
        assert_eq!(month_from_name("DECEMBER"), Some(12));
        assert_eq!(month_from_name("sePtember"), Some(9));
    }

    #[test]
    fn abbreviations_are_not_month_names() {
        assert_eq!(month_from_name("jan"), None);
        assert_eq!(month_from_name(""), None);
    }

    #[test]
    fn timestamps_keep_their_offset() {
        let ts = parse_timestamp("2022-01-03T23:30:00.000+02:00").unwrap();
        assert_eq!(ts.date_naive().to_string(), "2022-01-03");
        assert_eq!(ts.offset().local_minus_utc(), 7200);
    }

    #[test]
    fn timestamps_without_offset_are_utc() {
        let ts = parse_timestamp("2022-01-03T09:00:00").unwrap();
        assert_eq!(ts.offset().local_minus_utc(), 0);
        assert_eq!(ts.to_rfc3339(), "2022-01-03T09:00:00+00:00");

        let fractional = parse_timestamp("2022-01-03T09:00:00.250").unwrap();
        assert_eq!(fractional.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn unparseable_timestamp_is_none() {
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("2022-01-03").is_none());
    }

    #[test]
    fn weekend_detection() {
        // 2022-01-01 is a Saturday, 2022-01-03 a Monday
        assert!(is_weekend(&parse_timestamp("2022-01-01T09:00:00Z").unwrap()));
        assert!(is_weekend(&parse_timestamp("2022-01-02T09:00:00Z").unwrap()));
        assert!(!is_weekend(&parse_timestamp("2022-01-03T09:00:00Z").unwrap()));
    }
}
