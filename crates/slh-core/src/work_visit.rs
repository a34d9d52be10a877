//! Per-day aggregation of workplace visits.

use chrono::{NaiveDate, TimeDelta};
use serde::Serialize;

use crate::time_range::TimeRange;

/// All workplace intervals recorded on one calendar day.
///
/// A date identifies exactly one visit within a month; further intervals on
/// the same date are appended to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkVisit {
    date: NaiveDate,
    time_ranges: Vec<TimeRange>,
}

impl WorkVisit {
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            time_ranges: Vec::new(),
        }
    }

    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time_ranges(&self) -> &[TimeRange] {
        &self.time_ranges
    }

    /// Sum of the recorded interval durations.
    pub fn total_duration(&self) -> TimeDelta {
        self.time_ranges
            .iter()
            .map(TimeRange::duration)
            .fold(TimeDelta::zero(), |acc, d| acc + d)
    }

    pub(crate) fn push(&mut self, range: TimeRange) {
        self.time_ranges.push(range);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::calendar::parse_timestamp;

    fn range(start: &str, end: &str) -> TimeRange {
        TimeRange::new(parse_timestamp(start).unwrap(), parse_timestamp(end).unwrap())
    }

    #[test]
    fn new_visit_has_no_ranges() {
        let visit = WorkVisit::new(NaiveDate::from_ymd_opt(2022, 1, 3).unwrap());
        assert!(visit.time_ranges().is_empty());
        assert_eq!(visit.total_duration(), TimeDelta::zero());
    }

    #[test]
    fn ranges_accumulate_in_order() {
        let mut visit = WorkVisit::new(NaiveDate::from_ymd_opt(2022, 1, 3).unwrap());
        visit.push(range("2022-01-03T08:00:00Z", "2022-01-03T12:00:00Z"));
        visit.push(range("2022-01-03T13:00:00Z", "2022-01-03T17:15:00Z"));

        assert_eq!(visit.time_ranges().len(), 2);
        assert_eq!(
            visit.time_ranges()[0].start(),
            parse_timestamp("2022-01-03T08:00:00Z").unwrap()
        );
        assert_eq!(visit.total_duration(), TimeDelta::minutes(8 * 60 + 15));
    }
}
