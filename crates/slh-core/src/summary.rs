//! Workday counts per month and for a whole year.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Distinct workdays of one year, broken down by month number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkdaySummary {
    year: i32,
    months: BTreeMap<u32, usize>,
    total: usize,
}

impl WorkdaySummary {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            ..Self::default()
        }
    }

    /// Groups a set of workday dates by month.
    pub fn from_dates(year: i32, dates: &BTreeSet<NaiveDate>) -> Self {
        let mut summary = Self::new(year);
        for date in dates {
            *summary.months.entry(date.month()).or_default() += 1;
        }
        summary.total = dates.len();
        summary
    }

    /// Records the day count of one month and adds it to the total.
    ///
    /// Months without days are not listed.
    pub fn add_month(&mut self, month: u32, days: usize) {
        if days == 0 {
            return;
        }
        *self.months.entry(month).or_default() += days;
        self.total += days;
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn months(&self) -> &BTreeMap<u32, usize> {
        &self.months
    }

    /// Days counted for `month`, zero when the month has none.
    pub fn days_in(&self, month: u32) -> usize {
        self.months.get(&month).copied().unwrap_or(0)
    }

    pub const fn total(&self) -> usize {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn from_dates_groups_by_month() {
        let dates: BTreeSet<_> = [date(2023, 1, 2), date(2023, 1, 3), date(2023, 4, 11)]
            .into_iter()
            .collect();

        let summary = WorkdaySummary::from_dates(2023, &dates);

        assert_eq!(summary.days_in(1), 2);
        assert_eq!(summary.days_in(4), 1);
        assert_eq!(summary.days_in(2), 0);
        assert_eq!(summary.total(), 3);
    }

    #[test]
    fn add_month_accumulates_total() {
        let mut summary = WorkdaySummary::new(2022);
        summary.add_month(3, 12);
        summary.add_month(1, 20);
        summary.add_month(7, 0);

        assert_eq!(summary.months().keys().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(summary.total(), 32);
    }

    #[test]
    fn serializes_month_keys() {
        let mut summary = WorkdaySummary::new(2022);
        summary.add_month(2, 5);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "year": 2022, "months": { "2": 5 }, "total": 5 })
        );
    }
}
