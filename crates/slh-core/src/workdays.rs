//! Workday counting across both export layouts.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::error::SlhError;
use crate::flat;
use crate::hierarchy::{MonthUnit, RootUnit, YearUnit};
use crate::query::{Source, WorkdayQuery};
use crate::summary::WorkdaySummary;
use crate::work_visit::WorkVisit;

/// Resolves the year directory a query asks for.
pub fn resolve_year(root: &RootUnit, year: i32) -> Result<&YearUnit, SlhError> {
    root.find_year(year)?.ok_or(SlhError::YearNotFound(year))
}

/// Resolves one month file of a year.
pub fn resolve_month(year: &YearUnit, month: u32) -> Result<&MonthUnit, SlhError> {
    year.find_month(month)?.ok_or(SlhError::MonthNotFound {
        year: year.year(),
        month,
    })
}

/// Counts workdays of a year directory.
///
/// With a month, only the files of that month are read. A month may be
/// covered by more than one file, so dates are collected per month number and
/// each distinct date counts once. Months without any workday are left out.
pub fn year_workdays(year: &YearUnit, month: Option<u32>) -> Result<WorkdaySummary, SlhError> {
    let units: Vec<&MonthUnit> = year
        .months()?
        .iter()
        .filter(|m| month.is_none_or(|wanted| m.month() == wanted))
        .collect();
    if let Some(month) = month {
        if units.is_empty() {
            return Err(SlhError::MonthNotFound {
                year: year.year(),
                month,
            });
        }
    }

    let mut dates: BTreeMap<u32, BTreeSet<NaiveDate>> = BTreeMap::new();
    for unit in units {
        let visits = unit.work_visits()?;
        tracing::debug!(path = ?unit.path(), visits = visits.len(), "counting month");
        dates
            .entry(unit.month())
            .or_default()
            .extend(visits.iter().map(WorkVisit::date));
    }

    let mut summary = WorkdaySummary::new(year.year());
    for (month, days) in dates {
        summary.add_month(month, days.len());
    }
    Ok(summary)
}

/// Answers a workday query against either kind of export.
pub fn count_workdays(source: &Source, query: WorkdayQuery) -> Result<WorkdaySummary, SlhError> {
    match source {
        Source::Hierarchy(root) => {
            let year = resolve_year(root, query.year())?;
            year_workdays(year, query.month())
        }
        Source::Flat(path) => flat::read_workdays(path, query.year(), query.month()),
    }
}
