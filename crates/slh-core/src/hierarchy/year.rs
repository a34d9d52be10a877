//! Year directories and month file discovery.

use std::cell::OnceCell;
use std::fs;
use std::path::{Path, PathBuf};

use crate::calendar::month_from_name;
use crate::error::SlhError;
use crate::hierarchy::month::MonthUnit;

/// Parses a month file stem of the form `<year>_<MonthName>`.
///
/// Returns the month number when the year token matches `year`.
pub fn parse_month_file_stem(stem: &str, year: i32) -> Option<u32> {
    let mut tokens = stem.split('_');
    let (Some(year_token), Some(month_token), None) = (tokens.next(), tokens.next(), tokens.next())
    else {
        return None;
    };

    if year_token.parse::<i32>().ok()? != year {
        return None;
    }
    month_from_name(month_token)
}

/// A directory holding the month files of one year.
#[derive(Debug)]
pub struct YearUnit {
    path: PathBuf,
    year: i32,
    months: OnceCell<Vec<MonthUnit>>,
}

impl YearUnit {
    pub(crate) fn new(path: PathBuf, year: i32) -> Self {
        Self {
            path,
            year,
            months: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month files of this year, discovered on first access.
    ///
    /// Order follows the directory listing; sort by [`MonthUnit::month`] for
    /// chronological order.
    pub fn months(&self) -> Result<&[MonthUnit], SlhError> {
        if let Some(months) = self.months.get() {
            return Ok(months);
        }

        let mut months = Vec::new();
        for entry in fs::read_dir(&self.path).map_err(|e| SlhError::io(&self.path, e))? {
            let path = entry.map_err(|e| SlhError::io(&self.path, e))?.path();
            if !path.is_file() {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let Some(month) = parse_month_file_stem(stem, self.year) else {
                tracing::trace!(path = ?path, "skipping file without month name");
                continue;
            };
            months.push(MonthUnit::new(path, month));
        }
        tracing::debug!(year = self.year, months = months.len(), "discovered months");

        Ok(self.months.get_or_init(|| months))
    }

    pub fn find_month(&self, month: u32) -> Result<Option<&MonthUnit>, SlhError> {
        Ok(self.months()?.iter().find(|m| m.month() == month))
    }
}
