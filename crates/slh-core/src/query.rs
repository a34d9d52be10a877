//! Validated workday queries and export source detection.

use std::path::{Path, PathBuf};

use crate::error::SlhError;
use crate::hierarchy::RootUnit;

/// Earliest year accepted unless configured otherwise.
pub const DEFAULT_MIN_YEAR: i32 = 2010;

/// A year and optional month, checked before any export data is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkdayQuery {
    year: i32,
    month: Option<u32>,
}

impl WorkdayQuery {
    /// Validates `year` against `min_year..=current_year` and `month` against 1..=12.
    pub fn new(
        year: i32,
        month: Option<u32>,
        min_year: i32,
        current_year: i32,
    ) -> Result<Self, SlhError> {
        if year < min_year || year > current_year {
            return Err(SlhError::YearOutOfRange {
                year,
                min: min_year,
                max: current_year,
            });
        }
        if let Some(m) = month.filter(|m| !(1..=12).contains(m)) {
            return Err(SlhError::MonthOutOfRange(m));
        }
        Ok(Self { year, month })
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> Option<u32> {
        self.month
    }
}

/// Where an export lives: a directory tree or one consolidated file.
#[derive(Debug)]
pub enum Source {
    Hierarchy(RootUnit),
    Flat(PathBuf),
}

impl Source {
    /// Directories are read as year/month trees, regular files as segment documents.
    pub fn open(path: &Path) -> Result<Self, SlhError> {
        if path.is_dir() {
            Ok(Self::Hierarchy(RootUnit::new(path)))
        } else if path.is_file() {
            Ok(Self::Flat(path.to_path_buf()))
        } else {
            Err(SlhError::PathNotFound(path.to_path_buf()))
        }
    }
}
