//! Export root and year directory discovery.

use std::cell::OnceCell;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SlhError;
use crate::hierarchy::year::YearUnit;

/// The top-level directory of a hierarchical export.
#[derive(Debug)]
pub struct RootUnit {
    path: PathBuf,
    years: OnceCell<Vec<YearUnit>>,
}

impl RootUnit {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            years: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Year directories of the export, discovered on first access.
    ///
    /// Only subdirectories whose name is an integer are years.
    pub fn years(&self) -> Result<&[YearUnit], SlhError> {
        if let Some(years) = self.years.get() {
            return Ok(years);
        }

        let mut years = Vec::new();
        for entry in fs::read_dir(&self.path).map_err(|e| SlhError::io(&self.path, e))? {
            let path = entry.map_err(|e| SlhError::io(&self.path, e))?.path();
            if !path.is_dir() {
                continue;
            }
            let Some(year) = path
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(|n| n.parse::<i32>().ok())
            else {
                continue;
            };
            years.push(YearUnit::new(path, year));
        }
        tracing::debug!(path = ?self.path, years = years.len(), "discovered years");

        Ok(self.years.get_or_init(|| years))
    }

    pub fn find_year(&self, year: i32) -> Result<Option<&YearUnit>, SlhError> {
        Ok(self.years()?.iter().find(|y| y.year() == year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn numeric_directories_are_years() {
        let temp = TempDir::new().unwrap();
        for name in ["2019", "2020", "2022", "Takeout", "2022-old"] {
            fs::create_dir(temp.path().join(name)).unwrap();
        }
        fs::write(temp.path().join("2021"), "a file, not a year").unwrap();

        let root = RootUnit::new(temp.path());
        let mut years: Vec<i32> = root.years().unwrap().iter().map(YearUnit::year).collect();
        years.sort_unstable();

        assert_eq!(years, vec![2019, 2020, 2022]);
        assert_eq!(root.find_year(2020).unwrap().unwrap().year(), 2020);
        assert!(root.find_year(2021).unwrap().is_none());
    }

    #[test]
    fn years_are_listed_once() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("2020")).unwrap();

        let root = RootUnit::new(temp.path());
        let first = root.years().unwrap();
        fs::create_dir(temp.path().join("2021")).unwrap();
        let second = root.years().unwrap();

        assert!(std::ptr::eq(first, second));
        assert!(root.find_year(2021).unwrap().is_none());
    }

    #[test]
    fn empty_root_has_no_years() {
        let temp = TempDir::new().unwrap();
        assert!(RootUnit::new(temp.path()).years().unwrap().is_empty());
    }
}
