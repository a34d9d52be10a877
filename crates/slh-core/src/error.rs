//! Error types for export discovery and extraction.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving or querying a location history export.
#[derive(Debug, Error)]
pub enum SlhError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("year {year} is outside the accepted range {min}..={max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    #[error("month {0} is outside the accepted range 1..=12")]
    MonthOutOfRange(u32),

    #[error("Year {0} not found.")]
    YearNotFound(i32),

    #[error("Month {month} not found.")]
    MonthNotFound { year: i32, month: u32 },

    #[error("{path} has no `{field}` field")]
    MissingField { path: PathBuf, field: &'static str },
}

impl SlhError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    /// True for a requested year or month that the export does not contain.
    ///
    /// These are reported to the user rather than treated as failures.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::YearNotFound(_) | Self::MonthNotFound { .. })
    }

    /// True for conditions reported to the user without failing the command.
    pub const fn is_reportable(&self) -> bool {
        self.is_not_found() || matches!(self, Self::MissingField { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_variants_are_recoverable() {
        assert!(SlhError::YearNotFound(2021).is_not_found());
        assert!(SlhError::MonthNotFound { year: 2021, month: 3 }.is_not_found());
        assert!(!SlhError::MonthOutOfRange(13).is_not_found());
    }

    #[test]
    fn missing_field_is_reported_but_not_a_lookup_miss() {
        let err = SlhError::MissingField {
            path: PathBuf::from("Timeline.json"),
            field: "semanticSegments",
        };
        assert!(err.is_reportable());
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Timeline.json has no `semanticSegments` field");
    }

    #[test]
    fn not_found_messages_name_the_missing_unit() {
        assert_eq!(SlhError::YearNotFound(2019).to_string(), "Year 2019 not found.");
        assert_eq!(
            SlhError::MonthNotFound { year: 2019, month: 4 }.to_string(),
            "Month 4 not found."
        );
    }

    #[test]
    fn io_error_carries_path() {
        let err = SlhError::io(
            "/exports/2022",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("/exports/2022"));
        assert!(!err.is_reportable());
    }
}
