//! Core logic for counting workdays in a Semantic Location History export.
//!
//! This crate contains:
//! - Hierarchy: lazy discovery of year directories and month files
//! - Extraction: work visits from the timeline schema, workdays from the segment schema
//! - Aggregation: distinct workday counts per month and per year

pub mod calendar;
mod error;
pub mod flat;
pub mod hierarchy;
pub mod query;
mod summary;
mod time_range;
mod work_visit;
pub mod workdays;

pub use error::SlhError;
pub use hierarchy::{MonthUnit, RootUnit, YearUnit};
pub use query::{DEFAULT_MIN_YEAR, Source, WorkdayQuery};
pub use summary::WorkdaySummary;
pub use time_range::TimeRange;
pub use work_visit::WorkVisit;
pub use workdays::{count_workdays, resolve_month, resolve_year, year_workdays};
