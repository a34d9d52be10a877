//! Directory-tree exports: root, year directories and month files.
//!
//! Every level discovers its children lazily and keeps them for its whole
//! lifetime, so repeated queries never touch the filesystem again.

pub mod month;
pub mod root;
pub mod year;

pub use month::{MonthUnit, extract_work_visits};
pub use root::RootUnit;
pub use year::YearUnit;
