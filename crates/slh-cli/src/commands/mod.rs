//! CLI subcommand implementations.

pub mod months;
pub mod util;
pub mod visits;
pub mod workdays;
pub mod years;
