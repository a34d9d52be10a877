//! Shared utilities for CLI commands.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, Local, Month, TimeDelta};
use slh_core::{SlhError, Source, WorkdayQuery};

use crate::Config;

/// Opens the export named on the command line, falling back to the configured path.
pub fn open_source(path: Option<&Path>, config: &Config) -> Result<Source> {
    let path = path
        .or(config.path.as_deref())
        .context("no export path given; pass --path or set `path` in the config file")?;
    let source = Source::open(path)?;
    tracing::debug!(?source, "opened export");
    Ok(source)
}

/// Validates a year and optional month against the configured range.
pub fn build_query(year: i32, month: Option<u32>, config: &Config) -> Result<WorkdayQuery> {
    let current_year = Local::now().year();
    Ok(WorkdayQuery::new(year, month, config.min_year, current_year)?)
}

/// Prints a not-found style error instead of failing.
///
/// Returns the error unchanged when it is a real failure.
pub fn report<W: Write>(writer: &mut W, err: SlhError) -> Result<()> {
    if err.is_reportable() {
        writeln!(writer, "{err}")?;
        Ok(())
    } else {
        Err(err.into())
    }
}

/// English name of a month number.
pub fn month_name(month: u32) -> String {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map_or_else(|| month.to_string(), |m| m.name().to_string())
}

/// Formats a duration as "Xh Ym", or "Xm" below one hour.
///
/// Negative durations are shown as 0m.
pub fn format_duration(duration: TimeDelta) -> String {
    let total_minutes = duration.num_minutes();
    if total_minutes < 0 {
        return "0m".to_string();
    }
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours >= 1 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}
