//! Months command: list the month files found for a year.

use std::io::Write;

use anyhow::Result;
use slh_core::{MonthUnit, Source, WorkdayQuery, resolve_year};

use crate::commands::util::report;

pub fn run<W: Write>(writer: &mut W, source: &Source, query: WorkdayQuery) -> Result<()> {
    let Source::Hierarchy(root) = source else {
        writeln!(writer, "Listing months needs an export directory, not a single file.")?;
        return Ok(());
    };

    let year = match resolve_year(root, query.year()) {
        Ok(year) => year,
        Err(err) => return report(writer, err),
    };

    tracing::debug!(path = ?year.path(), "listing months");
    let mut months: Vec<u32> = year.months()?.iter().map(MonthUnit::month).collect();
    months.sort_unstable();

    if months.is_empty() {
        writeln!(writer, "No months found for {}.", query.year())?;
        return Ok(());
    }

    let list: Vec<String> = months.iter().map(ToString::to_string).collect();
    writeln!(writer, "Months found in {}: {}", query.year(), list.join(", "))?;
    Ok(())
}
