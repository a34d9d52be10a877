//! Visits command: the work visits recorded in one month.

use std::io::Write;

use anyhow::Result;
use slh_core::{Source, WorkdayQuery, resolve_month, resolve_year};

use crate::commands::util::{format_duration, report};

pub fn run<W: Write>(writer: &mut W, source: &Source, query: WorkdayQuery) -> Result<()> {
    let Source::Hierarchy(root) = source else {
        writeln!(writer, "Listing visits needs an export directory, not a single file.")?;
        return Ok(());
    };
    let Some(month) = query.month() else {
        anyhow::bail!("a month is required to list visits");
    };

    let unit = match resolve_year(root, query.year()).and_then(|y| resolve_month(y, month)) {
        Ok(unit) => unit,
        Err(err) => return report(writer, err),
    };
    let visits = unit.work_visits()?;

    let label = format!("{}-{month:02}", query.year());
    if visits.is_empty() {
        writeln!(writer, "No work visits in {label}.")?;
        return Ok(());
    }

    writeln!(writer, "Work visits in {label}:")?;
    for visit in visits {
        let intervals = visit.time_ranges().len();
        let noun = if intervals == 1 { "interval" } else { "intervals" };
        let span = match (visit.time_ranges().first(), visit.time_ranges().last()) {
            (Some(first), Some(last)) => format!(
                "{}-{}",
                first.start().format("%H:%M"),
                last.end().format("%H:%M")
            ),
            _ => "-".to_string(),
        };
        writeln!(
            writer,
            "  {}  {intervals:>2} {noun:<9}  {span:<11}  {}",
            visit.date().format("%a %Y-%m-%d"),
            format_duration(visit.total_duration())
        )?;
    }
    writeln!(writer, "Total: {} days", visits.len())?;
    Ok(())
}
