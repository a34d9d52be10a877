//! Workdays command: distinct days at the workplace.
//!
//! Prints a single count when a month is given, otherwise a per-month
//! breakdown followed by the yearly total.

use std::io::Write;

use anyhow::Result;
use slh_core::{Source, WorkdayQuery, WorkdaySummary, count_workdays};

use crate::commands::util::{month_name, report};

pub fn run<W: Write>(
    writer: &mut W,
    source: &Source,
    query: WorkdayQuery,
    json: bool,
) -> Result<()> {
    let summary = match count_workdays(source, query) {
        Ok(summary) => summary,
        Err(err) => return report(writer, err),
    };
    tracing::debug!(total = summary.total(), "counted workdays");

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&summary)?)?;
    } else {
        write!(writer, "{}", format_summary(&summary, query.month()))?;
    }
    Ok(())
}

/// Formats a summary for the terminal.
pub fn format_summary(summary: &WorkdaySummary, month: Option<u32>) -> String {
    use std::fmt::Write;

    let mut output = String::new();
    if let Some(month) = month {
        writeln!(
            output,
            "Workdays in {}-{month:02}: {}",
            summary.year(),
            summary.days_in(month)
        )
        .unwrap();
        return output;
    }

    writeln!(output, "Workdays in {}", summary.year()).unwrap();
    for (month, days) in summary.months() {
        let name = month_name(*month);
        writeln!(output, "  {name:<10}{days:>4}").unwrap();
    }
    writeln!(output, "Total: {}", summary.total()).unwrap();
    output
}
