//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Semantic Location History workday counter.
///
/// Counts the distinct days a location history export shows a visit to the
/// place tagged as work.
#[derive(Debug, Parser)]
#[command(name = "slh", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Count distinct workdays in a year, or in one month of it.
    Workdays {
        /// The year to count.
        year: i32,

        /// Restrict the count to one month (1-12).
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        /// Export directory or consolidated JSON file.
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the years found in an export directory.
    Years {
        /// Export directory.
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// List the months found for a year.
    Months {
        /// The year to inspect.
        year: i32,

        /// Export directory.
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Show the work visits of one month.
    Visits {
        /// The year to inspect.
        year: i32,

        /// The month to inspect (1-12).
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,

        /// Export directory.
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
}
