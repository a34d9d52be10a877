use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use slh_cli::commands::util::{build_query, open_source};
use slh_cli::commands::{months, visits, workdays, years};
use slh_cli::{Cli, Commands, Config};

fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let mut stdout = io::stdout().lock();

    match &cli.command {
        Some(Commands::Workdays {
            year,
            month,
            path,
            json,
        }) => {
            let config = load_config(cli.config.as_deref())?;
            let query = build_query(*year, *month, &config)?;
            let source = open_source(path.as_deref(), &config)?;
            workdays::run(&mut stdout, &source, query, *json)?;
        }
        Some(Commands::Years { path }) => {
            let config = load_config(cli.config.as_deref())?;
            let source = open_source(path.as_deref(), &config)?;
            years::run(&mut stdout, &source)?;
        }
        Some(Commands::Months { year, path }) => {
            let config = load_config(cli.config.as_deref())?;
            let query = build_query(*year, None, &config)?;
            let source = open_source(path.as_deref(), &config)?;
            months::run(&mut stdout, &source, query)?;
        }
        Some(Commands::Visits { year, month, path }) => {
            let config = load_config(cli.config.as_deref())?;
            let query = build_query(*year, Some(*month), &config)?;
            let source = open_source(path.as_deref(), &config)?;
            visits::run(&mut stdout, &source, query)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
