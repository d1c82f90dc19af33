use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sim_cli::logging::{LogConfig, init_logging};
use sim_cli::prompt::Prompter;
use sim_cli::{csv_loader, filing};
use tax_core::{BracketSchedule, reference_schedule};
use tax_data::BracketTableLoader;
use tracing::{debug, info};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Progressive income tax calculator.
///
/// Prompts for each taxpayer's name, income, deductions and filing status,
/// then prints the tax owed by each one.
#[derive(Debug, Parser)]
#[command(name = "tax-filing", version, about)]
struct Cli {
    /// Assess every taxpayer in this CSV file instead of prompting
    /// (columns: name, income, deductions, filing_status).
    #[arg(short, long, value_name = "CSV")]
    input: Option<PathBuf>,

    /// Replace the built-in bracket tables with the tables in this CSV file
    /// (columns: filing_status, lower_bound, rate).
    #[arg(short, long, value_name = "CSV")]
    brackets: Option<PathBuf>,

    #[command(flatten)]
    log: LogConfig,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log)?;

    let loaded: BracketSchedule;
    let schedule = match &cli.brackets {
        Some(path) => {
            debug!(path = %path.display(), "loading bracket tables");
            loaded = BracketTableLoader::load_from_path(path)
                .with_context(|| format!("Failed to load bracket tables: {}", path.display()))?;
            &loaded
        }
        None => reference_schedule(),
    };

    let stdout = io::stdout();
    match &cli.input {
        Some(path) => {
            info!(path = %path.display(), "batch mode");
            let rows = csv_loader::load_from_file(path)
                .with_context(|| format!("Failed to read taxpayers: {}", path.display()))?;
            filing::run_batch(rows, schedule, &mut stdout.lock())?;
        }
        None => {
            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), stdout.lock());
            filing::run_interactive(&mut prompter, schedule)?;
        }
    }

    Ok(())
}
