use std::io;

use clap::Parser;
use rust_decimal::Decimal;
use sim_cli::logging::{LogConfig, init_logging};
use sim_cli::prompt::Prompter;
use sim_cli::spending;
use spend_core::{STARTING_BALANCE, SpendingGame};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Spend a fixed donation on a menu of items until the money runs out.
#[derive(Debug, Parser)]
#[command(name = "spending-game", version, about)]
struct Cli {
    /// Starting balance in dollars.
    #[arg(long, default_value_t = STARTING_BALANCE, value_parser = spending::parse_balance)]
    balance: Decimal,

    #[command(flatten)]
    log: LogConfig,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log)?;

    let mut game = SpendingGame::try_new(cli.balance)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    spending::run_game(&mut game, &mut prompter)?;
    Ok(())
}
