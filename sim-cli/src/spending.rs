//! The spending game session.

use std::io::{self, BufRead, Write};

use rust_decimal::Decimal;
use spend_core::{BalanceError, PurchaseError, SpendingGame, catalog};
use thiserror::Error;
use tracing::{debug, info};

use crate::prompt::Prompter;
use crate::utils::{ParseAmountError, parse_amount};

const INTRO: &str =
    "Spend Ivan Seidenberg's $15 Million donation to Pace University recklessly!";
const CHOICE_PROMPT: &str = "Enter the number of the item you want to purchase:";

/// Error returned when a starting balance cannot be used.
#[derive(Debug, Error)]
pub enum StartingBalanceError {
    #[error(transparent)]
    Amount(#[from] ParseAmountError),

    #[error(transparent)]
    Balance(#[from] BalanceError),
}

/// Parses a starting balance such as `"$15,000,000"` and checks that the game
/// can be played down to zero with it.
pub fn parse_balance(input: &str) -> Result<Decimal, StartingBalanceError> {
    let balance = parse_amount(input)?;
    SpendingGame::try_new(balance)?;
    Ok(balance)
}

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    /// The balance reached zero.
    Spent,
    /// Input ran out before the money did.
    InputClosed,
}

/// Plays until the balance is exhausted or input ends, then prints the
/// purchase summary.
pub fn run_game<R: BufRead, W: Write>(
    game: &mut SpendingGame,
    prompter: &mut Prompter<R, W>,
) -> io::Result<GameEnd> {
    info!(balance = %game.balance(), "game started");
    prompter.say(INTRO)?;

    let mut end = GameEnd::Spent;
    while !game.is_over() {
        prompter.say(format_args!("Balance: ${}", game.balance()))?;
        write!(prompter.output(), "{}", catalog::menu())?;
        prompter.say(CHOICE_PROMPT)?;

        let Some(line) = prompter.read_line()? else {
            end = GameEnd::InputClosed;
            break;
        };

        let result = match line.trim().parse::<u32>() {
            Ok(choice) => game.purchase(choice),
            Err(_) => {
                debug!(input = %line, "non-numeric menu choice");
                Err(PurchaseError::InvalidChoice(0))
            }
        };

        match result {
            Ok(_) => prompter.say("Purchase successful!")?,
            Err(error) => prompter.say(error)?,
        }
    }

    match end {
        GameEnd::Spent => prompter.say("You've spent all the money. Game over.")?,
        GameEnd::InputClosed => prompter.say("Input closed. Game over.")?,
    }
    prompter.say("Here's a summary of your purchases:")?;
    for (name, count) in game.summary() {
        prompter.say(format_args!("{name}: {count}"))?;
    }

    info!(?end, balance = %game.balance(), "game finished");
    Ok(end)
}
