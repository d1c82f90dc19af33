//! The tax filing session: collect taxpayers, assess them, print results.

use std::io::{self, BufRead, Write};

use tax_core::calculations::assess;
use tax_core::{BracketSchedule, FilingStatus, TaxAssessment, TaxpayerRecord};
use tracing::{debug, info, warn};

use crate::csv_loader::CsvLoadError;
use crate::prompt::Prompter;
use crate::utils::{format_money, parse_amount};

const NAME_PROMPT: &str = "Enter taxpayer name: ";
const INCOME_PROMPT: &str = "Enter total income for the year: ";
const DEDUCTIONS_PROMPT: &str = "Enter total deductions: ";
const STATUS_PROMPT: &str = "Enter filing status (single/joint/head of household): ";
const ANOTHER_PROMPT: &str = "Do you want to enter another taxpayer? (yes/no): ";

const INVALID_NUMBER: &str = "Invalid input. Please enter a valid number.";
const INVALID_STATUS: &str =
    "Invalid input. Please enter a valid filing status. (single/joint/head of household)";

/// Outcome of prompting for one taxpayer.
enum Entry {
    Complete(TaxpayerRecord),
    /// A number could not be parsed; the entry is abandoned.
    Invalid,
    /// Input ended part-way through.
    Closed,
}

fn read_entry<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> io::Result<Entry> {
    let Some(name) = prompter.ask(NAME_PROMPT)? else {
        return Ok(Entry::Closed);
    };

    let Some(income) = prompter.ask(INCOME_PROMPT)? else {
        return Ok(Entry::Closed);
    };
    let Ok(income) = parse_amount(&income) else {
        return Ok(Entry::Invalid);
    };

    let Some(deductions) = prompter.ask(DEDUCTIONS_PROMPT)? else {
        return Ok(Entry::Closed);
    };
    let Ok(deductions) = parse_amount(&deductions) else {
        return Ok(Entry::Invalid);
    };

    let Some(status) = read_filing_status(prompter)? else {
        return Ok(Entry::Closed);
    };

    match TaxpayerRecord::new(name, income, deductions, status) {
        Ok(record) => Ok(Entry::Complete(record)),
        Err(error) => {
            debug!(%error, "taxpayer entry rejected");
            Ok(Entry::Invalid)
        }
    }
}

/// Prompts once, then re-reads until a recognised filing status is entered.
fn read_filing_status<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>
) -> io::Result<Option<FilingStatus>> {
    let mut answer = prompter.ask(STATUS_PROMPT)?;
    while let Some(text) = answer {
        if let Some(status) = FilingStatus::parse(&text) {
            return Ok(Some(status));
        }
        debug!(input = %text, "unrecognised filing status");
        prompter.say(INVALID_STATUS)?;
        answer = prompter.read_line()?;
    }
    Ok(None)
}

/// Prompts for taxpayers until the user declines to add another or input
/// ends. Entries with malformed numbers are dropped with a message; the
/// rest of the batch is kept.
pub fn collect_taxpayers<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>
) -> io::Result<Vec<TaxpayerRecord>> {
    let mut records = Vec::new();

    loop {
        match read_entry(prompter)? {
            Entry::Complete(record) => records.push(record),
            Entry::Invalid => prompter.say(INVALID_NUMBER)?,
            Entry::Closed => break,
        }

        match prompter.ask(ANOTHER_PROMPT)? {
            Some(answer) if answer.trim().eq_ignore_ascii_case("yes") => continue,
            _ => break,
        }
    }

    Ok(records)
}

/// Assesses every record, preserving entry order.
pub fn assess_all(
    records: &[TaxpayerRecord],
    schedule: &BracketSchedule,
) -> Vec<TaxAssessment> {
    records
        .iter()
        .map(|record| assess(record, schedule))
        .collect()
}

/// Prints the result block for every assessment.
pub fn write_results<W: Write>(
    out: &mut W,
    assessments: &[TaxAssessment],
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Tax Filing Result:")?;
    for assessment in assessments {
        writeln!(out, "Taxpayer: {}", assessment.name)?;
        writeln!(out, "Tax Owed: ${}", format_money(assessment.tax_owed))?;
    }
    Ok(())
}

/// Runs the interactive session end to end.
pub fn run_interactive<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    schedule: &BracketSchedule,
) -> io::Result<Vec<TaxAssessment>> {
    let records = collect_taxpayers(prompter)?;
    info!(taxpayers = records.len(), "data entry finished");

    let assessments = assess_all(&records, schedule);
    write_results(prompter.output(), &assessments)?;
    Ok(assessments)
}

/// Assesses pre-loaded rows. Rows that failed to load are reported and
/// skipped.
pub fn run_batch<W: Write>(
    rows: Vec<Result<TaxpayerRecord, CsvLoadError>>,
    schedule: &BracketSchedule,
    out: &mut W,
) -> io::Result<Vec<TaxAssessment>> {
    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        match row {
            Ok(record) => records.push(record),
            Err(error) => {
                warn!(%error, "skipping taxpayer row");
                writeln!(out, "Skipped {error}")?;
            }
        }
    }
    info!(taxpayers = records.len(), "batch loaded");

    let assessments = assess_all(&records, schedule);
    write_results(out, &assessments)?;
    Ok(assessments)
}
