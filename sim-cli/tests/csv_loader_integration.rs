//! Integration tests that run the batch path against on-disk fixture files.
//!
//! The unit tests inside csv_loader.rs use inline string literals; these
//! check that reading from disk, assessing and printing work end to end.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use sim_cli::csv_loader::{self, CsvLoadError};
use sim_cli::filing;
use tax_core::{FilingStatus, reference_schedule};

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_load_fixture_file_succeeds() {
    let rows = csv_loader::load_from_file(&fixture_path("taxpayers.csv"))
        .expect("fixture file should load without error");

    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(Result::is_ok));
}

#[test]
fn test_load_fixture_second_row_head_of_household() {
    let rows = csv_loader::load_from_file(&fixture_path("taxpayers.csv")).unwrap();
    let grace = rows[1].as_ref().unwrap();

    assert_eq!(grace.name, "Grace Hopper");
    assert_eq!(grace.filing_status, FilingStatus::HeadOfHousehold);
    assert_eq!(grace.taxable_income(), dec!(17800.01));
}

#[test]
fn test_missing_file_returns_io_error() {
    let result = csv_loader::load_from_file(&fixture_path("does_not_exist.csv"));

    assert!(matches!(result, Err(CsvLoadError::Io { .. })));
}

#[test]
fn test_bad_rows_are_reported_individually() {
    let rows = csv_loader::load_from_file(&fixture_path("taxpayers_with_errors.csv")).unwrap();

    assert_eq!(rows.len(), 5);
    assert!(rows[0].is_ok());
    assert!(matches!(
        rows[1],
        Err(CsvLoadError::InvalidFilingStatus { row: 2, .. })
    ));
    assert!(matches!(rows[2], Err(CsvLoadError::InvalidAmount { row: 3, .. })));
    assert!(matches!(rows[3], Err(CsvLoadError::Parse { row: 4, .. })));
    assert!(rows[4].is_ok());
}

// =============================================================================
// Batch assessment
// =============================================================================

#[test]
fn test_batch_prints_every_taxpayer() {
    let rows = csv_loader::load_from_file(&fixture_path("taxpayers.csv")).unwrap();
    let mut out = Vec::new();

    let assessments = filing::run_batch(rows, reference_schedule(), &mut out).unwrap();

    assert_eq!(assessments.len(), 3);
    assert_eq!(assessments[2].tax_owed, dec!(0));
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\nTax Filing Result:\n\
         Taxpayer: Ada Lovelace\n\
         Tax Owed: $2447.50\n\
         Taxpayer: Grace Hopper\n\
         Tax Owed: $738.13\n\
         Taxpayer: Alan Turing\n\
         Tax Owed: $0.00\n"
    );
}

#[test]
fn test_batch_skips_bad_rows_and_assesses_the_rest() {
    let rows = csv_loader::load_from_file(&fixture_path("taxpayers_with_errors.csv")).unwrap();
    let mut out = Vec::new();

    let assessments = filing::run_batch(rows, reference_schedule(), &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    let names: Vec<_> = assessments.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Ada Lovelace", "Grace Hopper"]);
    assert_eq!(output.matches("Skipped row").count(), 3);
    assert!(output.contains("Skipped row 2: unrecognised filing status 'married'"));
    assert!(output.ends_with("Taxpayer: Grace Hopper\nTax Owed: $738.13\n"));
}
