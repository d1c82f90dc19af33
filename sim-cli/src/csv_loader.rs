//! CSV loader for batch taxpayer input.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter. Whitespace
//! around values is ignored.
//!
//! | Column          | Type    | Notes |
//! |-----------------|---------|-------|
//! | `name`          | string  | |
//! | `income`        | decimal | gross income, not negative |
//! | `deductions`    | decimal | not negative |
//! | `filing_status` | string  | `single`, `joint` or `head of household`, any case |
//!
//! ```csv
//! name,income,deductions,filing_status
//! Ada Lovelace,60000.00,12500.00,single
//! ```
//!
//! Every data row produces its own `Result`, so one bad row does not stop the
//! rest of the batch from being assessed.

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use tax_core::{FilingStatus, TaxpayerError, TaxpayerRecord};

#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    income: Decimal,
    deductions: Decimal,
    filing_status: String,
}

/// Errors that can occur while loading or converting CSV data.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The file could not be read at all.
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// A row could not be deserialised (missing column, bad number, ...).
    #[error("row {row}: {source}")]
    Parse { row: usize, source: csv::Error },

    /// A `filing_status` cell is not one of the recognised statuses.
    #[error("row {row}: unrecognised filing status '{status}'")]
    InvalidFilingStatus { status: String, row: usize },

    /// Income or deductions were negative.
    #[error("row {row}: {source}")]
    InvalidAmount { row: usize, source: TaxpayerError },
}

/// Convert a single CSV row into a [`TaxpayerRecord`].
///
/// `row_number` is 1-based (for error messages).
fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<TaxpayerRecord, CsvLoadError> {
    let filing_status = FilingStatus::parse(&row.filing_status).ok_or_else(|| {
        CsvLoadError::InvalidFilingStatus {
            status: row.filing_status.clone(),
            row: row_number,
        }
    })?;

    TaxpayerRecord::new(row.name, row.income, row.deductions, filing_status).map_err(|source| {
        CsvLoadError::InvalidAmount {
            row: row_number,
            source,
        }
    })
}

/// Parse CSV text and return one result per data row, in file order.
pub fn load_from_str(input: &str) -> Vec<Result<TaxpayerRecord, CsvLoadError>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row_number = idx + 1;
            let row = result.map_err(|source| CsvLoadError::Parse {
                row: row_number,
                source,
            })?;
            convert_row(row, row_number)
        })
        .collect()
}

/// Read a file from disk and delegate to [`load_from_str`].
pub fn load_from_file(
    path: &Path
) -> Result<Vec<Result<TaxpayerRecord, CsvLoadError>>, CsvLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CsvLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(load_from_str(&contents))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    const VALID_CSV: &str = "\
name,income,deductions,filing_status
Ada,60000.00,12500.00,single
Grace,30000,12199.99,Head of Household
";

    #[test]
    fn load_valid_rows_in_order() {
        let rows = load_from_str(VALID_CSV);

        assert_eq!(rows.len(), 2);
        let ada = rows[0].as_ref().unwrap();
        assert_eq!(ada.name, "Ada");
        assert_eq!(ada.gross_income, dec!(60000.00));
        assert_eq!(ada.deductions, dec!(12500.00));
        assert_eq!(ada.filing_status, FilingStatus::Single);

        let grace = rows[1].as_ref().unwrap();
        assert_eq!(grace.filing_status, FilingStatus::HeadOfHousehold);
    }

    #[test]
    fn columns_may_be_reordered() {
        let csv = "filing_status,deductions,income,name\njoint,100,5000,Bo\n";

        let rows = load_from_str(csv);
        let bo = rows[0].as_ref().unwrap();

        assert_eq!(bo.name, "Bo");
        assert_eq!(bo.gross_income, dec!(5000));
        assert_eq!(bo.deductions, dec!(100));
    }

    #[test]
    fn whitespace_is_trimmed() {
        let csv = "name,income,deductions,filing_status\n  Cy  , 100 , 0 ,  joint \n";

        let rows = load_from_str(csv);

        assert_eq!(rows[0].as_ref().unwrap().name, "Cy");
    }

    #[test]
    fn unknown_status_is_reported_with_row() {
        let csv = "name,income,deductions,filing_status\nAda,1,0,single\nBo,1,0,married\n";

        let rows = load_from_str(csv);

        assert!(rows[0].is_ok());
        match &rows[1] {
            Err(CsvLoadError::InvalidFilingStatus { status, row }) => {
                assert_eq!(status, "married");
                assert_eq!(*row, 2);
            }
            other => panic!("expected InvalidFilingStatus, got {other:?}"),
        }
    }

    #[test]
    fn negative_income_is_reported() {
        let csv = "name,income,deductions,filing_status\nNeg,-10,0,single\n";

        let rows = load_from_str(csv);

        assert!(matches!(
            rows[0],
            Err(CsvLoadError::InvalidAmount {
                row: 1,
                source: TaxpayerError::NegativeIncome(_),
            })
        ));
    }

    #[test]
    fn bad_number_does_not_stop_later_rows() {
        let csv = "name,income,deductions,filing_status\nBad,lots,0,single\nGood,10,0,single\n";

        let rows = load_from_str(csv);

        assert!(matches!(rows[0], Err(CsvLoadError::Parse { row: 1, .. })));
        assert!(rows[1].is_ok());
    }

    #[test]
    fn header_only_yields_no_rows() {
        assert!(load_from_str("name,income,deductions,filing_status\n").is_empty());
    }
}
