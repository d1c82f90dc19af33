use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;
use tax_core::{
    Bracket, BracketSchedule, BracketTable, BracketTableError, FilingStatus, ScheduleError,
};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading bracket tables.
#[derive(Debug, Error)]
pub enum BracketLoaderError {
    #[error("failed to open '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("unrecognised filing status '{status}' on row {row}")]
    UnknownFilingStatus { status: String, row: usize },

    #[error("invalid bracket table for {status}: {source}")]
    InvalidTable {
        status: FilingStatus,
        source: BracketTableError,
    },

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

impl From<csv::Error> for BracketLoaderError {
    fn from(err: csv::Error) -> Self {
        BracketLoaderError::CsvParse(err.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    filing_status: String,
    lower_bound: Decimal,
    rate: Decimal,
}

/// A single bracket row from a bracket-table CSV file.
///
/// The CSV format has one row per bracket:
/// - `filing_status`: `single`, `joint` or `head of household` (any case)
/// - `lower_bound`: income at which the bracket starts
/// - `rate`: marginal rate as a decimal fraction (e.g. 0.045)
///
/// Rows for one status may appear in any order; the final bracket of each
/// status is unbounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketRecord {
    pub filing_status: FilingStatus,
    pub lower_bound: Decimal,
    pub rate: Decimal,
}

/// Loader for bracket schedules stored as CSV.
pub struct BracketTableLoader;

impl BracketTableLoader {
    /// Parse bracket records from a CSV reader.
    ///
    /// Whitespace around values is ignored. Row numbers in errors are
    /// 1-based and exclude the header.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<BracketRecord>, BracketLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for (idx, result) in csv_reader.deserialize().enumerate() {
            let row: CsvRow = result?;
            let filing_status = FilingStatus::parse(&row.filing_status).ok_or_else(|| {
                BracketLoaderError::UnknownFilingStatus {
                    status: row.filing_status.clone(),
                    row: idx + 1,
                }
            })?;

            records.push(BracketRecord {
                filing_status,
                lower_bound: row.lower_bound,
                rate: row.rate,
            });
        }

        Ok(records)
    }

    /// Group records by filing status and validate each resulting table.
    ///
    /// A schedule must include a single-filer table; statuses without rows
    /// fall back to it at lookup time.
    pub fn build(records: &[BracketRecord]) -> Result<BracketSchedule, BracketLoaderError> {
        let mut groups: BTreeMap<FilingStatus, Vec<Bracket>> = BTreeMap::new();
        for record in records {
            groups
                .entry(record.filing_status)
                .or_default()
                .push(Bracket::new(record.lower_bound, record.rate));
        }

        let mut tables = BTreeMap::new();
        for (status, mut brackets) in groups {
            brackets.sort_by(|a, b| a.lower_bound.cmp(&b.lower_bound));
            let table = BracketTable::new(brackets)
                .map_err(|source| BracketLoaderError::InvalidTable { status, source })?;
            debug!(status = status.as_str(), brackets = table.len(), "loaded bracket table");
            tables.insert(status, table);
        }

        Ok(BracketSchedule::new(tables)?)
    }

    /// Read, parse and build a schedule from a file on disk.
    pub fn load_from_path(path: &Path) -> Result<BracketSchedule, BracketLoaderError> {
        let file = File::open(path).map_err(|source| BracketLoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let records = Self::parse(file)?;
        Self::build(&records)
    }
}
