//! Marginal-bracket income tax.
//!
//! Each bracket taxes only the slice of income that falls inside it. For a
//! table with lower bounds `lo_0 = 0 < lo_1 < … < lo_n`, bracket `i` covers
//! `[lo_i, lo_{i+1})` and the final bracket is unbounded.
//!
//! Income exactly equal to a boundary is taxed entirely in the brackets below
//! it: the bracket starting at that boundary contributes nothing.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::calculations::calculate_tax;
//! use tax_core::{Bracket, BracketTable};
//!
//! let table = BracketTable::new(vec![
//!     Bracket::new(dec!(0), dec!(0.04)),
//!     Bracket::new(dec!(12800), dec!(0.045)),
//!     Bracket::new(dec!(17650), dec!(0.0525)),
//! ])
//! .unwrap();
//!
//! assert_eq!(calculate_tax(dec!(12800), &table), dec!(512.00));
//! assert_eq!(calculate_tax(dec!(17650), &table), dec!(730.25));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::{non_negative, round_half_up};
use crate::schedule::BracketSchedule;
use crate::{BracketTable, TaxAssessment, TaxpayerRecord};

/// Total tax on `taxable_income` under `table`, without rounding.
///
/// Negative income is treated as zero.
pub fn calculate_tax(
    taxable_income: Decimal,
    table: &BracketTable,
) -> Decimal {
    let income = non_negative(taxable_income);
    let mut tax = Decimal::ZERO;

    for (index, bracket) in table.brackets().iter().enumerate() {
        match table.upper_bound(index) {
            Some(upper) => {
                tax += non_negative(income.min(upper) - bracket.lower_bound) * bracket.rate;
                if income <= upper {
                    break;
                }
            }
            None => tax += non_negative(income - bracket.lower_bound) * bracket.rate,
        }
    }

    tax
}

/// Assesses one taxpayer: derives taxable income, picks the table for the
/// filing status and rounds the tax to cents.
pub fn assess(
    record: &TaxpayerRecord,
    schedule: &BracketSchedule,
) -> TaxAssessment {
    let taxable_income = record.taxable_income();
    let table = schedule.table_for(record.filing_status);
    let tax_owed = round_half_up(calculate_tax(taxable_income, table));
    let marginal_rate = table.marginal_rate(taxable_income);

    debug!(
        name = %record.name,
        status = record.filing_status.as_str(),
        %taxable_income,
        %marginal_rate,
        %tax_owed,
        "assessed taxpayer"
    );

    TaxAssessment {
        name: record.name.clone(),
        filing_status: record.filing_status,
        taxable_income,
        marginal_rate,
        tax_owed,
    }
}
