use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::FilingStatus;
use crate::calculations::common::non_negative;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxpayerError {
    #[error("income must not be negative, got {0}")]
    NegativeIncome(Decimal),

    #[error("deductions must not be negative, got {0}")]
    NegativeDeductions(Decimal),
}

/// One taxpayer's filing data, as entered at the prompt or read from CSV.
///
/// Only [`TaxpayerRecord::new`] builds one, so amounts are never negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxpayerRecord {
    pub name: String,
    pub gross_income: Decimal,
    pub deductions: Decimal,
    pub filing_status: FilingStatus,
}

impl TaxpayerRecord {
    pub fn new(
        name: impl Into<String>,
        gross_income: Decimal,
        deductions: Decimal,
        filing_status: FilingStatus,
    ) -> Result<Self, TaxpayerError> {
        if gross_income < Decimal::ZERO {
            return Err(TaxpayerError::NegativeIncome(gross_income));
        }
        if deductions < Decimal::ZERO {
            return Err(TaxpayerError::NegativeDeductions(deductions));
        }

        Ok(Self {
            name: name.into(),
            gross_income,
            deductions,
            filing_status,
        })
    }

    /// Gross income minus deductions, floored at zero.
    pub fn taxable_income(&self) -> Decimal {
        non_negative(self.gross_income - self.deductions)
    }
}

/// Result of assessing a [`TaxpayerRecord`] against a bracket schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxAssessment {
    pub name: String,
    pub filing_status: FilingStatus,
    pub taxable_income: Decimal,
    /// Rate applied to the next dollar of taxable income.
    pub marginal_rate: Decimal,
    /// Total tax, rounded half-up to cents.
    pub tax_owed: Decimal,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn taxable_income_subtracts_deductions() {
        let record =
            TaxpayerRecord::new("Ada", dec!(60000), dec!(12500.50), FilingStatus::Single).unwrap();

        assert_eq!(record.taxable_income(), dec!(47499.50));
    }

    #[test]
    fn taxable_income_floors_at_zero() {
        let record =
            TaxpayerRecord::new("Bo", dec!(8000), dec!(15000), FilingStatus::Joint).unwrap();

        assert_eq!(record.taxable_income(), dec!(0));
    }

    #[test]
    fn new_rejects_negative_income() {
        let result = TaxpayerRecord::new("Cy", dec!(-1), dec!(0), FilingStatus::Single);

        assert_eq!(result, Err(TaxpayerError::NegativeIncome(dec!(-1))));
    }

    #[test]
    fn new_rejects_negative_deductions() {
        let result = TaxpayerRecord::new("Di", dec!(100), dec!(-5), FilingStatus::Single);

        assert_eq!(result, Err(TaxpayerError::NegativeDeductions(dec!(-5))));
    }
}
