//! Bracket tables keyed by filing status, plus the built-in reference schedule.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;
use tracing::warn;

use crate::{Bracket, BracketTable, FilingStatus};

/// Status whose table stands in for any status a schedule does not define.
pub const DEFAULT_STATUS: FilingStatus = FilingStatus::Single;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("schedule must define a table for the single filing status")]
    MissingDefault,
}

/// The set of bracket tables in force for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketSchedule {
    tables: BTreeMap<FilingStatus, BracketTable>,
}

impl BracketSchedule {
    pub fn new(tables: BTreeMap<FilingStatus, BracketTable>) -> Result<Self, ScheduleError> {
        if !tables.contains_key(&DEFAULT_STATUS) {
            return Err(ScheduleError::MissingDefault);
        }
        Ok(Self { tables })
    }

    /// Table for `status`, or the single-filer table when none is defined.
    pub fn table_for(
        &self,
        status: FilingStatus,
    ) -> &BracketTable {
        if let Some(table) = self.tables.get(&status) {
            return table;
        }
        warn!(
            status = status.as_str(),
            fallback = DEFAULT_STATUS.as_str(),
            "no bracket table for filing status, using default"
        );
        &self.tables[&DEFAULT_STATUS]
    }

    pub fn contains(
        &self,
        status: FilingStatus,
    ) -> bool {
        self.tables.contains_key(&status)
    }

    pub fn statuses(&self) -> impl Iterator<Item = FilingStatus> + '_ {
        self.tables.keys().copied()
    }
}

const REFERENCE_RATES: [Decimal; 9] = [
    dec!(0.04),
    dec!(0.045),
    dec!(0.0525),
    dec!(0.055),
    dec!(0.06),
    dec!(0.0685),
    dec!(0.0965),
    dec!(0.103),
    dec!(0.109),
];

const SINGLE_BOUNDS: [Decimal; 9] = [
    dec!(0),
    dec!(8500),
    dec!(11700),
    dec!(13900),
    dec!(80650),
    dec!(215400),
    dec!(1077550),
    dec!(5000000),
    dec!(25000000),
];

const JOINT_BOUNDS: [Decimal; 9] = [
    dec!(0),
    dec!(17150),
    dec!(23600),
    dec!(27900),
    dec!(161550),
    dec!(323200),
    dec!(2155350),
    dec!(5000000),
    dec!(25000000),
];

const HEAD_OF_HOUSEHOLD_BOUNDS: [Decimal; 9] = [
    dec!(0),
    dec!(12800),
    dec!(17650),
    dec!(20900),
    dec!(107650),
    dec!(269300),
    dec!(1616450),
    dec!(5000000),
    dec!(25000000),
];

fn reference_table(bounds: &[Decimal; 9]) -> BracketTable {
    let brackets = bounds
        .iter()
        .zip(REFERENCE_RATES)
        .map(|(&lower_bound, rate)| Bracket::new(lower_bound, rate))
        .collect();
    BracketTable::new(brackets).expect("reference bracket table is well-formed")
}

static REFERENCE: LazyLock<BracketSchedule> = LazyLock::new(|| {
    let tables = BTreeMap::from([
        (FilingStatus::Single, reference_table(&SINGLE_BOUNDS)),
        (FilingStatus::Joint, reference_table(&JOINT_BOUNDS)),
        (
            FilingStatus::HeadOfHousehold,
            reference_table(&HEAD_OF_HOUSEHOLD_BOUNDS),
        ),
    ]);
    BracketSchedule::new(tables).expect("reference schedule defines the default table")
});

/// Built-in tables for all three filing statuses, built once per process.
pub fn reference_schedule() -> &'static BracketSchedule {
    &REFERENCE
}
