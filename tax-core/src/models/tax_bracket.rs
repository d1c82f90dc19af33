use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a bracket table violates its ordering invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BracketTableError {
    /// A table needs at least one bracket.
    #[error("bracket table has no brackets")]
    Empty,

    /// The lowest bracket must start at zero income.
    #[error("first bracket must start at 0, got {0}")]
    NonZeroStart(Decimal),

    /// Lower bounds must be strictly increasing.
    #[error("bracket lower bound {current} does not exceed previous bound {previous}")]
    NotAscending { previous: Decimal, current: Decimal },

    /// Rates are fractions between 0 and 1.
    #[error("tax rate must be between 0 and 1, got {0}")]
    InvalidRate(Decimal),

    /// Rates may never fall as income rises.
    #[error("rate {current} at bound {lower_bound} is lower than the previous rate {previous}")]
    NotProgressive {
        lower_bound: Decimal,
        previous: Decimal,
        current: Decimal,
    },
}

/// A contiguous income range taxed at a single marginal rate.
///
/// Only the lower bound is stored: a bracket ends where the next one starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bracket {
    pub lower_bound: Decimal,
    pub rate: Decimal,
}

impl Bracket {
    pub const fn new(
        lower_bound: Decimal,
        rate: Decimal,
    ) -> Self {
        Self { lower_bound, rate }
    }
}

/// Ordered, validated set of brackets. The last bracket is unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BracketTable {
    brackets: Vec<Bracket>,
}

impl BracketTable {
    /// Builds a table after checking that it starts at zero, that lower bounds
    /// strictly increase and that rates are valid, non-decreasing fractions.
    pub fn new(brackets: Vec<Bracket>) -> Result<Self, BracketTableError> {
        let first = brackets.first().ok_or(BracketTableError::Empty)?;
        if !first.lower_bound.is_zero() {
            return Err(BracketTableError::NonZeroStart(first.lower_bound));
        }

        for bracket in &brackets {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(BracketTableError::InvalidRate(bracket.rate));
            }
        }

        for pair in brackets.windows(2) {
            let (previous, current) = (&pair[0], &pair[1]);
            if current.lower_bound <= previous.lower_bound {
                return Err(BracketTableError::NotAscending {
                    previous: previous.lower_bound,
                    current: current.lower_bound,
                });
            }
            if current.rate < previous.rate {
                return Err(BracketTableError::NotProgressive {
                    lower_bound: current.lower_bound,
                    previous: previous.rate,
                    current: current.rate,
                });
            }
        }

        Ok(Self { brackets })
    }

    pub fn brackets(&self) -> &[Bracket] {
        &self.brackets
    }

    pub fn len(&self) -> usize {
        self.brackets.len()
    }

    /// Always false; construction rejects empty tables.
    pub fn is_empty(&self) -> bool {
        self.brackets.is_empty()
    }

    /// Exclusive upper bound of bracket `index`, or `None` for the last one.
    pub fn upper_bound(
        &self,
        index: usize,
    ) -> Option<Decimal> {
        self.brackets.get(index + 1).map(|b| b.lower_bound)
    }

    /// Marginal rate applied to the next dollar above `income`.
    pub fn marginal_rate(
        &self,
        income: Decimal,
    ) -> Decimal {
        self.brackets
            .iter()
            .rev()
            .find(|b| income >= b.lower_bound)
            .unwrap_or(&self.brackets[0])
            .rate
    }
}
