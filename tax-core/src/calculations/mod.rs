//! Tax calculation logic.
//!
//! [`bracket_tax`] holds the marginal-bracket calculator; [`common`] holds the
//! decimal helpers it shares with callers.

pub mod bracket_tax;
pub mod common;

pub use bracket_tax::{assess, calculate_tax};
