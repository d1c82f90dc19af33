//! Domain model for the "spend the donation" simulator.

pub mod catalog;
pub mod game;

pub use catalog::{CATALOG, Item};
pub use game::{BalanceError, Purchase, PurchaseError, STARTING_BALANCE, SpendingGame};
