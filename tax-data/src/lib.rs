//! Loading bracket tables from CSV files.

pub mod loader;

pub use loader::{BracketLoaderError, BracketRecord, BracketTableLoader};
