mod filing_status;
mod tax_bracket;
mod taxpayer;

pub use filing_status::FilingStatus;
pub use tax_bracket::{Bracket, BracketTable, BracketTableError};
pub use taxpayer::{TaxAssessment, TaxpayerError, TaxpayerRecord};
