//! Console front ends for the tax filing calculator and the spending game.

pub mod csv_loader;
pub mod filing;
pub mod logging;
pub mod prompt;
pub mod spending;
pub mod utils;

#[cfg(test)]
mod test_support;
