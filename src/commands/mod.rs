//! Command implementations for the CLI
//!
//! - start: Start the HTTP server
//! - test: Test configuration validity
//! - options: Print the calculator catalog
//! - estimate: Price a selection from the command line
//! - quotes: List recent quote requests

pub mod estimate;
pub mod options;
pub mod quotes;
pub mod start;
pub mod test;
