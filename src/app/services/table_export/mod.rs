//! Tabular export of assembled budget tables
//!
//! The parser's tables are plain column vectors; this module packages them
//! as polars DataFrames and writes them to CSV or Parquet. An optional
//! simulation start date anchors the elapsed-time column to calendar dates.

pub mod frame;
pub mod writer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use frame::budget_frame;
pub use writer::{TableFormat, TableWriter};
