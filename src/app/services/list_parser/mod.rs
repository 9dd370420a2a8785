//! Listing-file parser for MODFLOW-family simulation reports
//!
//! This module provides the two-pass engine that turns a loosely-structured
//! listing file into strictly-ordered budget and timing tables: a forward
//! indexing pass records the byte offset of every report block, then fixed
//! column extractors re-read each block from its offset.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`layout`] - Per-variant key phrases and column windows, as data
//! - [`reader`] - Seekable, position-tracking, lenient line reader
//! - [`fields`] - Fixed-column field classification
//! - [`index`] - Block locator (the forward indexing pass)
//! - [`budget`] - Budget block extractor (in/out flux and cumulative pairs)
//! - [`time`] - Time-summary block extractor
//! - [`assembler`] - Series assembly into ordered tables
//!
//! ## Usage
//!
//! ```no_run
//! use mflist_processor::app::services::list_parser::{ListingFile, ListingVariant};
//!
//! # fn example() -> mflist_processor::Result<()> {
//! let listing = ListingFile::new("freyberg.lst", ListingVariant::Modflow)?;
//! let loaded = listing.load(None)?;
//!
//! println!(
//!     "parsed {} blocks with {} budget entries",
//!     loaded.len(),
//!     loaded.entries().len()
//! );
//! # Ok(())
//! # }
//! ```

pub mod assembler;
pub mod budget;
pub mod fields;
pub mod index;
pub mod layout;
pub mod reader;
pub mod time;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use assembler::{ListingFile, SeriesAssembler};
pub use budget::{BudgetEntryValue, FlowSide};
pub use layout::{BudgetLayout, ColumnWindow, ListingVariant, TimeLayout};
pub use reader::ListingReader;
