//! MODFLOW Listing Processor Library
//!
//! A Rust library for extracting water-budget and timing time series from
//! MODFLOW-family listing files (MODFLOW, SEAWAT, MODFLOW+SWR report output)
//! into tabular form.
//!
//! This library provides tools for:
//! - Indexing multi-megabyte listing files by their per-timestep report blocks
//! - Parsing fixed-column budget and time-summary sections with partial-failure
//!   tolerance (malformed blocks degrade to NaN rows, never abort the file)
//! - Assembling strictly-ordered incremental and cumulative budget tables
//! - Packaging tables as polars DataFrames and writing CSV/Parquet output
//! - Comprehensive error handling and recovery

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod list_parser;
        pub mod listing_scanner;
        pub mod table_export;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{BlockLocation, BudgetTable, LoadedListing, TimeSummary};
pub use app::services::list_parser::{ListingFile, ListingVariant};
pub use config::Config;

/// Result type alias for the listing processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for listing-file processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Listing file not found
    #[error("Listing file not found: {path}")]
    FileNotFound { path: String },

    /// Listing format error
    #[error("Listing format error in file '{file}': {message}")]
    ListingFormat { file: String, message: String },

    /// No budget blocks were found while building the file index
    #[error("No budget blocks found in '{file}' (key phrase: '{key_phrase}')")]
    NoBudgetBlocks { file: String, key_phrase: String },

    /// Budget entry schema was already established for this assembler
    #[error("Budget entries already set: {entries:?}")]
    EntriesAlreadySet { entries: Vec<String> },

    /// First budget block could not be parsed, so no schema can be established
    #[error("Unable to read budget information from first block in '{file}'")]
    FirstBlockUnreadable { file: String },

    /// Table export error
    #[error("Table export error: {message}")]
    TableExport {
        message: String,
        #[source]
        source: polars::error::PolarsError,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Directory traversal error
    #[error("Directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },

    /// Date parsing error
    #[error("Date parsing error: {message}")]
    DateParsing {
        message: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Output file already exists and overwrite was not requested
    #[error("Output file already exists: {path} (use --force to overwrite)")]
    OutputExists { path: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an I/O error with a simple message
    pub fn io_error(message: impl Into<String>) -> Self {
        let message_str = message.into();
        Self::Io {
            message: message_str.clone(),
            source: std::io::Error::other(message_str),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a listing format error
    pub fn listing_format(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ListingFormat {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a no-budget-blocks error
    pub fn no_budget_blocks(file: impl Into<String>, key_phrase: impl Into<String>) -> Self {
        Self::NoBudgetBlocks {
            file: file.into(),
            key_phrase: key_phrase.into(),
        }
    }

    /// Create an entries-already-set error
    pub fn entries_already_set(entries: Vec<String>) -> Self {
        Self::EntriesAlreadySet { entries }
    }

    /// Create a first-block-unreadable error
    pub fn first_block_unreadable(file: impl Into<String>) -> Self {
        Self::FirstBlockUnreadable { file: file.into() }
    }

    /// Create a table export error
    pub fn table_export(message: impl Into<String>, source: polars::error::PolarsError) -> Self {
        Self::TableExport {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a directory traversal error
    pub fn directory_traversal(message: impl Into<String>, source: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: message.into(),
            source,
        }
    }

    /// Create a date parsing error
    pub fn date_parsing(message: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::DateParsing {
            message: message.into(),
            source,
        }
    }

    /// Create an output-exists error
    pub fn output_exists(path: impl Into<String>) -> Self {
        Self::OutputExists { path: path.into() }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<polars::error::PolarsError> for Error {
    fn from(error: polars::error::PolarsError) -> Self {
        Self::TableExport {
            message: "DataFrame operation failed".to_string(),
            source: error,
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "Directory traversal failed".to_string(),
            source: error,
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::DateParsing {
            message: "Date parsing failed".to_string(),
            source: error,
        }
    }
}
