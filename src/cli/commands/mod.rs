//! Command implementations for the listing processor CLI
//!
//! This module contains the main command execution logic, progress reporting,
//! and error handling for the CLI interface. Each command is implemented in
//! its own module.

pub mod extract;
pub mod shared;
pub mod summary;

// Re-export the main types and functions
pub use shared::ProcessingStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the listing processor
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `extract`: batch conversion of listing files into budget tables
/// - `summary`: budget structure report for a single listing file
pub fn run(args: Args) -> Result<ProcessingStats> {
    match args.get_command() {
        Commands::Extract(extract_args) => extract::run_extract(extract_args),
        Commands::Summary(summary_args) => summary::run_summary(summary_args),
    }
}
