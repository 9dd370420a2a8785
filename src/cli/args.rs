//! Command-line argument definitions for the listing processor
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::app::services::list_parser::ListingVariant;
use crate::app::services::table_export::TableFormat;
use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the listing processor
///
/// Extracts water-budget and timing time series from MODFLOW-family listing
/// files into CSV or Parquet tables for analysis workflows.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "mflist-processor",
    version,
    about = "Extract water-budget time series from MODFLOW-family listing files",
    long_about = "A production-ready tool that scrapes the repeated volumetric-budget and \
                  time-summary report blocks out of MODFLOW, SEAWAT, and SWR listing files \
                  and assembles them into strictly-ordered incremental and cumulative tables. \
                  Malformed report blocks degrade to missing values instead of failing the run."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the listing processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Extract budget tables from listing files (main command)
    Extract(ExtractArgs),
    /// Report the budget structure of a single listing file
    Summary(SummaryArgs),
}

/// Arguments for the extract command (main data processing)
#[derive(Debug, Clone, Parser)]
pub struct ExtractArgs {
    /// Input listing file, or directory to scan for *.lst / *.list files
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        default_value = ".",
        help = "Listing file or directory to scan"
    )]
    pub input_path: PathBuf,

    /// Output directory for generated tables
    ///
    /// Will be created if it doesn't exist. Generated files are named
    /// <stem>.incremental.<ext> and <stem>.cumulative.<ext>.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = "./output",
        help = "Output directory for generated tables"
    )]
    pub output_path: PathBuf,

    /// Listing variant layout
    ///
    /// If not specified, each file's variant is detected from the first
    /// budget key phrase found in its head.
    #[arg(
        long = "variant",
        value_enum,
        value_name = "VARIANT",
        help = "Listing variant layout (detected per file when omitted)"
    )]
    pub variant: Option<ListingVariant>,

    /// Output table format
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "csv",
        help = "Output table format"
    )]
    pub format: TableFormat,

    /// Simulation start date (YYYY-MM-DD)
    ///
    /// Anchors the elapsed-time column to calendar dates: the exported
    /// tables gain a leading `date` column.
    #[arg(
        long = "start-date",
        value_name = "DATE",
        help = "Simulation start date for a calendar date column (YYYY-MM-DD)"
    )]
    pub start_date: Option<String>,

    /// Maximum report blocks to extract per file
    ///
    /// Useful for previewing very large listing files.
    #[arg(
        long = "max-blocks",
        value_name = "COUNT",
        help = "Maximum report blocks to extract per file"
    )]
    pub max_blocks: Option<usize>,

    /// Perform a dry run without writing output
    ///
    /// Shows what would be processed without creating any output files.
    #[arg(long = "dry-run", help = "Show what would be processed without writing")]
    pub dry_run: bool,

    /// Force overwrite of existing output files
    #[arg(long = "force", help = "Force overwrite of existing output files")]
    pub force_overwrite: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the summary command (per-file budget report)
#[derive(Debug, Clone, Parser)]
pub struct SummaryArgs {
    /// Listing file to summarize
    #[arg(value_name = "FILE", help = "Listing file to summarize")]
    pub input_file: PathBuf,

    /// Listing variant layout
    #[arg(
        long = "variant",
        value_enum,
        value_name = "VARIANT",
        help = "Listing variant layout (detected when omitted)"
    )]
    pub variant: Option<ListingVariant>,

    /// Maximum report blocks to read
    #[arg(
        long = "max-blocks",
        value_name = "COUNT",
        help = "Maximum report blocks to read"
    )]
    pub max_blocks: Option<usize>,

    /// Include the full entry listing in the report
    ///
    /// By default, shows summary statistics only.
    #[arg(long = "detailed", help = "Include the full budget entry listing")]
    pub detailed: bool,

    /// Enable verbose logging output
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Enable verbose logging (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ExtractArgs {
    /// Validate the extract command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.exists() {
            return Err(Error::configuration(format!(
                "Input path does not exist: {}",
                self.input_path.display()
            )));
        }

        if let Some(max_blocks) = self.max_blocks {
            if max_blocks == 0 {
                return Err(Error::configuration(
                    "Block limit must be greater than 0".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl SummaryArgs {
    /// Validate the summary command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input_file.exists() {
            return Err(Error::configuration(format!(
                "Listing file does not exist: {}",
                self.input_file.display()
            )));
        }
        if !self.input_file.is_file() {
            return Err(Error::configuration(format!(
                "Not a file: {}",
                self.input_file.display()
            )));
        }
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
