//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! multiple CLI command implementations.

use crate::cli::args::{ExtractArgs, SummaryArgs};
use crate::config::Config;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

/// Processing statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    /// Number of listing files processed
    pub files_processed: usize,
    /// Number of files skipped because of errors
    pub files_failed: usize,
    /// Number of report blocks extracted
    pub blocks_extracted: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
    /// Output file sizes in bytes
    pub output_sizes: Vec<(String, u64)>,
}

impl ProcessingStats {
    /// Calculate total output size in bytes
    pub fn total_output_size(&self) -> u64 {
        self.output_sizes.iter().map(|(_, size)| size).sum()
    }

    /// Format output size in human-readable format
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

/// Set up structured logging for the extract command
pub fn setup_logging(args: &ExtractArgs) -> Result<()> {
    init_subscriber(args.get_log_level(), args.quiet);
    Ok(())
}

/// Set up structured logging for the summary command
pub fn setup_summary_logging(args: &SummaryArgs) -> Result<()> {
    init_subscriber(args.get_log_level(), false);
    Ok(())
}

fn init_subscriber(log_level: &str, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mflist_processor={}", log_level)));

    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Build configuration from extract command arguments
pub fn load_configuration(args: &ExtractArgs) -> Result<Config> {
    info!("Loading configuration");

    let mut config = Config::default();
    config.processing.input_path = args.input_path.clone();
    config.processing.output_path = args.output_path.clone();
    config.processing.variant = args.variant;
    config.processing.max_blocks = args.max_blocks;
    config.processing.dry_run = args.dry_run;
    config.processing.force_overwrite = args.force_overwrite;
    config.export.format = args.format;
    config.export.start_date = args.start_date.clone();
    config.logging.level = args.get_log_level().to_string();

    config.validate()?;
    Ok(config)
}

/// Check if an error is critical enough to stop batch processing
///
/// Per-file parse failures are not; they degrade that file and continue.
pub fn is_critical_error(error: &Error) -> bool {
    matches!(
        error,
        Error::Configuration { .. } | Error::DirectoryTraversal { .. }
    )
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}
