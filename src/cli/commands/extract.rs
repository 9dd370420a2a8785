//! Extract command: batch conversion of listing files to tables

use super::shared::{self, ProcessingStats};
use crate::app::services::list_parser::{ListingFile, ListingVariant};
use crate::app::services::listing_scanner::{ListingFileInfo, ListingScanner};
use crate::app::services::table_export::TableWriter;
use crate::cli::args::ExtractArgs;
use crate::config::Config;
use crate::{Error, Result};
use colored::Colorize;
use std::time::Instant;
use tracing::{info, warn};

/// Number of head lines scanned for variant detection
const DETECT_SCAN_LINES: usize = 5000;

/// Run the extract command
pub fn run_extract(args: ExtractArgs) -> Result<ProcessingStats> {
    shared::setup_logging(&args)?;
    args.validate()?;
    let config = shared::load_configuration(&args)?;

    let started = Instant::now();

    let scanner = ListingScanner::new();
    let files = scanner.scan(&config.processing.input_path)?;
    if files.is_empty() {
        return Err(Error::configuration(format!(
            "No listing files found under: {}",
            config.processing.input_path.display()
        )));
    }

    if config.processing.dry_run {
        return dry_run_report(&config, &files, started);
    }

    config.ensure_output_directory()?;
    let writer = TableWriter::new(
        &config.processing.output_path,
        config.processing.force_overwrite,
    );
    let start_date = config.parse_start_date()?;

    let progress = args
        .show_progress()
        .then(|| shared::create_progress_bar(files.len() as u64, "Extracting budget tables"));

    let mut stats = ProcessingStats::default();
    for file in &files {
        if let Some(pb) = &progress {
            pb.set_message(file.filename());
        }

        match extract_one(file, &config, &writer, start_date) {
            Ok((blocks, written)) => {
                stats.files_processed += 1;
                stats.blocks_extracted += blocks;
                for (path, size) in written {
                    stats
                        .output_sizes
                        .push((path.display().to_string(), size));
                }
            }
            Err(err) if shared::is_critical_error(&err) => return Err(err),
            Err(err) => {
                warn!("skipping {}: {}", file.path.display(), err);
                stats.files_failed += 1;
            }
        }

        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    stats.processing_time = started.elapsed();
    if !args.quiet {
        print_summary(&stats);
    }
    Ok(stats)
}

/// Extract and export one listing file
fn extract_one(
    file: &ListingFileInfo,
    config: &Config,
    writer: &TableWriter,
    start_date: Option<chrono::NaiveDateTime>,
) -> Result<(usize, Vec<(std::path::PathBuf, u64)>)> {
    let variant = resolve_variant(file, config)?;
    info!(
        "extracting {} as {} listing",
        file.path.display(),
        variant
    );

    let listing = ListingFile::new(&file.path, variant)?;
    let loaded = listing.load(config.processing.max_blocks)?;
    let written = writer.write_tables(&file.stem, &loaded, config.export.format, start_date)?;
    Ok((loaded.len(), written))
}

fn resolve_variant(file: &ListingFileInfo, config: &Config) -> Result<ListingVariant> {
    match config.processing.variant {
        Some(variant) => Ok(variant),
        None => ListingVariant::detect(&file.path, DETECT_SCAN_LINES),
    }
}

fn dry_run_report(
    config: &Config,
    files: &[ListingFileInfo],
    started: Instant,
) -> Result<ProcessingStats> {
    println!("{}", "Dry run - no output will be written".yellow().bold());
    println!();
    for file in files {
        let variant = resolve_variant(file, config)
            .map(|v| v.to_string())
            .unwrap_or_else(|_| "unrecognized".to_string());
        println!(
            "  {:<12} {:>10}  {}",
            variant,
            ProcessingStats::format_size(file.size_bytes),
            file.path.display()
        );
    }
    println!();
    println!("{} file(s) would be processed", files.len());

    Ok(ProcessingStats {
        files_processed: files.len(),
        processing_time: started.elapsed(),
        ..Default::default()
    })
}

fn print_summary(stats: &ProcessingStats) {
    println!();
    println!("{}", "Extraction complete".green().bold());
    println!("  Files processed:  {}", stats.files_processed);
    if stats.files_failed > 0 {
        println!(
            "  Files failed:     {}",
            stats.files_failed.to_string().red()
        );
    }
    println!("  Blocks extracted: {}", stats.blocks_extracted);
    println!(
        "  Output written:   {} across {} file(s)",
        ProcessingStats::format_size(stats.total_output_size()),
        stats.output_sizes.len()
    );
    println!("  Elapsed:          {:.2?}", stats.processing_time);
}
