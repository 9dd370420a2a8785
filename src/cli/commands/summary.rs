//! Summary command: per-file budget structure report

use super::shared::{self, ProcessingStats};
use crate::app::services::list_parser::{ListingFile, ListingVariant};
use crate::cli::args::SummaryArgs;
use crate::Result;
use colored::Colorize;
use std::time::Instant;

/// Number of head lines scanned for variant detection
const DETECT_SCAN_LINES: usize = 5000;

/// Run the summary command
pub fn run_summary(args: SummaryArgs) -> Result<ProcessingStats> {
    shared::setup_summary_logging(&args)?;
    args.validate()?;

    let started = Instant::now();

    let variant = match args.variant {
        Some(variant) => variant,
        None => ListingVariant::detect(&args.input_file, DETECT_SCAN_LINES)?,
    };
    let listing = ListingFile::new(&args.input_file, variant)?;
    let loaded = listing.load(args.max_blocks)?;

    println!("{}", args.input_file.display().to_string().bold());
    println!("  Variant:        {}", variant);
    println!("  Report blocks:  {}", loaded.len());
    println!("  Budget entries: {}", loaded.entries().len());

    let kstpkper = loaded.kstpkper();
    if let (Some(first), Some(last)) = (kstpkper.first(), kstpkper.last()) {
        println!(
            "  Steps:          ts {} sp {}  ->  ts {} sp {}",
            first.0, first.1, last.0, last.1
        );
    }

    let times = loaded.times();
    let valid_times: Vec<f64> = times.iter().copied().filter(|t| !t.is_nan()).collect();
    if let (Some(first), Some(last)) = (valid_times.first(), valid_times.last()) {
        println!("  Elapsed time:   {} -> {}", first, last);
    } else {
        println!(
            "  Elapsed time:   {}",
            "no time-summary blocks found".yellow()
        );
    }

    match loaded.worst_discrepancy() {
        Some(worst) if worst > 1.0 => {
            println!(
                "  Discrepancy:    {} {}",
                format!("{:.2}%", worst).red().bold(),
                "(budget does not close)".red()
            );
        }
        Some(worst) => {
            println!("  Discrepancy:    {:.2}%", worst);
        }
        None => {
            println!("  Discrepancy:    not reported");
        }
    }

    if args.detailed {
        println!();
        println!("  {}", "Budget entries".bold());
        for entry in loaded.entries() {
            println!("    {}", entry);
        }
    }

    Ok(ProcessingStats {
        files_processed: 1,
        blocks_extracted: loaded.len(),
        processing_time: started.elapsed(),
        ..Default::default()
    })
}
