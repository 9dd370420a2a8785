use clap::Parser;
use mflist_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", anyhow::Error::new(error));
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("MODFLOW Listing Processor - Water Budget Extractor");
    println!("==================================================");
    println!();
    println!("Extract the repeated water-budget and time-summary report blocks from");
    println!("MODFLOW-family listing files into CSV or Parquet time-series tables.");
    println!();
    println!("USAGE:");
    println!("    mflist-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    extract     Extract budget tables from listing files (main command)");
    println!("    summary     Report the budget structure of a single listing file");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Extract every listing file under the current directory:");
    println!("    mflist-processor extract");
    println!();
    println!("    # Extract one SEAWAT listing to Parquet with calendar dates:");
    println!("    mflist-processor extract --input model.lst --variant seawat \\");
    println!("                             --format parquet --start-date 2015-10-21");
    println!();
    println!("    # Inspect a listing's budget structure:");
    println!("    mflist-processor summary model.lst --detailed");
    println!();
    println!("For detailed help on any command, use:");
    println!("    mflist-processor <COMMAND> --help");
}
