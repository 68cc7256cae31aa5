//! Bondcalc CLI - Command-line interface for bond analytics.
//!
//! # Usage
//!
//! ```bash
//! # Analyze a bond
//! bondcalc analyze --face 1000 --coupon 5 --price 950 --years 10 --frequency 2
//!
//! # Include the cash flow schedule
//! bondcalc analyze --price 1050 --cashflows
//!
//! # Machine-readable output
//! bondcalc --format json analyze --price 950
//! ```

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up output format
    let format = cli.format;

    // Execute command
    let outcome = match cli.command {
        Commands::Analyze(args) => commands::analyze::execute(args, format),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::print_error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}
