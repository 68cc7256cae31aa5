//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::AnalyzeArgs;

/// Bondcalc - Bond analytics from the command line
#[derive(Parser)]
#[command(name = "bondcalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a bond (current yield, YTM, total interest, classification)
    Analyze(AnalyzeArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format (cash flow schedule)
    Csv,
    /// Minimal output (just the YTM)
    Minimal,
}
