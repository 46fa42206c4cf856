//! Command line argument parsing for the concord CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::search::{OutputMode, SearchMode};

/// Concord - a KWIC concordance search engine
#[derive(Parser, Debug, Clone)]
#[command(name = "concord")]
#[command(about = "A KWIC concordance search engine")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ConcordArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ConcordArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable concordance listing
    Human,
    /// JSON records
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search a text file for a word, POS tag, or entity label
    Search(SearchArgs),

    /// Dump the annotated token sequence of a text file
    Tokens(TokensArgs),

    /// Dump the recognized entity spans of a text file
    Entities(EntitiesArgs),
}

/// Arguments for the search command
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Path to the text file to search
    #[arg(value_name = "TEXT_FILE")]
    pub text_file: PathBuf,

    /// The search term: a word, POS tag, or entity label
    #[arg(short, long)]
    pub term: String,

    /// Token attribute to search over (word, pos, ner)
    #[arg(short, long, default_value = "word")]
    pub mode: SearchMode,

    /// Result ordering (kwic, frequency, right_sort, left_sort, position)
    #[arg(short, long, default_value = "kwic")]
    pub output: OutputMode,

    /// Context tokens on each side of a match
    #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..=10))]
    pub window: u64,
}

/// Arguments for the tokens command
#[derive(Parser, Debug, Clone)]
pub struct TokensArgs {
    /// Path to the text file to annotate
    #[arg(value_name = "TEXT_FILE")]
    pub text_file: PathBuf,
}

/// Arguments for the entities command
#[derive(Parser, Debug, Clone)]
pub struct EntitiesArgs {
    /// Path to the text file to annotate
    #[arg(value_name = "TEXT_FILE")]
    pub text_file: PathBuf,
}
