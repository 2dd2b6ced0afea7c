//! Command-line options.

use clap::{Parser, ValueEnum};

use crate::session::DEFAULT_OPENING;

/// Word-guessing assistant: narrows a five-letter word list from per-letter
/// feedback and suggests the next guess.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list (single-column CSV accepted)
    #[arg(short = 'i', long = "input")]
    pub wordlist_path: Option<String>,

    /// How the next guess is chosen from the remaining candidates
    #[arg(long, value_enum, default_value = "random")]
    pub strategy: StrategyKind,

    /// Seed for the random strategy, for reproducible sessions
    #[arg(long)]
    pub seed: Option<u64>,

    /// Opening guess printed before any feedback is read
    #[arg(long, default_value = DEFAULT_OPENING)]
    pub opening: String,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// Uniform random choice among remaining candidates
    Random,
    /// Highest letter-frequency score, deterministic
    Frequency,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}
