//! Command line argument parsing for the perkins CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::spelling::DEFAULT_MAX_SUGGESTIONS;

/// Perkins - Braille cell decoding with autocorrect suggestions
#[derive(Parser, Debug, Clone)]
#[command(name = "perkins")]
#[command(about = "Decode Braille cells and autocorrect the result against a lexicon")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PerkinsArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
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

impl PerkinsArgs {
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

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Decode a cell sequence and autocorrect the result
    Decode(DecodeArgs),

    /// Rank lexicon words against a typed word
    Suggest(SuggestArgs),

    /// Encode a word into cells
    Encode(EncodeArgs),

    /// Run a short scripted walkthrough on the built-in lexicon
    Demo,
}

/// Arguments for decoding cell sequences
#[derive(Parser, Debug, Clone)]
pub struct DecodeArgs {
    /// Cells as dot-number tokens, one per letter (e.g. 14 1 123 123)
    #[arg(value_name = "CELL", required = true)]
    pub cells: Vec<String>,

    /// Read each cell as a six-key chord over f d s j k l instead
    #[arg(short, long)]
    pub keys: bool,

    /// Word list file, one word per line (defaults to the built-in sample)
    #[arg(short, long, value_name = "WORDS_FILE")]
    pub words: Option<PathBuf>,

    /// Maximum number of suggestions to show
    #[arg(short, long, default_value_t = DEFAULT_MAX_SUGGESTIONS)]
    pub limit: usize,
}

/// Arguments for ranking suggestions against a word
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// The word to correct
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Word list file, one word per line (defaults to the built-in sample)
    #[arg(short = 'w', long, value_name = "WORDS_FILE")]
    pub words: Option<PathBuf>,

    /// Maximum number of suggestions to show
    #[arg(short, long, default_value_t = DEFAULT_MAX_SUGGESTIONS)]
    pub limit: usize,
}

/// Arguments for encoding a word
#[derive(Parser, Debug, Clone)]
pub struct EncodeArgs {
    /// The word to encode (letters a-z)
    #[arg(value_name = "WORD")]
    pub word: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
