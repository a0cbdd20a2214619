//! Output formatting for CLI commands.

use std::fmt;

use serde::Serialize;

use crate::cli::args::{OutputFormat, PerkinsArgs};
use crate::error::Result;
use crate::pipeline::{EngineStats, Outcome};
use crate::spelling::RankedCandidate;

/// Result structure for the decode command.
#[derive(Debug, Serialize)]
pub struct DecodeResult {
    pub cells: Vec<String>,
    pub outcome: Outcome,
}

impl fmt::Display for DecodeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.outcome)
    }
}

/// Result structure for the suggest command.
#[derive(Debug, Serialize)]
pub struct SuggestResult {
    pub word: String,
    pub suggestions: Vec<RankedCandidate>,
}

impl fmt::Display for SuggestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.suggestions.is_empty() {
            write!(f, "No suggestions found")
        } else {
            let words: Vec<&str> = self.suggestions.iter().map(|c| c.word.as_str()).collect();
            write!(f, "Did you mean: {}?", words.join(", "))
        }
    }
}

/// Result structure for the encode command.
#[derive(Debug, Serialize)]
pub struct EncodeResult {
    pub word: String,
    pub cells: Vec<String>,
    pub glyphs: String,
}

impl fmt::Display for EncodeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.word, self.cells.join(" "), self.glyphs)
    }
}

/// Engine counters as shown at the end of the demo.
#[derive(Debug, Serialize)]
pub struct StatsResult {
    pub words: usize,
    pub feedback_entries: usize,
    pub total_reinforcements: u32,
}

impl From<EngineStats> for StatsResult {
    fn from(stats: EngineStats) -> StatsResult {
        StatsResult {
            words: stats.words,
            feedback_entries: stats.feedback_entries,
            total_reinforcements: stats.total_reinforcements,
        }
    }
}

impl fmt::Display for StatsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Lexicon words: {}", self.words)?;
        writeln!(f, "Feedback entries: {}", self.feedback_entries)?;
        write!(f, "Total reinforcements: {}", self.total_reinforcements)
    }
}

/// Output a result in the format selected on the command line.
pub fn output_result<T: Serialize + fmt::Display>(result: &T, args: &PerkinsArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("{result}");
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &PerkinsArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
