//! Command implementations for the perkins CLI.

use std::path::Path;

use crate::braille::CellDecoder;
use crate::cli::args::{Command, DecodeArgs, EncodeArgs, PerkinsArgs, SuggestArgs};
use crate::cli::output::{DecodeResult, EncodeResult, StatsResult, SuggestResult, output_result};
use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::pipeline::AutocorrectEngine;
use crate::spelling::RankerConfig;

/// Execute a CLI command.
pub fn execute_command(args: PerkinsArgs) -> Result<()> {
    match &args.command {
        Command::Decode(decode_args) => decode_cells(decode_args.clone(), &args),
        Command::Suggest(suggest_args) => rank_suggestions(suggest_args.clone(), &args),
        Command::Encode(encode_args) => encode_word(encode_args.clone(), &args),
        Command::Demo => run_demo(&args),
    }
}

/// Decode a cell sequence and autocorrect the result.
fn decode_cells(args: DecodeArgs, cli_args: &PerkinsArgs) -> Result<()> {
    let lexicon = load_lexicon(args.words.as_deref(), cli_args)?;
    let engine = AutocorrectEngine::with_config(
        lexicon,
        RankerConfig {
            max_suggestions: args.limit,
        },
    );

    let outcome = if args.keys {
        engine.process_keys(&args.cells)
    } else {
        engine.process(&args.cells)
    };

    output_result(
        &DecodeResult {
            cells: args.cells,
            outcome,
        },
        cli_args,
    )
}

/// Rank lexicon words against a typed word.
fn rank_suggestions(args: SuggestArgs, cli_args: &PerkinsArgs) -> Result<()> {
    let lexicon = load_lexicon(args.words.as_deref(), cli_args)?;
    let engine = AutocorrectEngine::with_config(
        lexicon,
        RankerConfig {
            max_suggestions: args.limit,
        },
    );

    let suggestions = engine.suggest_word(&args.word);

    output_result(
        &SuggestResult {
            word: args.word,
            suggestions,
        },
        cli_args,
    )
}

/// Encode a word into cells.
fn encode_word(args: EncodeArgs, cli_args: &PerkinsArgs) -> Result<()> {
    let decoder = CellDecoder::new();
    let cells = decoder.encode_word(&args.word)?;

    output_result(
        &EncodeResult {
            word: args.word.to_lowercase(),
            cells: cells.iter().map(|c| c.token()).collect(),
            glyphs: cells.iter().map(|c| c.braille_char()).collect(),
        },
        cli_args,
    )
}

/// Run a scripted walkthrough on the built-in lexicon.
fn run_demo(cli_args: &PerkinsArgs) -> Result<()> {
    let mut engine = AutocorrectEngine::new(Lexicon::sample());
    let verbosity = cli_args.verbosity();

    let call = encode_tokens(&engine, "call")?;
    let dall = encode_tokens(&engine, "dall")?;

    if verbosity > 0 {
        println!("Decoding a correctly entered word ({}):", call.join(" "));
    }
    println!("{}", engine.process(&call));

    if verbosity > 0 {
        println!();
        println!("Decoding the same word with one wrong cell ({}):", dall.join(" "));
    }
    println!("{}", engine.process(&dall));

    if verbosity > 0 {
        println!();
        println!("Accepting \"ball\" twice, then decoding again:");
    }
    engine.accept_suggestion("ball")?;
    engine.accept_suggestion("ball")?;
    println!("{}", engine.process(&dall));

    if verbosity > 0 {
        println!();
        println!("Decoding a cell outside the alphabet (246):");
    }
    println!("{}", engine.process(["246"]));

    if verbosity > 0 {
        println!();
        println!("{}", StatsResult::from(engine.stats()));
    }

    Ok(())
}

/// Encode a word into its dot-number tokens.
fn encode_tokens(engine: &AutocorrectEngine, word: &str) -> Result<Vec<String>> {
    let cells = engine.decoder().encode_word(word)?;
    Ok(cells.iter().map(|c| c.token()).collect())
}

/// Load the lexicon named on the command line, or the built-in sample.
fn load_lexicon(words: Option<&Path>, cli_args: &PerkinsArgs) -> Result<Lexicon> {
    match words {
        Some(path) => {
            if cli_args.verbosity() > 1 {
                println!("Loading word list from: {}", path.display());
            }
            Lexicon::load_from_file(path)
        }
        None => Ok(Lexicon::sample()),
    }
}
