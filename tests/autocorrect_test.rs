//! Integration tests for the decode-and-autocorrect pipeline.

use std::io::Write;

use perkins::prelude::*;
use tempfile::NamedTempFile;

const CALL: [&str; 4] = ["14", "1", "123", "123"];
const DALL: [&str; 4] = ["145", "1", "123", "123"];

fn sample_engine() -> AutocorrectEngine {
    AutocorrectEngine::new(Lexicon::sample())
}

fn suggestion_words(outcome: &Outcome) -> Vec<String> {
    match outcome {
        Outcome::Suggestions(candidates) => candidates.iter().map(|c| c.word.clone()).collect(),
        other => panic!("expected suggestions, got {other:?}"),
    }
}

#[test]
fn test_correct_word_reports_valid() {
    let engine = sample_engine();
    let outcome = engine.process(CALL);

    assert_eq!(outcome, Outcome::Valid("call".to_string()));
    assert_eq!(outcome.to_string(), "Valid word: call");
}

#[test]
fn test_one_cell_error_suggests_closest_words() {
    let engine = sample_engine();
    let outcome = engine.process(DALL);

    assert_eq!(suggestion_words(&outcome), ["call", "ball", "fall"]);
    assert_eq!(outcome.to_string(), "Did you mean: call, ball, fall?");
}

#[test]
fn test_dot_order_within_a_cell_does_not_matter() {
    let engine = sample_engine();

    let canonical = engine.process(CALL);
    let scrambled = engine.process(["41", "1", "321", "231"]);
    assert_eq!(canonical, scrambled);
}

#[test]
fn test_unmapped_cell_rejects_the_whole_sequence() {
    let engine = sample_engine();

    // Dots 2-4-6 form no letter; even valid neighbors cannot save the word.
    let outcome = engine.process(["14", "246", "123", "123"]);
    assert_eq!(outcome, Outcome::InvalidInput);
    assert_eq!(outcome.to_string(), "Invalid Braille input");
}

#[test]
fn test_malformed_token_rejects_the_whole_sequence() {
    let engine = sample_engine();

    assert_eq!(engine.process(["14", "1", "99"]), Outcome::InvalidInput);
    assert_eq!(engine.process(["14", "1", "12a"]), Outcome::InvalidInput);
    assert_eq!(engine.process(["14", "11"]), Outcome::InvalidInput);
}

#[test]
fn test_word_prefix_is_not_a_valid_word() {
    let engine = sample_engine();

    // "ca" starts "call" and "cake" but is not itself stored.
    assert!(engine.lexicon().contains_prefix("ca"));
    let outcome = engine.process(["14", "1"]);
    assert!(matches!(outcome, Outcome::Suggestions(_)));
}

#[test]
fn test_accepted_suggestions_rise_in_later_rankings() {
    let mut engine = sample_engine();

    assert_eq!(suggestion_words(&engine.process(DALL)), ["call", "ball", "fall"]);

    engine.accept_suggestion("ball").unwrap();
    engine.accept_suggestion("ball").unwrap();

    assert_eq!(suggestion_words(&engine.process(DALL)), ["ball", "call", "fall"]);
}

#[test]
fn test_no_suggestions_only_from_an_empty_lexicon() {
    let empty = AutocorrectEngine::new(Lexicon::new());
    let outcome = empty.process(DALL);
    assert_eq!(outcome, Outcome::NoSuggestions);
    assert_eq!(outcome.to_string(), "No suggestions found");

    // With any lexicon at all, even a distant word gets suggestions.
    let engine = sample_engine();
    let outcome = engine.process(["1346", "1346", "1346", "1346", "1346", "1346"]);
    assert!(matches!(outcome, Outcome::Suggestions(_)));
}

#[test]
fn test_six_key_entry_matches_dot_entry() {
    let engine = sample_engine();

    // d=145 is f-j-k on the home row, a=1 is f, l=123 is f-d-s.
    let from_keys = engine.process_keys(["fjk", "f", "fds", "fds"]);
    let from_dots = engine.process(DALL);
    assert_eq!(from_keys, from_dots);
}

#[test]
fn test_bad_chord_rejects_the_whole_sequence() {
    let engine = sample_engine();

    assert_eq!(engine.process_keys(["fd", "q"]), Outcome::InvalidInput);
    assert_eq!(engine.process_keys(["fj", "ff"]), Outcome::InvalidInput);
}

#[test]
fn test_empty_sequence_is_invalid_input() {
    let engine = sample_engine();

    let outcome = engine.process(Vec::<&str>::new());
    assert_eq!(outcome, Outcome::InvalidInput);
}

#[test]
fn test_suggestions_are_deterministic() {
    let engine = sample_engine();

    let first = engine.process(DALL);
    let second = engine.process(DALL);
    assert_eq!(first, second);
}

#[test]
fn test_suggestion_distances_never_decrease() {
    let engine = sample_engine();

    let candidates = engine.suggest_word("dale");
    assert!(!candidates.is_empty());
    for pair in candidates.windows(2) {
        assert!(pair[0].distance <= pair[1].distance);
    }
}

#[test]
fn test_end_to_end_with_a_loaded_word_list() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "cat")?;
    writeln!(file, "hat")?;
    writeln!(file, "bat")?;
    file.flush()?;

    let lexicon = Lexicon::load_from_file(file.path())?;
    let engine = AutocorrectEngine::new(lexicon);

    // c-a-t decodes and validates.
    assert_eq!(
        engine.process(["14", "1", "2345"]),
        Outcome::Valid("cat".to_string())
    );

    // r-a-t is unknown; all three stored words are one edit away.
    let outcome = engine.process(["1235", "1", "2345"]);
    assert_eq!(suggestion_words(&outcome), ["cat", "hat", "bat"]);

    Ok(())
}

#[test]
fn test_round_trip_through_the_encoder() -> Result<()> {
    let engine = sample_engine();
    let decoder = engine.decoder();

    for word in engine.lexicon().words() {
        let cells = decoder.encode_word(word)?;
        let tokens: Vec<String> = cells.iter().map(|c| c.token()).collect();
        assert_eq!(engine.process(&tokens), Outcome::Valid(word.clone()));
    }

    Ok(())
}
