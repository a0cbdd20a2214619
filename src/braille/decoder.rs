//! Decoding of Braille cell sequences into text.

use crate::braille::alphabet::Alphabet;
use crate::braille::cell::Cell;
use crate::error::{PerkinsError, Result};

/// Decodes cells against an alphabet, one letter per cell.
///
/// Decoding a word is all-or-nothing: a single malformed or unmapped cell
/// fails the whole sequence so that no partial text escapes.
#[derive(Debug, Clone)]
pub struct CellDecoder {
    alphabet: &'static Alphabet,
}

impl CellDecoder {
    /// Creates a decoder over the standard English alphabet.
    pub fn new() -> CellDecoder {
        CellDecoder {
            alphabet: Alphabet::standard(),
        }
    }

    /// Decodes one dot-number token into a letter.
    pub fn decode_cell(&self, token: &str) -> Result<char> {
        let cell = Cell::parse(token)?;
        self.letter(cell)
    }

    /// Decodes one six-key chord (home-row letters) into a letter.
    pub fn decode_cell_keys(&self, keys: &str) -> Result<char> {
        let cell = Cell::from_keys(keys)?;
        self.letter(cell)
    }

    /// Decodes a sequence of dot-number tokens into a word.
    pub fn decode_word<I, S>(&self, tokens: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens
            .into_iter()
            .map(|token| self.decode_cell(token.as_ref()))
            .collect()
    }

    /// Decodes a sequence of six-key chords into a word.
    pub fn decode_word_keys<I, S>(&self, chords: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        chords
            .into_iter()
            .map(|chord| self.decode_cell_keys(chord.as_ref()))
            .collect()
    }

    /// Encodes a word back into cells, one per letter.
    ///
    /// Useful for building test inputs and for showing the cell form of a
    /// suggestion. Fails on any character outside a-z (case-insensitive).
    pub fn encode_word(&self, word: &str) -> Result<Vec<Cell>> {
        word.chars()
            .map(|letter| {
                self.alphabet
                    .cell(letter)
                    .ok_or_else(|| PerkinsError::invalid_word(word))
            })
            .collect()
    }

    fn letter(&self, cell: Cell) -> Result<char> {
        self.alphabet
            .letter(cell)
            .ok_or_else(|| PerkinsError::unmapped_cell(cell.token()))
    }
}

impl Default for CellDecoder {
    fn default() -> CellDecoder {
        CellDecoder::new()
    }
}
