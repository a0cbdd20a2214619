//! Braille cell representation and token parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::{PerkinsError, Result};

/// A single Braille cell: the set of raised dots at positions 1 through 6.
///
/// Stored as a bitmask with bit N-1 set when dot N is raised. The mask is the
/// canonical form of the cell: every spelling of the same dot set, in any
/// order, parses to the identical `Cell` value, so canonicalization is
/// idempotent by construction. The bit layout matches the Unicode Braille
/// Patterns block, which makes the display glyph a single addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Cell(u8);

impl Cell {
    /// The cell with no raised dots. Not a letter; decoding rejects it.
    pub const EMPTY: Cell = Cell(0);

    /// Wraps a raw six-bit mask. High bits are discarded.
    pub(crate) const fn from_mask(mask: u8) -> Cell {
        Cell(mask & 0x3F)
    }

    /// Build a cell from explicit dot positions.
    ///
    /// Dot positions must be in 1-6. Repeated positions are fine here (the
    /// argument is read as a set); only token parsing treats repetition as
    /// malformed input.
    pub fn from_dots(dots: &[u8]) -> Result<Cell> {
        let mut cell = Cell::EMPTY;
        for &dot in dots {
            if !(1..=6).contains(&dot) {
                return Err(PerkinsError::invalid_token(format!(
                    "dot position {dot} is outside 1-6"
                )));
            }
            cell = Cell(cell.0 | 1 << (dot - 1));
        }
        Ok(cell)
    }

    /// Parse a cell token written as dot digits, e.g. `"145"` for dots 1, 4, 5.
    ///
    /// Digits may appear in any order: `"145"`, `"451"` and `"514"` all parse
    /// to the same cell. A character outside `'1'..='6'` or a repeated digit
    /// is an [`InvalidToken`](PerkinsError::InvalidToken) error. The empty
    /// token parses to [`Cell::EMPTY`].
    pub fn parse(token: &str) -> Result<Cell> {
        let mut cell = Cell::EMPTY;
        for ch in token.chars() {
            let dot = match ch.to_digit(10) {
                Some(d @ 1..=6) => d as u8,
                _ => {
                    return Err(PerkinsError::invalid_token(format!(
                        "'{ch}' in '{token}' is not a dot digit 1-6"
                    )));
                }
            };
            cell = cell.raise(dot).ok_or_else(|| {
                PerkinsError::invalid_token(format!("dot {dot} appears twice in '{token}'"))
            })?;
        }
        Ok(cell)
    }

    /// Parse a cell token written in the six-key home-row convention used by
    /// Braille keyboards: `f`, `d`, `s` press dots 1, 2, 3 and `j`, `k`, `l`
    /// press dots 4, 5, 6.
    ///
    /// Case-insensitive, and chord order does not matter. Unknown keys and
    /// repeated keys are [`InvalidToken`](PerkinsError::InvalidToken) errors.
    pub fn from_keys(keys: &str) -> Result<Cell> {
        let mut cell = Cell::EMPTY;
        for ch in keys.chars() {
            let dot = match ch.to_ascii_lowercase() {
                'f' => 1,
                'd' => 2,
                's' => 3,
                'j' => 4,
                'k' => 5,
                'l' => 6,
                other => {
                    return Err(PerkinsError::invalid_token(format!(
                        "'{other}' in '{keys}' is not one of the input keys f d s j k l"
                    )));
                }
            };
            cell = cell.raise(dot).ok_or_else(|| {
                PerkinsError::invalid_token(format!("key for dot {dot} appears twice in '{keys}'"))
            })?;
        }
        Ok(cell)
    }

    /// Raise one dot, or `None` if it is already raised.
    fn raise(self, dot: u8) -> Option<Cell> {
        let bit = 1u8 << (dot - 1);
        if self.0 & bit != 0 {
            None
        } else {
            Some(Cell(self.0 | bit))
        }
    }

    /// Whether the given dot position (1-6) is raised.
    pub fn contains_dot(self, dot: u8) -> bool {
        (1..=6).contains(&dot) && self.0 & (1 << (dot - 1)) != 0
    }

    /// Raised dot positions in ascending order.
    pub fn dots(self) -> impl Iterator<Item = u8> {
        (1..=6).filter(move |&dot| self.contains_dot(dot))
    }

    /// Number of raised dots.
    pub fn dot_count(self) -> u32 {
        self.0.count_ones()
    }

    /// True for the blank cell.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Canonical token form: the raised dot digits in ascending order.
    pub fn token(self) -> String {
        self.dots().map(|dot| char::from(b'0' + dot)).collect()
    }

    /// The Unicode Braille Patterns glyph for this cell.
    ///
    /// The Unicode block encodes dots 1-6 in the low six bits of the offset
    /// from U+2800, the same layout as the internal mask.
    pub fn braille_char(self) -> char {
        // Masks run 0..=63, all inside the Braille Patterns block.
        char::from_u32(0x2800 + u32::from(self.0)).unwrap_or('\u{2800}')
    }

    /// The raw six-bit mask. Alphabet lookup tables index on this.
    pub fn mask(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token())
    }
}

impl FromStr for Cell {
    type Err = PerkinsError;

    fn from_str(s: &str) -> Result<Cell> {
        Cell::parse(s)
    }
}
