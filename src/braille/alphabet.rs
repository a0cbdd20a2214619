//! The standard single-cell Braille alphabet.
//!
//! Grade-1 English Braille maps each of the 26 lowercase Latin letters to one
//! cell. The table here is total over those letters and injective: every
//! letter has exactly one cell and no cell spells two letters. It is built
//! once behind a [`LazyLock`] and never mutated afterwards.

use std::sync::LazyLock;

use crate::braille::cell::Cell;

/// Dot patterns of the standard English Braille alphabet.
///
/// Letters a-j use dots 1, 2, 4, 5; k-t add dot 3; u-z (except w) add dots 3
/// and 6. W sits outside that progression for historical reasons.
const STANDARD_LETTER_DOTS: [(char, &[u8]); 26] = [
    ('a', &[1]),
    ('b', &[1, 2]),
    ('c', &[1, 4]),
    ('d', &[1, 4, 5]),
    ('e', &[1, 5]),
    ('f', &[1, 2, 4]),
    ('g', &[1, 2, 4, 5]),
    ('h', &[1, 2, 5]),
    ('i', &[2, 4]),
    ('j', &[2, 4, 5]),
    ('k', &[1, 3]),
    ('l', &[1, 2, 3]),
    ('m', &[1, 3, 4]),
    ('n', &[1, 3, 4, 5]),
    ('o', &[1, 3, 5]),
    ('p', &[1, 2, 3, 4]),
    ('q', &[1, 2, 3, 4, 5]),
    ('r', &[1, 2, 3, 5]),
    ('s', &[2, 3, 4]),
    ('t', &[2, 3, 4, 5]),
    ('u', &[1, 3, 6]),
    ('v', &[1, 2, 3, 6]),
    ('w', &[2, 4, 5, 6]),
    ('x', &[1, 3, 4, 6]),
    ('y', &[1, 3, 4, 5, 6]),
    ('z', &[1, 3, 5, 6]),
];

static STANDARD: LazyLock<Alphabet> = LazyLock::new(Alphabet::build_standard);

/// Bidirectional cell-to-letter table for the 26 alphabetic cells.
///
/// Lookups index fixed arrays on the cell's six-bit mask and on the letter,
/// so both directions are constant time.
#[derive(Debug)]
pub struct Alphabet {
    /// Letter for each of the 64 possible cell masks, where one exists.
    letters: [Option<char>; 64],
    /// Cell for each letter, indexed by `letter as usize - 'a' as usize`.
    cells: [Cell; 26],
}

impl Alphabet {
    /// The standard English Braille alphabet, built on first use.
    pub fn standard() -> &'static Alphabet {
        &STANDARD
    }

    fn build_standard() -> Alphabet {
        let mut letters = [None; 64];
        let mut cells = [Cell::EMPTY; 26];
        for (letter, dots) in STANDARD_LETTER_DOTS {
            let mask = dots.iter().fold(0u8, |mask, &dot| mask | 1 << (dot - 1));
            let cell = Cell::from_mask(mask);
            letters[usize::from(mask)] = Some(letter);
            cells[letter as usize - 'a' as usize] = cell;
        }
        Alphabet { letters, cells }
    }

    /// The letter a cell spells, or `None` if the cell is not alphabetic.
    pub fn letter(&self, cell: Cell) -> Option<char> {
        self.letters[usize::from(cell.mask())]
    }

    /// The cell for a letter (case-insensitive), or `None` outside a-z.
    pub fn cell(&self, letter: char) -> Option<Cell> {
        let lower = letter.to_ascii_lowercase();
        if lower.is_ascii_lowercase() {
            Some(self.cells[lower as usize - 'a' as usize])
        } else {
            None
        }
    }

    /// All (letter, cell) pairs in alphabetical order.
    pub fn entries(&self) -> impl Iterator<Item = (char, Cell)> + '_ {
        ('a'..='z').map(|letter| (letter, self.cells[letter as usize - 'a' as usize]))
    }
}
