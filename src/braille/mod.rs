//! Braille cell representation and decoding.
//!
//! A cell is a set of raised dots in a 2x3 grid, numbered 1-3 down the left
//! column and 4-6 down the right. [`cell::Cell`] stores one cell as a six-bit
//! mask, [`alphabet::Alphabet`] maps alphabetic cells to letters, and
//! [`decoder::CellDecoder`] turns token sequences into words.

pub mod alphabet;
pub mod cell;
pub mod decoder;

pub use alphabet::Alphabet;
pub use cell::Cell;
pub use decoder::CellDecoder;
