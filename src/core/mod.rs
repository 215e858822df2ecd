//! Core domain types for Hangman
//!
//! This module contains the fundamental value types shared by the lexicon,
//! the guess engine and the game. None of them perform I/O.

mod letters;
mod mask;
mod word;

pub use letters::{ALPHABET_LEN, LetterSet};
pub use mask::{Cell, Mask, MaskError};
pub use word::{Word, WordError};
