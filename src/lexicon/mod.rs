//! Word lists for Hangman
//!
//! Loading, length indexing and letter frequency rankings. The default word
//! list is compiled into the binary for zero-cost access.

mod embedded;
mod frequency;
mod index;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use frequency::rank_letters;
pub use index::{Lexicon, NoCandidatesError};
pub use loader::LoadError;
