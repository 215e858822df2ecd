//! Length-partitioned word index
//!
//! The lexicon is built once and is read-only afterwards, so a single
//! instance can be shared by reference across any number of games and
//! threads.

use super::embedded::WORDS;
use super::frequency::rank_letters;
use super::loader::{LoadError, load_from_file, read_words, words_from_slice};
use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use std::io::BufRead;
use std::path::Path;
use thiserror::Error;

/// No word falls inside a requested length range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no words with length between {min_len} and {max_len}")]
pub struct NoCandidatesError {
    pub min_len: usize,
    pub max_len: usize,
}

/// Immutable dictionary indexed by word length
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: Vec<Word>,
    by_length: FxHashMap<usize, Vec<usize>>,
    rankings: FxHashMap<usize, Vec<(char, usize)>>,
}

impl Lexicon {
    /// Build a lexicon from already validated words
    ///
    /// Word order is preserved. Letter frequency rankings are computed here
    /// for every length present.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Empty` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, LoadError> {
        if words.is_empty() {
            return Err(LoadError::Empty);
        }

        let mut by_length: FxHashMap<usize, Vec<usize>> = FxHashMap::default();
        for (index, word) in words.iter().enumerate() {
            by_length.entry(word.len()).or_default().push(index);
        }

        let rankings = by_length
            .iter()
            .map(|(&len, indices)| (len, rank_letters(indices.iter().map(|&i| &words[i]))))
            .collect();

        Ok(Self {
            words,
            by_length,
            rankings,
        })
    }

    /// Load a lexicon from a reader, one word per line
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Io` if reading fails, or `LoadError::Empty` if no
    /// usable word remains after normalization.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::lexicon::Lexicon;
    /// use std::io::Cursor;
    ///
    /// let lexicon = Lexicon::load(Cursor::new("Cat\ncar\n\nbat\n")).unwrap();
    /// assert_eq!(lexicon.len(), 3);
    /// assert_eq!(lexicon.frequency_ranking(3)[0], ('a', 3));
    /// ```
    pub fn load<R: BufRead>(source: R) -> Result<Self, LoadError> {
        Self::new(read_words(source)?)
    }

    /// Load a lexicon from a file path
    ///
    /// # Errors
    ///
    /// Same as [`Lexicon::load`], plus failure to open the file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        Self::new(load_from_file(path)?)
    }

    /// Build a lexicon from in-memory lines
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Empty` if no line is a usable word.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self, LoadError> {
        Self::new(words_from_slice(lines))
    }

    /// Lexicon over the word list compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Empty` only if the binary was built with an
    /// empty `data/words.txt`.
    pub fn embedded() -> Result<Self, LoadError> {
        Self::from_lines(WORDS)
    }

    /// All words in load order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Distinct word lengths present, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.by_length.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    /// Words with exactly `len` characters, in load order
    ///
    /// Returns an empty vector when no word has that length.
    #[must_use]
    pub fn words_of_length(&self, len: usize) -> Vec<&Word> {
        self.by_length
            .get(&len)
            .map(|indices| indices.iter().map(|&i| &self.words[i]).collect())
            .unwrap_or_default()
    }

    /// Letter ranking for words of length `len`, most frequent first
    ///
    /// Repeated letters within a word all count. Empty for unknown lengths.
    #[must_use]
    pub fn frequency_ranking(&self, len: usize) -> &[(char, usize)] {
        self.rankings.get(&len).map_or(&[], Vec::as_slice)
    }

    /// Pick a word uniformly among those with length in `min_len..=max_len`
    ///
    /// # Errors
    ///
    /// Returns `NoCandidatesError` if no word has a length in range.
    pub fn select_random_word<R: Rng + ?Sized>(
        &self,
        min_len: usize,
        max_len: usize,
        rng: &mut R,
    ) -> Result<&Word, NoCandidatesError> {
        let pool: Vec<&Word> = self
            .words
            .iter()
            .filter(|word| (min_len..=max_len).contains(&word.len()))
            .collect();

        pool.choose(rng)
            .copied()
            .ok_or(NoCandidatesError { min_len, max_len })
    }
}
