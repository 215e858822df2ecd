//! Hangman word representation
//!
//! A Word is a lowercase run of ASCII letters and spaces. Multi-word secrets
//! such as "ice cream" are single words whose spaces are always visible.

use super::LetterSet;
use std::fmt;
use thiserror::Error;

/// A validated lowercase word of letters and spaces
///
/// Words are ASCII-only, so byte length and character count agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must contain at least one letter")]
    Empty,
    #[error("word contains {0:?}; only letters and spaces are allowed")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Nothing is left after trimming
    /// - Any character is not an ASCII letter or a space
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Word;
    ///
    /// let word = Word::new("  Ice Cream ").unwrap();
    /// assert_eq!(word.text(), "ice cream");
    /// assert_eq!(word.len(), 9);
    ///
    /// assert!(Word::new("   ").is_err());
    /// assert!(Word::new("r2d2").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = text.chars().find(|&c| !(c.is_ascii_lowercase() || c == ' ')) {
            return Err(WordError::InvalidCharacter(bad));
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters, spaces included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> char {
        char::from(self.as_bytes()[position])
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        letter != ' ' && self.text.contains(letter)
    }

    /// All positions where a letter appears
    pub fn positions_of(&self, letter: char) -> impl Iterator<Item = usize> + '_ {
        self.text
            .char_indices()
            .filter(move |&(_, c)| c == letter && c != ' ')
            .map(|(i, _)| i)
    }

    /// Iterate over letters, skipping spaces, repeats included
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars().filter(|&c| c != ' ')
    }

    /// The set of distinct letters in the word
    #[must_use]
    pub fn distinct_letters(&self) -> LetterSet {
        self.letters().collect()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("hangman").unwrap();
        assert_eq!(word.text(), "hangman");
        assert_eq!(word.as_bytes(), b"hangman");
        assert_eq!(word.len(), 7);
    }

    #[test]
    fn word_creation_normalizes_case_and_whitespace() {
        let word = Word::new("  HangMan\n").unwrap();
        assert_eq!(word.text(), "hangman");
    }

    #[test]
    fn word_with_inner_space_keeps_it() {
        let word = Word::new("Hot Dog").unwrap();
        assert_eq!(word.text(), "hot dog");
        assert_eq!(word.len(), 7);
        assert_eq!(word.char_at(3), ' ');
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new(" \t "), Err(WordError::Empty));
        assert_eq!(Word::new("cat5"), Err(WordError::InvalidCharacter('5')));
        assert_eq!(Word::new("don't"), Err(WordError::InvalidCharacter('\'')));
        assert_eq!(Word::new("café"), Err(WordError::InvalidCharacter('é')));
    }

    #[test]
    fn word_has_letter_ignores_space() {
        let word = Word::new("sea lion").unwrap();
        assert!(word.has_letter('s'));
        assert!(word.has_letter('n'));
        assert!(!word.has_letter('z'));
        assert!(!word.has_letter(' '));
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = Word::new("letter").unwrap();
        assert_eq!(word.positions_of('t').collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(word.positions_of('e').collect::<Vec<_>>(), vec![1, 4]);
        assert_eq!(word.positions_of('z').count(), 0);
    }

    #[test]
    fn word_letters_skip_spaces() {
        let word = Word::new("ice age").unwrap();
        assert_eq!(word.letters().collect::<String>(), "iceage");
        assert_eq!(word.distinct_letters().len(), 5);
    }

    #[test]
    fn word_display() {
        let word = Word::new("Olive Oil").unwrap();
        assert_eq!(format!("{word}"), "olive oil");
    }
}
