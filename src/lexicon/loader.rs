//! Word list loading utilities
//!
//! Reads one word per line from files, readers or in-memory slices.

use crate::core::Word;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Error type for word lists that cannot be used
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read word list")]
    Io(#[from] io::Error),
    #[error("word list contains no usable words")]
    Empty,
}

/// Read words from any buffered reader
///
/// Each line is trimmed and lowercased. Blank lines and lines that are not
/// made of letters and spaces are skipped.
///
/// # Errors
///
/// Returns `LoadError::Io` if a line cannot be read (including invalid UTF-8).
pub fn read_words<R: BufRead>(reader: R) -> Result<Vec<Word>, LoadError> {
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = parse_line(&line?) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Load words from a file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use hangman_solver::lexicon::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let file = File::open(path)?;
    read_words(BufReader::new(file))
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use hangman_solver::lexicon::loader::words_from_slice;
///
/// let words = words_from_slice(&["Cat", "", "ice cream", "c4t"]);
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "ice cream");
/// ```
#[must_use]
pub fn words_from_slice<S: AsRef<str>>(slice: &[S]) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|line| parse_line(line.as_ref()))
        .collect()
}

fn parse_line(line: &str) -> Option<Word> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        None
    } else {
        Word::new(trimmed).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_words_trims_and_lowercases() {
        let input = Cursor::new("  Cat \nDOG\n\n   \nSea Lion\n");
        let words = read_words(input).unwrap();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["cat", "dog", "sea lion"]);
    }

    #[test]
    fn read_words_skips_invalid_lines() {
        let input = Cursor::new("apple\nx-ray\n42\nbanana\n");
        let words = read_words(input).unwrap();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["apple", "banana"]);
    }

    #[test]
    fn read_words_reports_invalid_utf8() {
        let input = Cursor::new(vec![b'o', b'k', b'\n', 0xff, 0xfe, b'\n']);
        assert!(matches!(read_words(input), Err(LoadError::Io(_))));
    }

    #[test]
    fn load_from_missing_file_fails() {
        let result = load_from_file("definitely/not/here/words.txt");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }
}
