//! Masked word as seen by the guesser
//!
//! Each position is either a revealed letter, a literal space, or a hidden
//! placeholder. In text form a placeholder is written `_`, so `"_a_ _o_"`
//! is a three-letter word followed by another with an `o` in the middle.

use super::{LetterSet, Word};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use thiserror::Error;

/// One position of a mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// A letter that has been correctly guessed
    Revealed(char),
    /// A literal space, always visible
    Space,
    /// Unknown letter
    Hidden,
}

/// Error type for unparseable masks
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaskError {
    #[error("mask is empty")]
    Empty,
    #[error("mask contains {0:?}; use letters, spaces and '_' only")]
    InvalidCharacter(char),
}

/// Per-position view of a secret word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mask {
    cells: Vec<Cell>,
}

impl Mask {
    /// Text symbol for a hidden position
    pub const PLACEHOLDER: char = '_';

    /// Fully hidden mask for a secret, with its spaces shown
    #[must_use]
    pub fn hidden_for(secret: &Word) -> Self {
        let cells = secret
            .text()
            .chars()
            .map(|c| if c == ' ' { Cell::Space } else { Cell::Hidden })
            .collect();
        Self { cells }
    }

    /// Build a mask from cells
    #[must_use]
    pub const fn from_cells(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Parse a mask from text
    ///
    /// # Errors
    /// Returns `MaskError` if the text is empty or contains anything other
    /// than letters, spaces and `_`.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{Cell, Mask};
    ///
    /// let mask = Mask::parse("_A_").unwrap();
    /// assert_eq!(mask.len(), 3);
    /// assert_eq!(mask.cell(1), Cell::Revealed('a'));
    /// assert_eq!(mask.to_string(), "_a_");
    /// ```
    pub fn parse(text: &str) -> Result<Self, MaskError> {
        if text.is_empty() {
            return Err(MaskError::Empty);
        }

        let cells = text
            .chars()
            .map(|c| match c {
                Self::PLACEHOLDER => Ok(Cell::Hidden),
                ' ' => Ok(Cell::Space),
                c if c.is_ascii_alphabetic() => Ok(Cell::Revealed(c.to_ascii_lowercase())),
                other => Err(MaskError::InvalidCharacter(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { cells })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn cell(&self, position: usize) -> Cell {
        self.cells[position]
    }

    /// Number of hidden positions
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Hidden).count()
    }

    /// True once no position is hidden
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.cells.contains(&Cell::Hidden)
    }

    /// Letters currently visible
    #[must_use]
    pub fn revealed_letters(&self) -> LetterSet {
        self.cells
            .iter()
            .filter_map(|cell| match cell {
                Cell::Revealed(letter) => Some(*letter),
                _ => None,
            })
            .collect()
    }

    /// Reveal every hidden position where `secret` has `letter`
    ///
    /// Returns the number of positions newly revealed. Already revealed
    /// positions are never touched.
    pub fn reveal(&mut self, secret: &Word, letter: char) -> usize {
        debug_assert_eq!(secret.len(), self.len());

        let mut revealed = 0;
        for position in secret.positions_of(letter) {
            match self.cells.get_mut(position) {
                Some(cell) if *cell == Cell::Hidden => {
                    *cell = Cell::Revealed(letter);
                    revealed += 1;
                }
                _ => {}
            }
        }
        revealed
    }

    /// Copy out a sub-range of positions
    ///
    /// # Panics
    /// Panics if the range is out of bounds
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> Self {
        Self {
            cells: self.cells[range].to_vec(),
        }
    }
}

impl FromStr for Mask {
    type Err = MaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            let symbol = match cell {
                Cell::Revealed(letter) => *letter,
                Cell::Space => ' ',
                Cell::Hidden => Self::PLACEHOLDER,
            };
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
