//! Word segments of a multi-word secret

use crate::core::Word;
use std::ops::Range;

/// A maximal run of non-space positions in a secret
///
/// "hot dog" has segments `(0, 3)` and `(4, 3)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub offset: usize,
    pub len: usize,
}

impl Segment {
    #[must_use]
    pub const fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Positions covered by this segment
    #[must_use]
    pub const fn range(self) -> Range<usize> {
        self.offset..self.offset + self.len
    }
}

/// Split a word into its segments, in order
///
/// Runs of several spaces separate segments like a single space does.
///
/// # Examples
/// ```
/// use hangman_solver::core::Word;
/// use hangman_solver::game::{Segment, segments_of};
///
/// let word = Word::new("ice  cream").unwrap();
/// assert_eq!(segments_of(&word), vec![Segment::new(0, 3), Segment::new(5, 5)]);
/// ```
#[must_use]
pub fn segments_of(word: &Word) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut start: Option<usize> = None;

    for (position, &byte) in word.as_bytes().iter().enumerate() {
        match (byte == b' ', start) {
            (false, None) => start = Some(position),
            (true, Some(offset)) => {
                segments.push(Segment::new(offset, position - offset));
                start = None;
            }
            _ => {}
        }
    }

    if let Some(offset) = start {
        segments.push(Segment::new(offset, word.len() - offset));
    }

    segments
}
