//! Compact set of letters
//!
//! Excluded and guessed letters are tracked as a 26-bit set, one bit per
//! letter `a`..=`z`.

use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = 26;

/// A set of lowercase ASCII letters
///
/// Uppercase input is folded to lowercase; anything that is not an ASCII
/// letter is never a member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Every letter `a`..=`z`
    pub const ALL: Self = Self((1 << ALPHABET_LEN) - 1);

    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Index of a letter in the alphabet (0-25)
    #[inline]
    #[must_use]
    pub fn index_of(letter: char) -> Option<usize> {
        letter
            .is_ascii_alphabetic()
            .then(|| usize::from(letter.to_ascii_lowercase() as u8 - b'a'))
    }

    /// Letter for an alphabet index (0-25)
    #[inline]
    #[must_use]
    pub fn letter_at(index: usize) -> char {
        debug_assert!(index < ALPHABET_LEN);
        char::from(b'a' + index as u8)
    }

    /// Add a letter, returning true if it was not already present
    ///
    /// Non-letters are ignored and return false.
    pub fn insert(&mut self, letter: char) -> bool {
        let Some(index) = Self::index_of(letter) else {
            return false;
        };
        let bit = 1 << index;
        let added = self.0 & bit == 0;
        self.0 |= bit;
        added
    }

    #[inline]
    #[must_use]
    pub fn contains(self, letter: char) -> bool {
        Self::index_of(letter).is_some_and(|index| self.0 & (1 << index) != 0)
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Letters not in this set
    #[inline]
    #[must_use]
    pub const fn complement(self) -> Self {
        Self(!self.0 & Self::ALL.0)
    }

    /// Iterate over members in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = char> {
        (0..ALPHABET_LEN)
            .filter(move |&index| self.0 & (1 << index) != 0)
            .map(Self::letter_at)
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<char> for LetterSet {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for letter in iter {
            self.insert(letter);
        }
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: Vec<String> = self.iter().map(String::from).collect();
        write!(f, "{}", letters.join(", "))
    }
}
