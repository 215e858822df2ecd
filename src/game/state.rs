//! Hangman game state
//!
//! Holds the secret, the mask shown to the guesser, the letters tried so far
//! and the mistakes budget.

use super::segment::{Segment, segments_of};
use crate::core::{LetterSet, Mask, Word};
use thiserror::Error;

/// Game settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Wrong guesses allowed before the game is lost
    pub max_incorrect: usize,
    /// Shortest random secret, spaces included
    pub min_length: usize,
    /// Longest random secret, spaces included
    pub max_length: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new(max_incorrect: usize) -> Self {
        Self {
            max_incorrect,
            min_length: 4,
            max_length: 8,
        }
    }

    #[must_use]
    pub const fn with_lengths(mut self, min_length: usize, max_length: usize) -> Self {
        self.min_length = min_length;
        self.max_length = max_length;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(6)
    }
}

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Result of one accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter is in the secret; `revealed` positions were uncovered
    Correct { revealed: usize },
    /// The letter is not in the secret; `remaining` wrong guesses are left
    Wrong { remaining: usize },
}

impl GuessOutcome {
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct { .. })
    }
}

/// Rejected guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("{0:?} is not a letter")]
    NotALetter(char),
    #[error("the letter {0:?} was already guessed")]
    AlreadyGuessed(char),
    #[error("the game is already over")]
    Finished,
}

/// A single game of Hangman
#[derive(Debug, Clone)]
pub struct Game {
    secret: Word,
    mask: Mask,
    segments: Vec<Segment>,
    guessed: LetterSet,
    incorrect: usize,
    max_incorrect: usize,
}

impl Game {
    /// Start a game for `secret`
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Word;
    /// use hangman_solver::game::{Game, GameConfig, GameStatus, GuessOutcome};
    ///
    /// let mut game = Game::new(Word::new("hot dog").unwrap(), &GameConfig::default());
    /// assert_eq!(game.mask().to_string(), "___ ___");
    ///
    /// assert_eq!(game.guess('o'), Ok(GuessOutcome::Correct { revealed: 2 }));
    /// assert_eq!(game.guess('z'), Ok(GuessOutcome::Wrong { remaining: 5 }));
    /// assert_eq!(game.mask().to_string(), "_o_ _o_");
    /// assert_eq!(game.status(), GameStatus::InProgress);
    /// ```
    #[must_use]
    pub fn new(secret: Word, config: &GameConfig) -> Self {
        let mask = Mask::hidden_for(&secret);
        let segments = segments_of(&secret);
        Self {
            secret,
            mask,
            segments,
            guessed: LetterSet::new(),
            incorrect: 0,
            max_incorrect: config.max_incorrect,
        }
    }

    /// Guess a letter
    ///
    /// # Errors
    ///
    /// Returns `GameError` if the game is over, the input is not a letter, or
    /// the letter was already guessed. Rejected guesses cost nothing.
    pub fn guess(&mut self, letter: char) -> Result<GuessOutcome, GameError> {
        if self.status() != GameStatus::InProgress {
            return Err(GameError::Finished);
        }
        if !letter.is_ascii_alphabetic() {
            return Err(GameError::NotALetter(letter));
        }

        let letter = letter.to_ascii_lowercase();
        if !self.guessed.insert(letter) {
            return Err(GameError::AlreadyGuessed(letter));
        }

        if self.secret.has_letter(letter) {
            let revealed = self.mask.reveal(&self.secret, letter);
            Ok(GuessOutcome::Correct { revealed })
        } else {
            self.incorrect += 1;
            Ok(GuessOutcome::Wrong {
                remaining: self.remaining(),
            })
        }
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.mask.is_solved() {
            GameStatus::Won
        } else if self.incorrect >= self.max_incorrect {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn mask(&self) -> &Mask {
        &self.mask
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The part of the mask covered by `segment`
    #[must_use]
    pub fn segment_mask(&self, segment: Segment) -> Mask {
        self.mask.slice(segment.range())
    }

    /// Every letter guessed so far, right or wrong
    #[must_use]
    pub const fn guessed(&self) -> LetterSet {
        self.guessed
    }

    #[must_use]
    pub const fn incorrect(&self) -> usize {
        self.incorrect
    }

    #[must_use]
    pub const fn max_incorrect(&self) -> usize {
        self.max_incorrect
    }

    /// Wrong guesses still allowed
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.max_incorrect.saturating_sub(self.incorrect)
    }
}
