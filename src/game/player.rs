//! Automated player
//!
//! Plays a game one segment at a time. Each segment keeps its own set of
//! excluded letters, so letters ruled out while solving one word of a
//! phrase never constrain the candidates for another.

use super::state::{Game, GameStatus, GuessOutcome};
use crate::core::LetterSet;
use crate::lexicon::Lexicon;
use crate::solver::{GuessEngine, Strategy, random_letter};
use rand::RngCore;

/// Where a guessed letter came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterSource {
    /// The strategy named it
    Strategy,
    /// The strategy had no answer; a random unguessed letter was used
    Fallback,
}

/// One guess made by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiTurn {
    /// Index into the game's segments
    pub segment: usize,
    pub letter: char,
    pub source: LetterSource,
    /// Candidates for the segment just before this guess
    pub candidates: usize,
    pub outcome: GuessOutcome,
}

/// How an automated game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Won,
    Lost,
    /// Every letter was tried without finishing the game
    Stuck,
}

/// Summary of an automated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiReport {
    pub outcome: PlayOutcome,
    pub turns: Vec<AiTurn>,
    pub incorrect: usize,
}

impl AiReport {
    /// Number of guesses that came from the fallback
    #[must_use]
    pub fn fallback_count(&self) -> usize {
        self.turns
            .iter()
            .filter(|turn| turn.source == LetterSource::Fallback)
            .count()
    }
}

/// Automated Hangman player
pub struct AiPlayer<'a, S: Strategy> {
    lexicon: &'a Lexicon,
    strategy: S,
}

impl<'a, S: Strategy> AiPlayer<'a, S> {
    #[must_use]
    pub const fn new(lexicon: &'a Lexicon, strategy: S) -> Self {
        Self { lexicon, strategy }
    }

    /// Play `game` to the end
    ///
    /// When the strategy cannot name a letter, a uniformly random letter
    /// that has not been guessed in this game is used instead. The turn is
    /// marked [`LetterSource::Fallback`].
    pub fn play(&self, game: &mut Game, rng: &mut dyn RngCore) -> AiReport {
        let engine = GuessEngine::new(self.lexicon);
        let segments = game.segments().to_vec();
        let mut turns = Vec::new();

        'segments: for (index, &segment) in segments.iter().enumerate() {
            let mut excluded = LetterSet::new();

            loop {
                if game.status() != GameStatus::InProgress {
                    break 'segments;
                }
                let mask = game.segment_mask(segment);
                if mask.is_solved() {
                    break;
                }

                let suggested = self
                    .strategy
                    .select_letter(self.lexicon, &mask, excluded, rng)
                    .filter(|&letter| !excluded.contains(letter));

                let (letter, source) = match suggested {
                    Some(letter) => (letter, LetterSource::Strategy),
                    None => match random_letter(game.guessed(), rng) {
                        Some(letter) => (letter, LetterSource::Fallback),
                        None => break 'segments,
                    },
                };

                let candidates = engine.count_candidates(&mask, excluded);
                excluded.insert(letter);

                // Already answered while working on another segment
                if game.guessed().contains(letter) {
                    continue;
                }

                let Ok(outcome) = game.guess(letter) else {
                    break 'segments;
                };

                turns.push(AiTurn {
                    segment: index,
                    letter,
                    source,
                    candidates,
                    outcome,
                });
            }
        }

        let outcome = match game.status() {
            GameStatus::Won => PlayOutcome::Won,
            GameStatus::Lost => PlayOutcome::Lost,
            GameStatus::InProgress => PlayOutcome::Stuck,
        };

        AiReport {
            outcome,
            turns,
            incorrect: game.incorrect(),
        }
    }
}
