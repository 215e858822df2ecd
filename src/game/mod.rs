//! Hangman games
//!
//! Game state, multi-word segments, and the automated player that drives
//! the guess engine through a game.

mod player;
mod segment;
mod state;

pub use player::{AiPlayer, AiReport, AiTurn, LetterSource, PlayOutcome};
pub use segment::{Segment, segments_of};
pub use state::{Game, GameConfig, GameError, GameStatus, GuessOutcome};
