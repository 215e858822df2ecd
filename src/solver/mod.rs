//! Hangman letter guessing
//!
//! The guess engine filters the lexicon against a mask and picks the next
//! letter; strategies wrap it for use by automated players.

mod engine;
pub mod strategy;
mod tally;

pub use engine::GuessEngine;
pub use strategy::{FrequencyStrategy, RandomStrategy, Strategy, StrategyType, random_letter};
pub use tally::tally_letters;
