//! Hangman Solver
//!
//! A Hangman game with a letter guessing engine that combines global letter
//! frequencies with pattern-constrained candidate filtering.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_solver::core::{LetterSet, Mask};
//! use hangman_solver::lexicon::Lexicon;
//! use hangman_solver::solver::GuessEngine;
//!
//! let lexicon = Lexicon::from_lines(&["cat", "car", "can", "bat"]).unwrap();
//! let engine = GuessEngine::new(&lexicon);
//!
//! let mask = Mask::parse("_a_").unwrap();
//! let tried: LetterSet = "at".chars().collect();
//! assert_eq!(engine.best_guess(&mask, tried), Some('c'));
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod lexicon;

// Letter guessing
pub mod solver;

// Game state and automated play
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
