//! Word solving command
//!
//! Lets the automated player guess a given secret and returns every step.

use crate::core::{Mask, Word, WordError};
use crate::game::{AiPlayer, AiTurn, Game, GameConfig, PlayOutcome};
use crate::lexicon::Lexicon;
use crate::solver::Strategy;
use rand::RngCore;

/// Configuration for solving a word
pub struct SolveConfig {
    pub secret: String,
    pub game: GameConfig,
}

impl SolveConfig {
    #[must_use]
    pub fn new(secret: String) -> Self {
        Self {
            secret,
            game: GameConfig::default(),
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub secret: String,
    pub outcome: PlayOutcome,
    pub turns: Vec<SolveStep>,
    pub incorrect: usize,
    pub max_incorrect: usize,
    pub final_mask: Mask,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.outcome == PlayOutcome::Won
    }
}

/// A single guess in the solution, with the mask it produced
pub struct SolveStep {
    pub turn: AiTurn,
    pub mask_after: Mask,
}

/// Solve a specific secret with the given strategy
///
/// # Errors
///
/// Returns an error if the secret is not made of letters and spaces.
pub fn solve_word<S: Strategy>(
    config: SolveConfig,
    lexicon: &Lexicon,
    strategy: S,
    rng: &mut dyn RngCore,
) -> Result<SolveResult, WordError> {
    let secret = Word::new(&config.secret)?;
    let mut game = Game::new(secret.clone(), &config.game);

    let report = AiPlayer::new(lexicon, strategy).play(&mut game, rng);

    // Replay the guesses to recover the mask after each turn
    let mut replay = Game::new(secret, &config.game);
    let turns = report
        .turns
        .iter()
        .map(|&turn| {
            let _ = replay.guess(turn.letter);
            SolveStep {
                turn,
                mask_after: replay.mask().clone(),
            }
        })
        .collect();

    Ok(SolveResult {
        secret: game.secret().text().to_string(),
        outcome: report.outcome,
        turns,
        incorrect: report.incorrect,
        max_incorrect: game.max_incorrect(),
        final_mask: game.mask().clone(),
    })
}
