//! Interactive play mode
//!
//! A human guesses a random word from the lexicon, one letter per line.

use crate::core::{Cell, Mask};
use crate::game::{Game, GameConfig, GameStatus, GuessOutcome};
use crate::lexicon::Lexicon;
use crate::solver::GuessEngine;
use anyhow::Result;
use colored::Colorize;
use rand::RngCore;
use std::io::{BufRead, Write};

/// Totals for an interactive session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlaySummary {
    pub games_played: usize,
    pub games_won: usize,
}

/// Run the interactive game loop
///
/// Reads commands from `input` and writes everything to `output`, so the
/// loop can be driven by stdin/stdout or by a script. End of input quits.
///
/// # Errors
///
/// Returns an error if reading or writing fails, or if no word fits the
/// configured length range.
pub fn run_play<R: BufRead, W: Write>(
    lexicon: &Lexicon,
    config: &GameConfig,
    rng: &mut dyn RngCore,
    input: &mut R,
    output: &mut W,
) -> Result<PlaySummary> {
    let engine = GuessEngine::new(lexicon);
    let mut summary = PlaySummary::default();

    writeln!(output, "\n{}", "=== HANGMAN ===".bright_cyan().bold())?;
    writeln!(output, "Commands: '?' for a hint, 'quit' to exit\n")?;

    loop {
        let secret = lexicon
            .select_random_word(config.min_length, config.max_length, rng)?
            .clone();
        let mut game = Game::new(secret, config);
        summary.games_played += 1;

        writeln!(
            output,
            "{}",
            format!("Word has {} letters. Good luck!", game.secret().len()).yellow()
        )?;

        while game.status() == GameStatus::InProgress {
            print_state(output, &game)?;

            let Some(line) = prompt(input, output, "Guess a letter")? else {
                return Ok(summary);
            };

            match line.to_lowercase().as_str() {
                "quit" | "q" | "exit" => {
                    writeln!(output, "\nGoodbye!")?;
                    return Ok(summary);
                }
                "?" | "hint" => match hint(&engine, &game) {
                    Some((letter, candidates)) => writeln!(
                        output,
                        "{}",
                        format!("Hint: try '{letter}' ({candidates} words still fit)").magenta()
                    )?,
                    None => writeln!(output, "{}", "No hint available.".magenta())?,
                },
                text => {
                    let mut chars = text.chars();
                    let (Some(letter), None) = (chars.next(), chars.next()) else {
                        writeln!(output, "{}", "Please enter a single letter.".red())?;
                        continue;
                    };

                    match game.guess(letter) {
                        Ok(GuessOutcome::Correct { .. }) => {
                            writeln!(output, "{}", " -> Correct!".green())?;
                        }
                        Ok(GuessOutcome::Wrong { remaining }) => writeln!(
                            output,
                            "{}",
                            format!(" -> Wrong! {remaining} incorrect guesses left.").red()
                        )?,
                        Err(e) => writeln!(output, "{}", e.to_string().yellow())?,
                    }
                }
            }
        }

        if game.status() == GameStatus::Won {
            summary.games_won += 1;
            print_state(output, &game)?;
            writeln!(output, "\n{}", "Congratulations! You won!".green().bold())?;
        } else {
            writeln!(output, "\n{}", "Game Over! You lost.".red().bold())?;
        }
        writeln!(output, "The word was: {}", game.secret().text().bold())?;

        match prompt(input, output, "Play again? (yes/no)")? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {}
            _ => return Ok(summary),
        }
    }
}

/// Masked word with letters separated by spaces, e.g. `_ a _   _ o _`
#[must_use]
pub fn spaced_mask(mask: &Mask) -> String {
    mask.cells()
        .iter()
        .map(|cell| match cell {
            Cell::Revealed(letter) => letter.to_string(),
            Cell::Space => " ".to_string(),
            Cell::Hidden => Mask::PLACEHOLDER.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Best letter for the first unsolved segment, with its candidate count
///
/// Segments are matched against single words, the same way the automated
/// player works, so phrases missing from the word list still get hints.
fn hint(engine: &GuessEngine<'_>, game: &Game) -> Option<(char, usize)> {
    let mask = game
        .segments()
        .iter()
        .map(|&segment| game.segment_mask(segment))
        .find(|mask| !mask.is_solved())?;
    let letter = engine.best_guess(&mask, game.guessed())?;
    Some((letter, engine.count_candidates(&mask, game.guessed())))
}

fn print_state<W: Write>(output: &mut W, game: &Game) -> Result<()> {
    writeln!(output, "\n{}", spaced_mask(game.mask()).bold())?;
    writeln!(
        output,
        "{}",
        format!("Guesses left: {}", game.remaining()).red()
    )?;
    writeln!(
        output,
        "{}",
        format!("Guessed letters: {}", game.guessed()).blue()
    )?;
    Ok(())
}

/// Prompt and read one trimmed line, or `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> Result<Option<String>> {
    write!(output, "{text}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
