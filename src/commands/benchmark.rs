//! Benchmark command
//!
//! Lets the automated player guess many random secrets and collects
//! statistics. Games run in parallel against one shared lexicon.

use crate::core::Word;
use crate::game::{AiPlayer, Game, GameConfig, PlayOutcome};
use crate::lexicon::Lexicon;
use crate::solver::Strategy;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub won: usize,
    pub lost: usize,
    pub stuck: usize,
    pub win_rate: f64,
    pub average_incorrect: f64,
    pub average_guesses: f64,
    pub fallback_guesses: usize,
    /// Games per number of wrong guesses
    pub distribution: FxHashMap<usize, usize>,
    pub max_incorrect: usize,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Settings for a benchmark run
pub struct BenchmarkConfig {
    pub games: usize,
    pub game: GameConfig,
    pub seed: u64,
    pub show_progress: bool,
}

/// Run `config.games` automated games on random secrets
///
/// Secrets are drawn from the lexicon within the configured length range.
/// Each game gets its own rng derived from the seed, so results do not
/// depend on thread scheduling.
///
/// # Errors
///
/// Returns an error if no word fits the configured length range or the
/// progress bar template is invalid.
pub fn run_benchmark<S: Strategy + Sync>(
    lexicon: &Lexicon,
    strategy: &S,
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult> {
    let mut picker = StdRng::seed_from_u64(config.seed);
    let secrets: Vec<(Word, u64)> = (0..config.games)
        .map(|_| {
            lexicon
                .select_random_word(config.game.min_length, config.game.max_length, &mut picker)
                .map(|word| (word.clone(), picker.random()))
        })
        .collect::<Result<_, _>>()?;

    let pb = if config.show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );
    pb.set_message("playing");

    let start = Instant::now();
    let player = AiPlayer::new(lexicon, strategy);

    let reports: Vec<_> = secrets
        .into_par_iter()
        .map(|(secret, seed)| {
            let mut game = Game::new(secret, &config.game);
            let mut rng = StdRng::seed_from_u64(seed);
            let report = player.play(&mut game, &mut rng);
            pb.inc(1);
            report
        })
        .collect();

    pb.finish_with_message("done");
    let duration = start.elapsed();

    let total_games = reports.len();
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let (mut won, mut lost, mut stuck) = (0, 0, 0);

    for report in &reports {
        match report.outcome {
            PlayOutcome::Won => won += 1,
            PlayOutcome::Lost => lost += 1,
            PlayOutcome::Stuck => stuck += 1,
        }
        *distribution.entry(report.incorrect).or_insert(0) += 1;
    }

    let total_incorrect: usize = reports.iter().map(|r| r.incorrect).sum();
    let total_guesses: usize = reports.iter().map(|r| r.turns.len()).sum();
    let per_game = |total: usize| {
        if total_games == 0 {
            0.0
        } else {
            total as f64 / total_games as f64
        }
    };

    Ok(BenchmarkResult {
        total_games,
        won,
        lost,
        stuck,
        win_rate: per_game(won),
        average_incorrect: per_game(total_incorrect),
        average_guesses: per_game(total_guesses),
        fallback_guesses: reports.iter().map(|r| r.fallback_count()).sum(),
        distribution,
        max_incorrect: config.game.max_incorrect,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
