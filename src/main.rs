//! Hangman Solver - CLI
//!
//! Play Hangman, watch the guess engine solve a word, or ask it for the next letter.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use hangman_solver::{
    commands::{
        BenchmarkConfig, SolveConfig, run_benchmark, run_play, solve_word, suggest_letter,
    },
    game::GameConfig,
    lexicon::Lexicon,
    output::{print_benchmark_result, print_solve_result, print_suggestion},
    solver::StrategyType,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io;

#[derive(Parser)]
#[command(
    name = "hangman_solver",
    about = "Hangman with a frequency-driven letter guessing engine",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy for automated play: frequency (default) or random
    #[arg(short, long, global = true, default_value = "frequency")]
    strategy: String,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Wrong guesses allowed per game
    #[arg(short, long, global = true, default_value_t = 6)]
    lives: usize,

    /// Shortest random secret, spaces included
    #[arg(long, global = true, default_value_t = 4)]
    min_length: usize,

    /// Longest random secret, spaces included
    #[arg(long, global = true, default_value_t = 8)]
    max_length: usize,

    /// Seed for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Show diagnostics: load stats and seed on stderr, per-turn details in solve output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Guess a random word yourself (default)
    Play,

    /// Watch the engine guess a given secret
    Solve {
        /// The secret word or phrase (letters and spaces)
        secret: String,
    },

    /// Ask the engine for the next letter
    Suggest {
        /// Masked word, '_' for unknown letters (e.g. "_a_")
        mask: String,

        /// Letters already tried (e.g. "eat")
        #[arg(short, long, default_value = "")]
        tried: String,
    },

    /// Let the engine play many random words
    Benchmark {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

/// Load the lexicon based on the -w flag
fn load_lexicon(wordlist: &str) -> Result<Lexicon> {
    match wordlist {
        "embedded" => Lexicon::embedded().context("embedded word list is unusable"),
        path => Lexicon::from_file(path)
            .with_context(|| format!("failed to load word list from {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let lexicon = load_lexicon(&cli.wordlist)?;
    if cli.verbose {
        let lengths = lexicon.lengths();
        eprintln!(
            "{}",
            format!(
                "Loaded {} words, lengths {}..={}",
                lexicon.len(),
                lengths.first().copied().unwrap_or(0),
                lengths.last().copied().unwrap_or(0)
            )
            .dimmed()
        );
    }

    let config =
        GameConfig::new(cli.lives).with_lengths(cli.min_length, cli.max_length);
    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    if cli.verbose {
        eprintln!("{}", format!("Seed: {seed}").dimmed());
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let strategy = StrategyType::from_name(&cli.strategy);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let summary = run_play(
                &lexicon,
                &config,
                &mut rng,
                &mut io::stdin().lock(),
                &mut io::stdout().lock(),
            )?;
            if cli.verbose {
                eprintln!(
                    "{}",
                    format!("Won {} of {} games", summary.games_won, summary.games_played)
                        .dimmed()
                );
            }
        }
        Commands::Solve { secret } => {
            let solve_config = SolveConfig {
                secret,
                game: config,
            };
            let result = solve_word(solve_config, &lexicon, strategy, &mut rng)
                .context("invalid secret")?;
            print_solve_result(&result, cli.verbose);
        }
        Commands::Suggest { mask, tried } => {
            let suggestion = suggest_letter(&mask, &tried, &lexicon)?;
            print_suggestion(&suggestion);
        }
        Commands::Benchmark { count } => {
            println!(
                "Running benchmark on {count} random words with the {} strategy...",
                strategy.name()
            );
            let benchmark_config = BenchmarkConfig {
                games: count,
                game: config,
                seed,
                show_progress: true,
            };
            let result = run_benchmark(&lexicon, &strategy, &benchmark_config)?;
            print_benchmark_result(&result);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn verbose_help_names_both_outputs() {
        let command = Cli::command();
        let verbose = command
            .get_arguments()
            .find(|arg| arg.get_id() == "verbose")
            .unwrap();
        let help = verbose.get_help().unwrap().to_string();
        assert!(help.contains("stderr"));
        assert!(help.contains("solve output"));
    }

    #[test]
    fn solve_parses_with_global_flags() {
        let args = ["hangman_solver", "solve", "hot dog", "--verbose", "--seed", "7"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.seed, Some(7));
        assert!(matches!(cli.command, Some(Commands::Solve { secret }) if secret == "hot dog"));
    }
}
