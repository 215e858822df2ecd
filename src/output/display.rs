//! Display functions for command results

use super::formatters::{create_progress_bar, format_ranking, outcome_mark, source_label};
use crate::commands::play::spaced_mask;
use crate::commands::{BenchmarkResult, SolveResult, Suggestion};
use crate::game::PlayOutcome;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.turns.iter().enumerate() {
        let turn = &step.turn;
        let mark = outcome_mark(turn.outcome);
        let mark = if turn.outcome.is_correct() {
            mark.green()
        } else {
            mark.red()
        };

        println!(
            "\nTurn {}: {} {}  {}",
            i + 1,
            turn.letter.to_ascii_uppercase(),
            mark,
            spaced_mask(&step.mask_after)
        );

        if verbose {
            println!(
                "  Segment {} | {} candidates | {}",
                turn.segment + 1,
                turn.candidates,
                source_label(turn.source)
            );
        }
    }

    println!();
    println!(
        "Mistakes: {}/{}",
        result.incorrect, result.max_incorrect
    );
    match result.outcome {
        PlayOutcome::Won => println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.turns.len())
                .green()
                .bold()
        ),
        PlayOutcome::Lost => println!(
            "{}",
            format!("❌ Ran out of guesses at {}", result.final_mask)
                .red()
                .bold()
        ),
        PlayOutcome::Stuck => println!(
            "{}",
            format!("⚠ No letters left to try at {}", result.final_mask)
                .yellow()
                .bold()
        ),
    }
}

/// Print a letter suggestion
pub fn print_suggestion(suggestion: &Suggestion) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SUGGESTION FOR:".bright_cyan().bold(),
        suggestion.mask.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if !suggestion.tried.is_empty() {
        println!("\nTried letters: {}", suggestion.tried);
    }

    match suggestion.best_guess {
        Some(letter) => println!(
            "\n🔤 Best guess:   {}",
            letter.to_ascii_uppercase().to_string().bright_green().bold()
        ),
        None => println!("\n🔤 Best guess:   {}", "none".red()),
    }
    println!("   Candidates:   {}", suggestion.total_candidates);

    let label = if suggestion.uses_global_ranking {
        "Letter frequency"
    } else {
        "Candidate votes"
    };
    println!("   {label}: {}", format_ranking(&suggestion.ranking, 10));

    if !suggestion.sample.is_empty() {
        println!("\nSome candidates:");
        for word in &suggestion.sample {
            println!("  • {word}");
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate * 100.0)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Won / lost:       {} / {}",
        format!("{}", result.won).green(),
        format!("{}", result.lost).red()
    );
    if result.stuck > 0 {
        println!("   Stuck:            {}", result.stuck);
    }
    println!("   Average mistakes: {:.2}", result.average_incorrect);
    println!("   Average guesses:  {:.2}", result.average_guesses);
    println!("   Fallback guesses: {}", result.fallback_guesses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Mistakes per game:".bright_cyan().bold());
    for mistakes in 0..=result.max_incorrect {
        if let Some(&count) = result.distribution.get(&mistakes) {
            let pct = (count as f64 / result.total_games as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {mistakes}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
}
