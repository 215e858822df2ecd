//! Formatting utilities for terminal output

use crate::game::{GuessOutcome, LetterSource};

/// Short mark for a guess outcome
#[must_use]
pub const fn outcome_mark(outcome: GuessOutcome) -> &'static str {
    match outcome {
        GuessOutcome::Correct { .. } => "✓",
        GuessOutcome::Wrong { .. } => "✗",
    }
}

/// Label for where a letter came from
#[must_use]
pub const fn source_label(source: LetterSource) -> &'static str {
    match source {
        LetterSource::Strategy => "engine",
        LetterSource::Fallback => "fallback",
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format letter ranking entries as `a:12 e:9 ...`
#[must_use]
pub fn format_ranking(ranking: &[(char, usize)], limit: usize) -> String {
    ranking
        .iter()
        .take(limit)
        .map(|(letter, count)| format!("{letter}:{count}"))
        .collect::<Vec<_>>()
        .join(" ")
}
