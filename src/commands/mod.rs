//! Command implementations

pub mod benchmark;
pub mod play;
pub mod solve;
pub mod suggest;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use play::{PlaySummary, run_play};
pub use solve::{SolveConfig, SolveResult, SolveStep, solve_word};
pub use suggest::{Suggestion, suggest_letter};
