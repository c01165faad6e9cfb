//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod solve;
pub mod suggest;

pub use analyze::{AnalysisResult, GameAnalysis, TurnAnalysis, analyze_game, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark, sample_answers};
pub use solve::{GuessStep, SolveResult, solve_word};
pub use suggest::{Feedback, FeedbackError, SuggestResult, suggest_next};
