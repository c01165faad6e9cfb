//! Entropy-based guess scoring
//!
//! Implements Shannon entropy calculation for Wordle pattern distributions
//! and the parallel pool scorer built on it.

mod calculator;
mod selector;

pub use calculator::{GuessMetrics, calculate_metrics, expected_information, shannon_entropy};
pub use selector::{Suggestion, rank_guesses, select_best_guess};
