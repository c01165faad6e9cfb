//! Benchmark command
//!
//! Plays full games against a sample of answers and collects guess statistics.

use crate::core::Word;
use crate::solver::{SessionState, SolverSession};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    /// Guesses summed over solved games
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count → number of games solved in that many guesses
    pub distribution: BTreeMap<usize, usize>,
    pub failures: Vec<Word>,
    pub duration: Duration,
    pub words_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.solved as f64 / self.total_words as f64
        }
    }
}

/// Pick up to `count` distinct answers at random
///
/// The same `seed` always yields the same sample; without one the sample is
/// drawn from OS entropy.
#[must_use]
pub fn sample_answers(answers: &[Word], count: usize, seed: Option<u64>) -> Vec<Word> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    answers.choose_multiple(&mut rng, count).copied().collect()
}

/// Solve every target and collect statistics
///
/// # Errors
///
/// Returns an error if the progress bar template is invalid or a session
/// operation fails.
pub fn run_benchmark(
    session: &mut SolverSession,
    targets: &[Word],
    max_guesses: usize,
    show_progress: bool,
) -> Result<BenchmarkResult> {
    let pb = if show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut total_guesses = 0;
    let mut solved = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses_seen = 0;
    let mut distribution = BTreeMap::new();
    let mut failures = Vec::new();

    for (idx, target) in targets.iter().enumerate() {
        let history = session.solve(target, max_guesses)?;
        let guesses = history.len();

        if session.state() == SessionState::Solved {
            solved += 1;
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_guesses_seen = max_guesses_seen.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            failures.push(*target);
        }

        if idx % 10 == 0 && solved > 0 {
            pb.set_message(format!("Avg: {:.2}", total_guesses as f64 / solved as f64));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();
    let total_words = targets.len();

    Ok(BenchmarkResult {
        total_words,
        solved,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses: max_guesses_seen,
        distribution,
        failures,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: [&str; 10] = [
        "crane", "slate", "irate", "crate", "grate", "trace", "abide", "abode", "abuse", "audio",
    ];

    fn session() -> SolverSession {
        SolverSession::new(&WORDS, None)
    }

    #[test]
    fn benchmark_runs() {
        let mut session = session();
        let targets = session.answers().to_vec();
        let result = run_benchmark(&mut session, &targets, 6, false).unwrap();

        assert_eq!(result.total_words, 10);
        assert_eq!(result.solved, 10);
        assert!(result.failures.is_empty());
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= 6);
        assert!((result.success_rate() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let mut session = session();
        let targets = session.answers().to_vec();
        let result = run_benchmark(&mut session, &targets, 6, false).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
    }

    #[test]
    fn benchmark_records_failures() {
        let mut session = session();
        let targets = session.answers().to_vec();
        let result = run_benchmark(&mut session, &targets, 1, false).unwrap();

        // One guess can only ever solve the opening word
        assert!(result.solved <= 1);
        assert_eq!(result.solved + result.failures.len(), result.total_words);
    }

    #[test]
    fn benchmark_empty_word_list() {
        let mut session = session();
        let result = run_benchmark(&mut session, &[], 6, false).unwrap();

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
        assert!(result.success_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn seeded_sample_is_reproducible() {
        let answers = session().answers().to_vec();

        let a = sample_answers(&answers, 4, Some(7));
        let b = sample_answers(&answers, 4, Some(7));
        assert_eq!(a, b);
        assert_eq!(a.len(), 4);
        assert!(a.iter().all(|w| answers.contains(w)));
    }

    #[test]
    fn sample_is_capped_at_list_size() {
        let answers = session().answers().to_vec();
        let sample = sample_answers(&answers, 50, Some(1));

        assert_eq!(sample.len(), answers.len());
        let mut unique = sample.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), sample.len());
    }
}
