//! Entropy-based word selection
//!
//! Scores every word in a guess pool in parallel and keeps the best. A guess that
//! could itself be the answer gets a small bonus over an equally informative
//! non-candidate.

use super::calculator::expected_information;
use crate::core::Word;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

/// A scored guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suggestion {
    pub word: Word,
    /// Expected information in bits
    pub entropy: f64,
    /// Entropy plus the candidate bonus, if it applied
    pub score: f64,
}

/// Pool position travels with the suggestion so ties resolve to the earliest word
type Ranked = (usize, Suggestion);

/// Higher score first, then earlier pool position
fn rank_order(a: &Ranked, b: &Ranked) -> Ordering {
    b.1.score.total_cmp(&a.1.score).then(a.0.cmp(&b.0))
}

fn score_pool(guess_pool: &[Word], candidates: &[Word], candidate_bonus: f64) -> Vec<Ranked> {
    let candidate_set: FxHashSet<Word> = candidates.iter().copied().collect();

    guess_pool
        .par_iter()
        .enumerate()
        .map(|(idx, &word)| {
            let entropy = expected_information(&word, candidates);
            let bonus = if candidate_set.contains(&word) {
                candidate_bonus
            } else {
                0.0
            };
            (
                idx,
                Suggestion {
                    word,
                    entropy,
                    score: entropy + bonus,
                },
            )
        })
        .collect()
}

/// Select best guess by maximizing entropy
///
/// Returns the highest-scoring guess, or `None` if the guess pool is empty.
/// Among equal scores the word appearing first in `guess_pool` wins, whatever
/// order the worker threads finish in.
///
/// # Examples
/// ```
/// use wordle_sage::core::Word;
/// use wordle_sage::solver::entropy::select_best_guess;
///
/// let guesses = vec![
///     Word::new("aaaaa").unwrap(),
///     Word::new("aeros").unwrap(),
/// ];
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
///     Word::new("crate").unwrap(),
/// ];
///
/// let best = select_best_guess(&guesses, &candidates, 0.001).unwrap();
/// assert_eq!(best.word.text(), "aeros");
/// assert!(best.entropy > 0.0);
/// ```
#[must_use]
pub fn select_best_guess(
    guess_pool: &[Word],
    candidates: &[Word],
    candidate_bonus: f64,
) -> Option<Suggestion> {
    score_pool(guess_pool, candidates, candidate_bonus)
        .into_par_iter()
        .min_by(rank_order)
        .map(|(_, suggestion)| suggestion)
}

/// Rank the `top_n` best guesses, best first
///
/// Uses the same ordering as [`select_best_guess`], so the first entry is
/// always the guess that function would pick.
#[must_use]
pub fn rank_guesses(
    guess_pool: &[Word],
    candidates: &[Word],
    candidate_bonus: f64,
    top_n: usize,
) -> Vec<Suggestion> {
    let mut ranked = score_pool(guess_pool, candidates, candidate_bonus);
    ranked.par_sort_unstable_by(rank_order);
    ranked.truncate(top_n);
    ranked.into_iter().map(|(_, suggestion)| suggestion).collect()
}
