//! Best-guess selection
//!
//! Chooses the guess pool (candidates only in hard mode, otherwise the whole
//! guess space, sampled down when oversized) and runs the entropy scorer over it.

use super::config::SolverConfig;
use super::entropy::{self, Suggestion};
use super::sampler::CandidatePoolSampler;
use crate::core::Word;
use log::{debug, trace};

/// Drives entropy scoring over a bounded guess pool
#[derive(Debug, Clone)]
pub struct GuessSelector {
    sampler: CandidatePoolSampler,
    candidate_bonus: f64,
}

impl GuessSelector {
    #[must_use]
    pub const fn new(sampler: CandidatePoolSampler, candidate_bonus: f64) -> Self {
        Self {
            sampler,
            candidate_bonus,
        }
    }

    #[must_use]
    pub fn from_config(config: &SolverConfig) -> Self {
        Self::new(
            CandidatePoolSampler::new(config.sampler.clone()),
            config.candidate_bonus,
        )
    }

    /// Select the best next guess
    ///
    /// - No candidates: `None`.
    /// - One or two candidates: the first candidate with score 0, no search.
    /// - Otherwise the highest-scoring guess from the pool, ties going to the
    ///   earliest word in pool order.
    #[must_use]
    pub fn select_best(
        &self,
        candidates: &[Word],
        guess_space: &[Word],
        hard_mode: bool,
    ) -> Option<Suggestion> {
        if candidates.len() <= 2 {
            return candidates.first().map(|&word| Suggestion {
                word,
                entropy: 0.0,
                score: 0.0,
            });
        }

        let pool = self.guess_pool(candidates, guess_space, hard_mode);
        debug!(
            "scoring {} guesses against {} candidates (hard mode: {hard_mode})",
            pool.len(),
            candidates.len()
        );

        let best = entropy::select_best_guess(&pool, candidates, self.candidate_bonus);
        if let Some(best) = &best {
            trace!(
                "best guess {} with {:.4} bits (score {:.4})",
                best.word, best.entropy, best.score
            );
        }
        best
    }

    /// Rank the `top_n` best guesses from the same pool `select_best` would use
    #[must_use]
    pub fn top_guesses(
        &self,
        candidates: &[Word],
        guess_space: &[Word],
        hard_mode: bool,
        top_n: usize,
    ) -> Vec<Suggestion> {
        let pool = self.guess_pool(candidates, guess_space, hard_mode);
        entropy::rank_guesses(&pool, candidates, self.candidate_bonus, top_n)
    }

    fn guess_pool(&self, candidates: &[Word], guess_space: &[Word], hard_mode: bool) -> Vec<Word> {
        if hard_mode {
            candidates.to_vec()
        } else if self.sampler.should_sample(guess_space.len()) {
            self.sampler.build_pool(guess_space, candidates)
        } else {
            guess_space.to_vec()
        }
    }
}

impl Default for GuessSelector {
    fn default() -> Self {
        Self::from_config(&SolverConfig::default())
    }
}
