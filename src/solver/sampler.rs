//! Guess pool sampling
//!
//! Full entropy scoring costs O(|pool| × |candidates|) pattern computations. When
//! the guess space exceeds the configured cap, the pool is narrowed to:
//! 1. every current candidate,
//! 2. the configured openers that exist in the guess space,
//! 3. the `cap` words ranked highest by a letter-frequency heuristic.
//!
//! Steps 1 and 3 are separate functions so each can be checked on its own.

use super::config::SamplerConfig;
use crate::core::Word;
use log::debug;
use rustc_hash::FxHashSet;

/// Per-letter count of candidates containing that letter (a=0 … z=25)
pub type LetterFrequencies = [usize; 26];

/// Count, for each letter, how many candidates contain it at least once
#[must_use]
pub fn letter_frequencies(candidates: &[Word]) -> LetterFrequencies {
    let mut freq = [0usize; 26];
    for word in candidates {
        for letter in word.letters().iter() {
            freq[usize::from(letter - b'a')] += 1;
        }
    }
    freq
}

/// Cheap entropy proxy: summed frequency of the word's distinct letters
#[must_use]
pub fn heuristic_score(word: &Word, freq: &LetterFrequencies) -> usize {
    word.letters()
        .iter()
        .map(|letter| freq[usize::from(letter - b'a')])
        .sum()
}

/// Builds bounded guess pools from a large guess space
#[derive(Debug, Clone, Default)]
pub struct CandidatePoolSampler {
    config: SamplerConfig,
}

impl CandidatePoolSampler {
    #[must_use]
    pub const fn new(config: SamplerConfig) -> Self {
        Self { config }
    }

    /// True if a guess space of this size needs sampling
    #[must_use]
    pub const fn should_sample(&self, guess_space_len: usize) -> bool {
        guess_space_len > self.config.cap
    }

    /// Build the bounded pool
    ///
    /// Order is candidates, then openers, then heuristic picks, with duplicates
    /// dropped at their later occurrence. The result holds at most
    /// `cap + |candidates| + |openers|` words.
    #[must_use]
    pub fn build_pool(&self, guess_space: &[Word], candidates: &[Word]) -> Vec<Word> {
        let mut seen = FxHashSet::default();
        let mut pool = Vec::with_capacity(candidates.len() + self.config.cap);

        let mut push = |word: Word| {
            if seen.insert(word) {
                pool.push(word);
            }
        };

        for &word in candidates {
            push(word);
        }
        for word in self.openers_in(guess_space) {
            push(word);
        }
        for word in Self::top_by_letter_frequency(guess_space, candidates, self.config.cap) {
            push(word);
        }

        debug!(
            "sampled {} of {} guesses ({} candidates, cap {})",
            pool.len(),
            guess_space.len(),
            candidates.len(),
            self.config.cap
        );
        pool
    }

    /// Configured openers that are legal guesses in this guess space
    #[must_use]
    pub fn openers_in(&self, guess_space: &[Word]) -> Vec<Word> {
        let space: FxHashSet<&Word> = guess_space.iter().collect();
        self.config
            .openers
            .iter()
            .filter(|word| space.contains(word))
            .copied()
            .collect()
    }

    /// The `limit` guesses with the highest heuristic score against `candidates`
    ///
    /// Equal scores keep their guess-space order.
    #[must_use]
    pub fn top_by_letter_frequency(
        guess_space: &[Word],
        candidates: &[Word],
        limit: usize,
    ) -> Vec<Word> {
        let freq = letter_frequencies(candidates);

        let mut scored: Vec<(usize, Word)> = guess_space
            .iter()
            .map(|word| (heuristic_score(word, &freq), *word))
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.truncate(limit);

        scored.into_iter().map(|(_, word)| word).collect()
    }
}
