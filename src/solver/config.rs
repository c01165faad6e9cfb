//! Solver configuration
//!
//! Everything tunable is carried by value into the components that need it;
//! nothing is read from module-level state.

use crate::core::Word;

/// Opening words with high letter diversity, always offered to the sampler
pub const DEFAULT_OPENERS: [&str; 8] = [
    "soare", "slate", "crane", "slant", "trace", "crate", "arise", "stare",
];

/// Default bound on heuristic-ranked words pulled into the scored pool
pub const DEFAULT_POOL_CAP: usize = 500;

/// Default bonus for guesses that could themselves be the answer
pub const DEFAULT_CANDIDATE_BONUS: f64 = 0.001;

/// Configuration for the guess pool sampler
#[derive(Debug, Clone, PartialEq)]
pub struct SamplerConfig {
    /// Guess spaces larger than this are sampled; also the number of
    /// heuristic-ranked words taken (default: 500)
    pub cap: usize,

    /// Strong openers added to every sampled pool when present in the guess space
    pub openers: Vec<Word>,
}

impl SamplerConfig {
    #[must_use]
    pub const fn new(cap: usize, openers: Vec<Word>) -> Self {
        Self { cap, openers }
    }

    #[must_use]
    pub const fn with_cap(mut self, cap: usize) -> Self {
        self.cap = cap;
        self
    }

    #[must_use]
    pub fn with_openers(mut self, openers: Vec<Word>) -> Self {
        self.openers = openers;
        self
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_POOL_CAP,
            DEFAULT_OPENERS
                .iter()
                .filter_map(|w| Word::new(w).ok())
                .collect(),
        )
    }
}

/// Configuration for a solver session
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Only surviving candidates may be guessed (default: false)
    pub hard_mode: bool,

    /// Score bonus for a guess that is itself a candidate (default: 0.001)
    pub candidate_bonus: f64,

    /// Mark the session exhausted after this many unsolved guesses (default: none)
    pub max_attempts: Option<usize>,

    /// Guess pool sampling
    pub sampler: SamplerConfig,
}

impl SolverConfig {
    #[must_use]
    pub const fn with_hard_mode(mut self, hard_mode: bool) -> Self {
        self.hard_mode = hard_mode;
        self
    }

    #[must_use]
    pub const fn with_candidate_bonus(mut self, bonus: f64) -> Self {
        self.candidate_bonus = bonus;
        self
    }

    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: Option<usize>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    #[must_use]
    pub fn with_sampler(mut self, sampler: SamplerConfig) -> Self {
        self.sampler = sampler;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            hard_mode: false,
            candidate_bonus: DEFAULT_CANDIDATE_BONUS,
            max_attempts: None,
            sampler: SamplerConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = SolverConfig::default();
        assert!(!config.hard_mode);
        assert!((config.candidate_bonus - 0.001).abs() < f64::EPSILON);
        assert_eq!(config.max_attempts, None);
        assert_eq!(config.sampler.cap, 500);
        assert_eq!(config.sampler.openers.len(), DEFAULT_OPENERS.len());
    }

    #[test]
    fn builders_override_fields() {
        let config = SolverConfig::default()
            .with_hard_mode(true)
            .with_candidate_bonus(0.0)
            .with_max_attempts(Some(6))
            .with_sampler(SamplerConfig::default().with_cap(50).with_openers(vec![]));

        assert!(config.hard_mode);
        assert!(config.candidate_bonus.abs() < f64::EPSILON);
        assert_eq!(config.max_attempts, Some(6));
        assert_eq!(config.sampler.cap, 50);
        assert!(config.sampler.openers.is_empty());
    }
}
