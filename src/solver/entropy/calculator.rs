//! Shannon entropy calculation for Wordle patterns
//!
//! Given a guess and set of candidates, computes the expected information gain.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Calculate the expected information of a guess against candidates
///
/// Returns the Shannon entropy, in bits, of the distribution of patterns the
/// guess produces across `candidates`. Zero for an empty candidate set.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the fraction of candidates producing pattern x.
///
/// # Examples
/// ```
/// use wordle_sage::core::Word;
/// use wordle_sage::solver::entropy::expected_information;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let entropy = expected_information(&guess, &candidates);
/// assert!(entropy > 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn expected_information(guess: &Word, candidates: &[Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let pattern_counts = group_by_pattern(guess, candidates);
    shannon_entropy(&pattern_counts)
}

/// Group candidates by the pattern they produce with the guess
fn group_by_pattern(guess: &Word, candidates: &[Word]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let pattern = Pattern::calculate(guess, candidate);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from pattern distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one pattern with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n patterns
#[must_use]
pub fn shannon_entropy<S>(pattern_counts: &std::collections::HashMap<Pattern, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = pattern_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    // Clamp away the -0.0 a single bucket produces
    pattern_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum::<f64>()
        .max(0.0)
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, and max partition size.
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let pattern_counts = group_by_pattern(guess, candidates);
    let total = candidates.len() as f64;

    let expected_remaining: f64 = pattern_counts
        .values()
        .map(|&count| {
            let count = count as f64;
            count * count / total
        })
        .sum();

    let max_partition = pattern_counts.values().max().copied().unwrap_or(0);

    GuessMetrics {
        entropy: shannon_entropy(&pattern_counts),
        expected_remaining,
        max_partition,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn shannon_entropy_uniform_distribution() {
        // 4 patterns, each appears once = log2(4) = 2 bits
        let mut counts = FxHashMap::default();
        counts.insert(Pattern::new(0), 1);
        counts.insert(Pattern::new(1), 1);
        counts.insert(Pattern::new(2), 1);
        counts.insert(Pattern::new(3), 1);

        let entropy = shannon_entropy(&counts);
        assert!((entropy - 2.0).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        let mut counts = FxHashMap::default();
        counts.insert(Pattern::new(0), 10);

        let entropy = shannon_entropy(&counts);
        assert!(entropy.abs() < f64::EPSILON);
        assert!(entropy.is_sign_positive());
    }

    #[test]
    fn shannon_entropy_skewed_distribution() {
        let mut uniform = FxHashMap::default();
        uniform.insert(Pattern::new(0), 25);
        uniform.insert(Pattern::new(1), 25);
        uniform.insert(Pattern::new(2), 25);
        uniform.insert(Pattern::new(3), 25);

        let mut skewed = FxHashMap::default();
        skewed.insert(Pattern::new(0), 97);
        skewed.insert(Pattern::new(1), 1);
        skewed.insert(Pattern::new(2), 1);
        skewed.insert(Pattern::new(3), 1);

        assert!(shannon_entropy(&uniform) > shannon_entropy(&skewed));
    }

    #[test]
    fn shannon_entropy_empty() {
        let counts: FxHashMap<Pattern, usize> = FxHashMap::default();
        assert!(shannon_entropy(&counts).abs() < f64::EPSILON);
    }

    #[test]
    fn expected_information_bounded_by_log_of_candidates() {
        let candidates = words(&["slate", "irate", "trace", "raise", "abide", "abode", "abuse"]);
        let max = (candidates.len() as f64).log2();

        for guess in words(&["crane", "zzzzz", "speed", "abode", "aeros"]) {
            let entropy = expected_information(&guess, &candidates);
            assert!(entropy >= 0.0);
            assert!(entropy <= max + 1e-9, "{guess} exceeded log2(|C|)");
        }
    }

    #[test]
    fn expected_information_all_same_pattern() {
        // If all candidates produce same pattern, entropy = 0
        let guess = Word::new("zzzzz").unwrap();
        let candidates = words(&["aaaaa", "bbbbb", "ccccc"]);

        assert!(expected_information(&guess, &candidates).abs() < f64::EPSILON);
    }

    #[test]
    fn expected_information_singletons_reach_maximum() {
        // SLATE splits these into three distinct patterns
        let guess = Word::new("slate").unwrap();
        let candidates = words(&["slate", "zzzzz", "sxxxx"]);

        let entropy = expected_information(&guess, &candidates);
        assert!((entropy - 3f64.log2()).abs() < 1e-9);
    }

    #[test]
    fn expected_information_is_deterministic() {
        let guess = Word::new("crane").unwrap();
        let candidates = words(&["slate", "irate", "trace", "raise", "abide"]);

        let first = expected_information(&guess, &candidates);
        for _ in 0..5 {
            assert_eq!(first.to_bits(), expected_information(&guess, &candidates).to_bits());
        }
    }

    #[test]
    fn expected_information_empty_candidates() {
        let guess = Word::new("crane").unwrap();
        assert!(expected_information(&guess, &[]).abs() < f64::EPSILON);
    }

    #[test]
    fn metrics_agree_with_entropy() {
        let guess = Word::new("slate").unwrap();
        let candidates = words(&["slate", "zzzzz", "yyyyy"]);

        let metrics = calculate_metrics(&guess, &candidates);
        // Buckets: {slate}, {zzzzz, yyyyy}
        assert_eq!(metrics.max_partition, 2);
        assert!((metrics.expected_remaining - 5.0 / 3.0).abs() < 1e-9);
        assert!((metrics.entropy - expected_information(&guess, &candidates)).abs() < 1e-12);
    }

    #[test]
    fn group_by_pattern_works() {
        let guess = Word::new("crane").unwrap();
        let candidates = words(&["slate", "crate"]);

        let groups = group_by_pattern(&guess, &candidates);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups.values().sum::<usize>(), 2);
    }
}
