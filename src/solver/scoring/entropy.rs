//! Shannon entropy of feedback distributions
//!
//! Given a guess and a set of candidates, estimates the expected information
//! gain of playing the guess.

use crate::core::{FeedbackRow, Word, evaluate};
use rustc_hash::FxHashMap;

/// Metrics for judging a single guess against the full candidate pool
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Largest feedback bucket (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Entropy score of `guess` over at most `sample_cap` candidates
///
/// Only the first `sample_cap` candidates (pool order) are simulated, which
/// bounds the cost on large pools. Bucket probabilities are taken over the
/// sample. A pool of one or zero candidates carries no information and
/// scores 0.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the share of the sample producing feedback x.
///
/// # Examples
/// ```
/// use wordly_solver::core::Word;
/// use wordly_solver::solver::scoring::entropy_score;
///
/// let guess = Word::new("slate").unwrap();
/// let candidates = vec![Word::new("slate").unwrap(), Word::new("jumpy").unwrap()];
/// let refs: Vec<&Word> = candidates.iter().collect();
///
/// // Two equally likely feedback rows = 1 bit
/// assert!((entropy_score(&guess, &refs, 200) - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn entropy_score(guess: &Word, candidates: &[&Word], sample_cap: usize) -> f64 {
    if candidates.len() <= 1 {
        return 0.0;
    }

    let sample = &candidates[..candidates.len().min(sample_cap)];
    shannon_entropy(&pattern_distribution(guess, sample))
}

/// Group candidates by the feedback `guess` would earn against each
#[must_use]
pub fn pattern_distribution(guess: &Word, candidates: &[&Word]) -> FxHashMap<FeedbackRow, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        *counts.entry(evaluate(candidate, guess)).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from a feedback distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one row with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n rows
#[must_use]
pub fn shannon_entropy<S>(counts: &std::collections::HashMap<FeedbackRow, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate full metrics for a guess over every candidate (no sampling)
///
/// Used for reporting, not for selection.
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[&Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let buckets = pattern_distribution(guess, candidates);
    let total = candidates.len() as f64;

    let expected_remaining: f64 = buckets
        .values()
        .map(|&size| {
            let p = size as f64 / total;
            p * size as f64
        })
        .sum();

    GuessMetrics {
        entropy: shannon_entropy(&buckets),
        expected_remaining,
        max_partition: buckets.values().copied().max().unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn row(n: usize) -> FeedbackRow {
        // Distinct rows for building distributions by hand
        let mut states = [LetterState::Absent; 5];
        for (i, slot) in states.iter_mut().enumerate() {
            if n & (1 << i) != 0 {
                *slot = LetterState::Present;
            }
        }
        FeedbackRow::new(states)
    }

    #[test]
    fn shannon_entropy_uniform_distribution() {
        let mut counts = FxHashMap::default();
        for n in 0..4 {
            counts.insert(row(n), 1);
        }
        assert!((shannon_entropy(&counts) - 2.0).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        let mut counts = FxHashMap::default();
        counts.insert(row(0), 10);
        assert!(shannon_entropy(&counts).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_skewed_below_uniform() {
        let mut uniform = FxHashMap::default();
        let mut skewed = FxHashMap::default();
        for n in 0..4 {
            uniform.insert(row(n), 25);
            skewed.insert(row(n), if n == 0 { 97 } else { 1 });
        }
        assert!(shannon_entropy(&uniform) > shannon_entropy(&skewed));
    }

    #[test]
    fn shannon_entropy_empty() {
        let counts: FxHashMap<FeedbackRow, usize> = FxHashMap::default();
        assert!(shannon_entropy(&counts).abs() < f64::EPSILON);
    }

    #[test]
    fn entropy_score_real_words() {
        let guess = Word::new("crane").unwrap();
        let pool = words(&["slate", "irate", "trace", "raise"]);
        let refs: Vec<&Word> = pool.iter().collect();

        let entropy = entropy_score(&guess, &refs, 200);
        assert!(entropy > 1.0 && entropy <= 2.0);
    }

    #[test]
    fn entropy_score_single_candidate_is_zero() {
        let pool = words(&["slate"]);
        let refs: Vec<&Word> = pool.iter().collect();
        assert!(entropy_score(&Word::new("crane").unwrap(), &refs, 200).abs() < f64::EPSILON);
        assert!(entropy_score(&Word::new("crane").unwrap(), &[], 200).abs() < f64::EPSILON);
    }

    #[test]
    fn entropy_score_all_same_pattern() {
        let pool = words(&["aaaaa", "bbbbb", "ccccc"]);
        let refs: Vec<&Word> = pool.iter().collect();
        assert!(entropy_score(&Word::new("zzzzz").unwrap(), &refs, 200).abs() < 0.001);
    }

    #[test]
    fn entropy_score_only_reads_the_sample() {
        // Two distinct rows in the first two candidates, a third row beyond the cap
        let pool = words(&["slate", "jumpy", "slant"]);
        let refs: Vec<&Word> = pool.iter().collect();
        let guess = Word::new("slate").unwrap();

        assert!((entropy_score(&guess, &refs, 2) - 1.0).abs() < 1e-9);
        assert!(entropy_score(&guess, &refs, 3) > 1.5);
    }

    #[test]
    fn metrics_partition_sizes() {
        let pool = words(&["slate", "slate", "jumpy"]);
        let refs: Vec<&Word> = pool.iter().collect();
        let metrics = calculate_metrics(&Word::new("slate").unwrap(), &refs);

        assert_eq!(metrics.max_partition, 2);
        // (2/3)·2 + (1/3)·1
        assert!((metrics.expected_remaining - 5.0 / 3.0).abs() < 1e-9);
    }
}
