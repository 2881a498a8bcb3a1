//! Word analysis command
//!
//! Scores a word against the candidates that remain for a history.

use crate::core::{GuessRecord, Word};
use crate::solver::filter_candidates;
use crate::solver::scoring::{GuessMetrics, calculate_metrics, entropy_score, frequency_score};
use crate::solver::search::DEFAULT_ENTROPY_SAMPLE;
use anyhow::{Context, Result};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: Word,
    pub in_pool: bool,
    pub total_candidates: usize,
    /// Frequency score over every candidate
    pub frequency: usize,
    /// Entropy over the selector's sample of candidates
    pub sampled_entropy: f64,
    /// Exact metrics over every candidate
    pub metrics: GuessMetrics,
}

impl AnalysisResult {
    /// Expected reduction factor implied by the full entropy
    #[must_use]
    pub fn expected_reduction(&self) -> f64 {
        self.metrics.entropy.exp2()
    }
}

/// Analyze a word against the candidates left by `history`
///
/// # Errors
///
/// Returns an error if the word is not five ASCII letters.
pub fn analyze_word(word: &str, pool: &[Word], history: &[GuessRecord]) -> Result<AnalysisResult> {
    let word = Word::new(word).context("invalid word")?;
    let candidates = filter_candidates(pool, history);

    Ok(AnalysisResult {
        in_pool: pool.contains(&word),
        total_candidates: candidates.len(),
        frequency: frequency_score(&word, &candidates),
        sampled_entropy: entropy_score(&word, &candidates, DEFAULT_ENTROPY_SAMPLE),
        metrics: calculate_metrics(&word, &candidates),
        word,
    })
}
