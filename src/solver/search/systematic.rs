//! Deterministic frequency-based selection

use crate::core::Word;
use crate::solver::scoring::LetterFrequencies;
use crate::solver::strategy::Strategy;
use rand::Rng;

/// Scans the leading candidates and keeps the best frequency score
///
/// Ties go to the candidate seen first, so the result depends only on the
/// pool and its order.
#[derive(Debug, Clone, Copy)]
pub struct SystematicSearch {
    /// Only the first `scan_cap` candidates are scored
    pub scan_cap: usize,
}

impl SystematicSearch {
    #[must_use]
    pub const fn new(scan_cap: usize) -> Self {
        Self { scan_cap }
    }
}

impl Default for SystematicSearch {
    fn default() -> Self {
        Self::new(100)
    }
}

impl Strategy for SystematicSearch {
    fn search<'a, R: Rng + ?Sized>(&self, candidates: &[&'a Word], _rng: &mut R) -> &'a Word {
        let frequencies = LetterFrequencies::from_candidates(candidates);

        let mut best = candidates[0];
        let mut best_score = None;
        for &word in candidates.iter().take(self.scan_cap) {
            let score = frequencies.score(word);
            if best_score.is_none_or(|b| score > b) {
                best = word;
                best_score = Some(score);
            }
        }

        log::trace!(
            "systematic: {best} scored {} over {} candidates",
            best_score.unwrap_or(0),
            candidates.len()
        );
        best
    }

    fn scored<'a>(&self, candidates: &[&'a Word]) -> Vec<(&'a Word, f64)> {
        let frequencies = LetterFrequencies::from_candidates(candidates);
        candidates
            .iter()
            .take(self.scan_cap)
            .map(|&word| (word, frequencies.score(word) as f64))
            .collect()
    }
}
