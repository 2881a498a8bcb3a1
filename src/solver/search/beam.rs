//! Two-phase beam selection
//!
//! Phase one ranks every candidate by cheap letter coverage and keeps a
//! beam; phase two spends entropy scoring only on the beam.

use super::DEFAULT_ENTROPY_SAMPLE;
use crate::core::Word;
use crate::solver::scoring::{LetterFrequencies, entropy_score};
use crate::solver::strategy::Strategy;
use rand::Rng;
use std::cmp::Reverse;

/// Frequency beam re-ranked by entropy
#[derive(Debug, Clone, Copy)]
pub struct BeamSearch {
    pub beam_width: usize,
    pub entropy_sample: usize,
}

impl Default for BeamSearch {
    fn default() -> Self {
        Self {
            beam_width: 50,
            entropy_sample: DEFAULT_ENTROPY_SAMPLE,
        }
    }
}

impl BeamSearch {
    /// Candidates ranked by coverage, truncated to the beam width
    ///
    /// The sort is stable, so equal coverage keeps pool order.
    #[must_use]
    pub fn beam<'a>(&self, candidates: &[&'a Word]) -> Vec<&'a Word> {
        let frequencies = LetterFrequencies::from_candidates(candidates);
        let mut ranked = candidates.to_vec();
        ranked.sort_by_cached_key(|w| Reverse(frequencies.coverage(w)));
        ranked.truncate(self.beam_width.max(1));
        ranked
    }
}

impl Strategy for BeamSearch {
    fn search<'a, R: Rng + ?Sized>(&self, candidates: &[&'a Word], _rng: &mut R) -> &'a Word {
        let beam = self.beam(candidates);

        let mut best = beam[0];
        let mut best_score = f64::NEG_INFINITY;
        for &word in &beam {
            let score = entropy_score(word, candidates, self.entropy_sample);
            if score > best_score {
                best = word;
                best_score = score;
            }
        }

        log::trace!(
            "beam: {best} ({best_score:.3} bits) from a beam of {}",
            beam.len()
        );
        best
    }

    fn scored<'a>(&self, candidates: &[&'a Word]) -> Vec<(&'a Word, f64)> {
        self.beam(candidates)
            .into_iter()
            .map(|word| (word, entropy_score(word, candidates, self.entropy_sample)))
            .collect()
    }
}
