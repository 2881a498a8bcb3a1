//! Letter and positional frequency scoring
//!
//! Rewards guesses built from letters common in the remaining pool, with
//! extra weight for letters sitting where the pool usually has them.

use crate::core::{WORD_LENGTH, Word, letter_index};

/// Weight of a positional match relative to a plain containment match
const POSITION_WEIGHT: usize = 2;

/// Letter statistics over one candidate pool
///
/// Build once per pool and score many words against it.
#[derive(Debug, Clone)]
pub struct LetterFrequencies {
    /// Number of candidates containing each letter at least once
    containing: [usize; 26],
    /// Number of candidates with each letter at each position
    positional: [[usize; 26]; WORD_LENGTH],
}

impl LetterFrequencies {
    #[must_use]
    pub fn from_candidates(candidates: &[&Word]) -> Self {
        let mut containing = [0usize; 26];
        let mut positional = [[0usize; 26]; WORD_LENGTH];

        for candidate in candidates {
            let mut seen = [false; 26];
            for (i, &letter) in candidate.letters().iter().enumerate() {
                let idx = letter_index(letter);
                positional[i][idx] += 1;
                if !seen[idx] {
                    seen[idx] = true;
                    containing[idx] += 1;
                }
            }
        }

        Self {
            containing,
            positional,
        }
    }

    /// Frequency score of `word`
    ///
    /// Each distinct letter adds the number of candidates containing it;
    /// each position adds twice the number of candidates with the same
    /// letter at that position.
    #[must_use]
    pub fn score(&self, word: &Word) -> usize {
        let mut seen = [false; 26];
        let mut score = 0;

        for (i, &letter) in word.letters().iter().enumerate() {
            let idx = letter_index(letter);
            if !seen[idx] {
                seen[idx] = true;
                score += self.containing[idx];
            }
            score += POSITION_WEIGHT * self.positional[i][idx];
        }

        score
    }

    /// Containment-only score over distinct letters
    ///
    /// The coarse ranking used to pick a beam before entropy scoring.
    #[must_use]
    pub fn coverage(&self, word: &Word) -> usize {
        let mut seen = [false; 26];
        word.letters()
            .iter()
            .filter_map(|&letter| {
                let idx = letter_index(letter);
                (!std::mem::replace(&mut seen[idx], true)).then_some(self.containing[idx])
            })
            .sum()
    }
}

/// Frequency score of `word` against `candidates`
///
/// Convenience wrapper for one-off scoring; selectors that score many words
/// build a [`LetterFrequencies`] once instead.
#[must_use]
pub fn frequency_score(word: &Word, candidates: &[&Word]) -> usize {
    LetterFrequencies::from_candidates(candidates).score(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn score_counts_containment_and_positions() {
        let pool = words(&["crate", "trace"]);
        let refs: Vec<&Word> = pool.iter().collect();

        // C,R,A,T,E each contained by 2 candidates = 10
        // Positions for CRATE: C(1) R(2) A(2) T(1) E(2) = 8, doubled = 16
        assert_eq!(frequency_score(&pool[0], &refs), 26);
    }

    #[test]
    fn repeated_letters_count_once_for_containment() {
        let pool = words(&["llama"]);
        let refs: Vec<&Word> = pool.iter().collect();

        // Distinct L, A, M = 3; every position matches = 5 × 2 = 10
        assert_eq!(frequency_score(&pool[0], &refs), 13);

        // LEMMA: L, M and A contained once each, the second M adds nothing
        let freq = LetterFrequencies::from_candidates(&refs);
        assert_eq!(freq.coverage(&Word::new("lemma").unwrap()), 3);
    }

    #[test]
    fn unrelated_word_scores_zero() {
        let pool = words(&["crate", "trace"]);
        let refs: Vec<&Word> = pool.iter().collect();
        assert_eq!(frequency_score(&Word::new("jumpy").unwrap(), &refs), 0);
    }

    #[test]
    fn empty_pool_scores_zero() {
        assert_eq!(frequency_score(&Word::new("crane").unwrap(), &[]), 0);
    }
}
