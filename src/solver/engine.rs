//! Main Wordle solver interface

use super::error::SolverError;
use super::filter::filter_candidates;
use super::strategy::{Strategy, StrategyType};
use crate::core::{GuessRecord, Word};
use rand::Rng;

/// Main Wordle solver
///
/// Pairs a word pool with a strategy. Holds no game state: every call
/// derives the candidate pool afresh from the full pool and the history it
/// is given.
pub struct Solver<'a, S: Strategy = StrategyType> {
    strategy: S,
    pool: &'a [Word],
}

/// A next-guess recommendation with context for display
#[derive(Debug, Clone)]
pub struct Suggestion<'a> {
    pub guess: &'a Word,
    pub remaining: usize,
    /// Chance the guess is the answer if every candidate is equally likely
    pub confidence: f64,
}

/// A candidate with the score its strategy gives it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedGuess<'a> {
    pub word: &'a Word,
    pub score: f64,
}

impl Suggestion<'_> {
    /// Short human-readable explanation keyed on how many candidates remain
    #[must_use]
    pub fn reasoning(&self, strategy_name: &str) -> String {
        match self.remaining {
            1 => "Only one word matches all clues!".to_string(),
            2..=5 => format!(
                "Narrowed to {} possibilities - high confidence guess",
                self.remaining
            ),
            6..=20 => format!("{} words remain - strategic elimination", self.remaining),
            21..=100 => format!(
                "Filtering from {} candidates using {strategy_name}",
                self.remaining
            ),
            _ => format!(
                "Exploring {} possibilities with the {strategy_name} strategy",
                self.remaining
            ),
        }
    }
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver with the given strategy and word pool
    pub const fn new(strategy: S, pool: &'a [Word]) -> Self {
        Self { strategy, pool }
    }

    /// The strategy in use
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// The full, unfiltered word pool
    #[must_use]
    pub const fn pool(&self) -> &'a [Word] {
        self.pool
    }

    /// Words from the pool consistent with the whole history
    #[must_use]
    pub fn candidates(&self, history: &[GuessRecord]) -> Vec<&'a Word> {
        filter_candidates(self.pool, history)
    }

    /// Count how many candidates remain given the history
    #[must_use]
    pub fn count_candidates(&self, history: &[GuessRecord]) -> usize {
        self.candidates(history).len()
    }

    /// Get the next guess given previous guesses and feedback
    ///
    /// # Errors
    ///
    /// Returns `SolverError::EmptyCandidatePool` if no word is consistent with
    /// the history.
    pub fn next_guess<R: Rng + ?Sized>(
        &self,
        history: &[GuessRecord],
        rng: &mut R,
    ) -> Result<&'a Word, SolverError> {
        let candidates = self.candidates(history);
        self.select_from(&candidates, history, rng)
    }

    /// Pick from an already-filtered candidate pool
    ///
    /// # Errors
    ///
    /// Returns `SolverError::EmptyCandidatePool` if `candidates` is empty.
    pub fn select_from<R: Rng + ?Sized>(
        &self,
        candidates: &[&'a Word],
        history: &[GuessRecord],
        rng: &mut R,
    ) -> Result<&'a Word, SolverError> {
        self.strategy
            .select_guess(candidates, history, rng)
            .ok_or(SolverError::EmptyCandidatePool)
    }

    /// Next guess together with remaining count and confidence
    ///
    /// # Errors
    ///
    /// Returns `SolverError::EmptyCandidatePool` if no word is consistent with
    /// the history.
    pub fn suggest<R: Rng + ?Sized>(
        &self,
        history: &[GuessRecord],
        rng: &mut R,
    ) -> Result<Suggestion<'a>, SolverError> {
        let candidates = self.candidates(history);
        let guess = self.select_from(&candidates, history, rng)?;
        let remaining = candidates.len();

        Ok(Suggestion {
            guess,
            remaining,
            confidence: 1.0 / remaining as f64,
        })
    }

    /// The `n` best candidates by the strategy's own score, best first
    ///
    /// Equal scores keep pool order. Deterministic for every strategy, since
    /// it ranks rather than searches.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::EmptyCandidatePool` if no word is consistent with
    /// the history.
    pub fn suggest_top(
        &self,
        history: &[GuessRecord],
        n: usize,
    ) -> Result<Vec<RankedGuess<'a>>, SolverError> {
        let candidates = self.candidates(history);
        if candidates.is_empty() {
            return Err(SolverError::EmptyCandidatePool);
        }

        let mut ranked: Vec<RankedGuess<'a>> = self
            .strategy
            .scored(&candidates)
            .into_iter()
            .map(|(word, score)| RankedGuess { word, score })
            .collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(n);

        log::debug!(
            "ranked {} of {} candidates",
            ranked.len(),
            candidates.len()
        );
        Ok(ranked)
    }
}
