//! Word solving command
//!
//! Plays a full self-play game against a given (or random) answer.

use crate::core::{FeedbackRow, GuessRecord, Word};
use crate::solver::{KnownAnswer, SessionResult, StrategyType, filter_candidates, run_session};
use crate::wordlists::loader::random_answer;
use anyhow::{Context, Result};
use rand::Rng;

/// Configuration for solving a word
pub struct SolveConfig {
    /// Answer to solve for; a random pool word when `None`
    pub target: Option<String>,
    pub max_attempts: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: Option<String>) -> Self {
        Self {
            target,
            max_attempts: crate::solver::session::DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub answer: Word,
    pub strategy: &'static str,
    pub steps: Vec<SolveStep>,
    pub session: SessionResult,
}

/// A single guess step in the solution
pub struct SolveStep {
    pub word: Word,
    pub feedback: FeedbackRow,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a word with the given strategy
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 letters or contains non-ASCII)
/// - No target was given and the pool is empty
/// - The attempt cap is out of range
pub fn solve_word<R: Rng + ?Sized>(
    config: &SolveConfig,
    pool: &[Word],
    strategy: StrategyType,
    rng: &mut R,
) -> Result<SolveResult> {
    let answer = match &config.target {
        Some(text) => Word::new(text).context("invalid target word")?,
        None => random_answer(pool, rng)
            .cloned()
            .context("cannot pick a random answer from an empty word list")?,
    };

    if !pool.contains(&answer) {
        log::warn!("{answer} is not in the word list; the solver cannot guess it");
    }

    let mut source = KnownAnswer::new(answer.clone());
    let session = run_session(pool, strategy, config.max_attempts, &mut source, rng)?;

    let mut history = Vec::with_capacity(session.steps.len());
    let steps = session
        .steps
        .iter()
        .map(|step| {
            history.push(GuessRecord::new(step.guess.clone(), step.feedback));
            SolveStep {
                word: step.guess.clone(),
                feedback: step.feedback,
                candidates_before: step.candidates_before,
                candidates_after: filter_candidates(pool, &history).len(),
            }
        })
        .collect();

    Ok(SolveResult {
        answer,
        strategy: strategy.name(),
        steps,
        session,
    })
}
