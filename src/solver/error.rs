//! Solver error types

use super::session::{MAX_ATTEMPT_CAP, SessionStatus};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("no candidate words remain; the feedback history contradicts the word pool")]
    EmptyCandidatePool,
    #[error("attempt cap must be between 1 and {max}, got {0}", max = MAX_ATTEMPT_CAP)]
    InvalidAttemptCap(usize),
    #[error("session already finished ({0})")]
    SessionFinished(SessionStatus),
    #[error("feedback source failed: {0}")]
    FeedbackSource(String),
}
