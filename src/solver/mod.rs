//! Wordle solving algorithms
//!
//! Candidate filtering, guess scoring, the selectors built on them, and the
//! session loop that ties them to a source of feedback.

mod engine;
mod error;
pub mod filter;
pub mod scoring;
pub mod search;
pub mod session;
pub mod strategy;

pub use engine::{RankedGuess, Solver, Suggestion};
pub use error::SolverError;
pub use filter::filter_candidates;
pub use search::OPENERS;
pub use session::{
    FeedbackSource, KnownAnswer, ScriptedFeedback, Session, SessionConfig, SessionResult,
    SessionStatus, SessionStep, run_session,
};
pub use strategy::{Strategy, StrategyType};
