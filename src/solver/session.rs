//! Solving sessions
//!
//! A [`Session`] drives the filter/select/feedback loop for one game:
//! `Idle -> Running -> {Solved | Exhausted | Aborted}`. Feedback comes from a
//! [`FeedbackSource`], either a known answer (self-play) or something
//! external such as a player typing the colors they saw.

use super::engine::Solver;
use super::error::SolverError;
use super::strategy::{Strategy, StrategyType};
use crate::core::{FeedbackRow, GuessRecord, Word, evaluate};
use rand::Rng;
use std::collections::VecDeque;
use std::fmt;

/// Attempts allowed in a standard game
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Largest attempt cap a session accepts
pub const MAX_ATTEMPT_CAP: usize = 10;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    Idle,
    Running,
    Solved,
    Exhausted,
    Aborted,
}

impl SessionStatus {
    /// Whether no further steps can be taken
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted | Self::Aborted)
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Solved => "solved",
            Self::Exhausted => "exhausted",
            Self::Aborted => "aborted",
        })
    }
}

/// Session settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub max_attempts: usize,
}

impl SessionConfig {
    /// Validated configuration
    ///
    /// # Errors
    ///
    /// Returns `SolverError::InvalidAttemptCap` unless
    /// `1 <= max_attempts <= MAX_ATTEMPT_CAP`.
    pub fn new(max_attempts: usize) -> Result<Self, SolverError> {
        if max_attempts == 0 || max_attempts > MAX_ATTEMPT_CAP {
            return Err(SolverError::InvalidAttemptCap(max_attempts));
        }
        Ok(Self { max_attempts })
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Where feedback for a guess comes from
pub trait FeedbackSource {
    /// Feedback for `guess`
    ///
    /// # Errors
    ///
    /// Implementations return `SolverError::FeedbackSource` (or a parse error)
    /// when no feedback can be produced.
    fn feedback(&mut self, guess: &Word) -> Result<FeedbackRow, SolverError>;
}

/// Self-play: score every guess against a fixed answer
#[derive(Debug, Clone)]
pub struct KnownAnswer {
    answer: Word,
}

impl KnownAnswer {
    #[must_use]
    pub const fn new(answer: Word) -> Self {
        Self { answer }
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }
}

impl FeedbackSource for KnownAnswer {
    fn feedback(&mut self, guess: &Word) -> Result<FeedbackRow, SolverError> {
        Ok(evaluate(&self.answer, guess))
    }
}

/// Replays a fixed list of feedback rows, one per guess
#[derive(Debug, Clone, Default)]
pub struct ScriptedFeedback {
    rows: VecDeque<FeedbackRow>,
}

impl ScriptedFeedback {
    pub fn new(rows: impl IntoIterator<Item = FeedbackRow>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
        }
    }
}

impl FeedbackSource for ScriptedFeedback {
    fn feedback(&mut self, guess: &Word) -> Result<FeedbackRow, SolverError> {
        self.rows
            .pop_front()
            .ok_or_else(|| SolverError::FeedbackSource(format!("no feedback scripted for {guess}")))
    }
}

/// One completed turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStep {
    pub guess: Word,
    pub feedback: FeedbackRow,
    /// Candidates consistent with the history before this guess
    pub candidates_before: usize,
}

/// Summary of a session
#[derive(Debug, Clone)]
pub struct SessionResult {
    pub status: SessionStatus,
    pub solved: bool,
    pub attempts: Vec<Word>,
    pub feedbacks: Vec<FeedbackRow>,
    pub steps: Vec<SessionStep>,
}

impl SessionResult {
    /// Number of guesses made
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.attempts.len()
    }
}

/// One game's state
///
/// Owns its history and re-derives the candidate pool from the full pool on
/// every step, so there is no cached state to invalidate on undo or reset.
pub struct Session<'a, S: Strategy = StrategyType> {
    solver: Solver<'a, S>,
    config: SessionConfig,
    history: Vec<GuessRecord>,
    candidate_counts: Vec<usize>,
    status: SessionStatus,
}

impl<'a, S: Strategy> Session<'a, S> {
    pub const fn new(solver: Solver<'a, S>, config: SessionConfig) -> Self {
        Self {
            solver,
            config,
            history: Vec::new(),
            candidate_counts: Vec::new(),
            status: SessionStatus::Idle,
        }
    }

    /// Current lifecycle state
    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    /// Guesses recorded so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Settings fixed at creation
    #[must_use]
    pub const fn config(&self) -> SessionConfig {
        self.config
    }

    /// The solver proposing guesses
    #[must_use]
    pub const fn solver(&self) -> &Solver<'a, S> {
        &self.solver
    }

    /// Candidates consistent with the current history
    #[must_use]
    pub fn candidates(&self) -> Vec<&'a Word> {
        self.solver.candidates(&self.history)
    }

    /// Guesses still allowed before the cap
    #[must_use]
    pub fn attempts_left(&self) -> usize {
        self.config.max_attempts.saturating_sub(self.history.len())
    }

    /// Next guess without recording anything
    ///
    /// Moves an idle session to `Running`. An empty candidate pool aborts
    /// the session.
    ///
    /// # Errors
    ///
    /// `SessionFinished` if the session is already terminal,
    /// `EmptyCandidatePool` if the history rules out every word.
    pub fn propose<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&'a Word, SolverError> {
        self.ensure_open()?;
        let candidates = self.candidates();
        self.propose_from(&candidates, rng)
    }

    fn propose_from<R: Rng + ?Sized>(
        &mut self,
        candidates: &[&'a Word],
        rng: &mut R,
    ) -> Result<&'a Word, SolverError> {
        self.status = SessionStatus::Running;
        if candidates.is_empty() {
            log::warn!(
                "no valid words remain after {} guesses; aborting",
                self.history.len()
            );
            self.status = SessionStatus::Aborted;
            return Err(SolverError::EmptyCandidatePool);
        }
        self.solver.select_from(candidates, &self.history, rng)
    }

    /// Record a guess and its feedback, then update the status
    ///
    /// # Errors
    ///
    /// `SessionFinished` if the session is already terminal.
    pub fn record(&mut self, guess: Word, feedback: FeedbackRow) -> Result<SessionStatus, SolverError> {
        self.ensure_open()?;
        let before = self.solver.count_candidates(&self.history);
        Ok(self.push(GuessRecord::new(guess, feedback), before))
    }

    fn push(&mut self, record: GuessRecord, candidates_before: usize) -> SessionStatus {
        log::debug!(
            "guess {}: {} -> {} ({candidates_before} candidates before)",
            self.history.len() + 1,
            record.word,
            record.feedback
        );

        let solved = record.feedback.is_solved();
        self.history.push(record);
        self.candidate_counts.push(candidates_before);

        self.status = if solved {
            SessionStatus::Solved
        } else if self.history.len() >= self.config.max_attempts {
            SessionStatus::Exhausted
        } else {
            SessionStatus::Running
        };
        self.status
    }

    /// Play one turn: filter, select, obtain feedback, record
    ///
    /// An empty candidate pool is not an error here; the session moves to
    /// `Aborted` and that status is returned.
    ///
    /// # Errors
    ///
    /// `SessionFinished` if the session is already terminal, or whatever the
    /// feedback source reports.
    pub fn step<F, R>(&mut self, source: &mut F, rng: &mut R) -> Result<SessionStatus, SolverError>
    where
        F: FeedbackSource + ?Sized,
        R: Rng + ?Sized,
    {
        self.ensure_open()?;
        let candidates = self.candidates();
        let guess = match self.propose_from(&candidates, rng) {
            Ok(guess) => guess,
            Err(SolverError::EmptyCandidatePool) => return Ok(self.status),
            Err(e) => return Err(e),
        };
        let feedback = source.feedback(guess)?;
        Ok(self.push(GuessRecord::new(guess.clone(), feedback), candidates.len()))
    }

    /// Step until the session is terminal
    ///
    /// # Errors
    ///
    /// Propagates errors from [`step`](Self::step).
    pub fn run<F, R>(&mut self, source: &mut F, rng: &mut R) -> Result<SessionResult, SolverError>
    where
        F: FeedbackSource + ?Sized,
        R: Rng + ?Sized,
    {
        while !self.status.is_terminal() {
            self.step(source, rng)?;
        }
        Ok(self.result())
    }

    /// Stop the session from outside
    pub fn abort(&mut self) {
        if !self.status.is_terminal() {
            self.status = SessionStatus::Aborted;
        }
    }

    /// Drop the latest record and reopen the session
    pub fn undo(&mut self) -> Option<GuessRecord> {
        let record = self.history.pop()?;
        self.candidate_counts.pop();
        self.status = if self.history.is_empty() {
            SessionStatus::Idle
        } else {
            SessionStatus::Running
        };
        Some(record)
    }

    /// Clear history and return to `Idle`
    pub fn reset(&mut self) {
        self.history.clear();
        self.candidate_counts.clear();
        self.status = SessionStatus::Idle;
    }

    #[must_use]
    pub fn result(&self) -> SessionResult {
        let steps: Vec<SessionStep> = self
            .history
            .iter()
            .zip(&self.candidate_counts)
            .map(|(record, &candidates_before)| SessionStep {
                guess: record.word.clone(),
                feedback: record.feedback,
                candidates_before,
            })
            .collect();

        SessionResult {
            status: self.status,
            solved: self.status == SessionStatus::Solved,
            attempts: steps.iter().map(|s| s.guess.clone()).collect(),
            feedbacks: steps.iter().map(|s| s.feedback).collect(),
            steps,
        }
    }

    fn ensure_open(&self) -> Result<(), SolverError> {
        if self.status.is_terminal() {
            return Err(SolverError::SessionFinished(self.status));
        }
        Ok(())
    }
}

/// Play a whole game in one call
///
/// # Errors
///
/// `InvalidAttemptCap` for a cap outside `1..=MAX_ATTEMPT_CAP`, or any error
/// reported by `source`.
pub fn run_session<S, F, R>(
    pool: &[Word],
    strategy: S,
    max_attempts: usize,
    source: &mut F,
    rng: &mut R,
) -> Result<SessionResult, SolverError>
where
    S: Strategy,
    F: FeedbackSource + ?Sized,
    R: Rng + ?Sized,
{
    let config = SessionConfig::new(max_attempts)?;
    Session::new(Solver::new(strategy, pool), config).run(source, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::filter::is_consistent;
    use crate::wordlists::embedded_words;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn all_strategies() -> Vec<StrategyType> {
        StrategyType::NAMES.iter().map(|n| StrategyType::from_name(n)).collect()
    }

    #[test]
    fn config_bounds() {
        assert_eq!(SessionConfig::default().max_attempts, 6);
        assert!(SessionConfig::new(1).is_ok());
        assert!(SessionConfig::new(10).is_ok());
        assert!(matches!(SessionConfig::new(0), Err(SolverError::InvalidAttemptCap(0))));
        assert!(matches!(SessionConfig::new(11), Err(SolverError::InvalidAttemptCap(11))));
    }

    #[test]
    fn small_pool_always_solved() {
        // Every guess is a candidate and a wrong candidate rules itself out,
        // so a pool no larger than the cap is always solved.
        let pool = words(&["crane", "slate", "irate", "grate", "trace", "plate", "skate"]);

        for strategy in all_strategies() {
            for answer in &pool {
                let mut rng = StdRng::seed_from_u64(9);
                let mut source = KnownAnswer::new(answer.clone());
                let result = run_session(&pool, strategy, 10, &mut source, &mut rng).unwrap();

                assert!(result.solved, "{strategy} failed on {answer}");
                assert_eq!(result.attempts.last(), Some(answer));
                assert!(result.guess_count() <= pool.len());
            }
        }
    }

    #[test]
    fn embedded_dictionary_games_stay_consistent() {
        let pool = embedded_words();
        let answers = ["CRANE", "LLAMA", "ROBOT", "SPEED", "FLOOR"];

        for strategy in all_strategies() {
            for (seed, text) in answers.iter().enumerate() {
                let answer = word(text);
                let mut rng = StdRng::seed_from_u64(seed as u64);
                let mut source = KnownAnswer::new(answer.clone());
                let result = run_session(&pool, strategy, 6, &mut source, &mut rng).unwrap();

                assert!(result.guess_count() <= 6);
                assert_ne!(result.status, SessionStatus::Aborted);
                assert_eq!(result.solved, result.feedbacks.last() == Some(&FeedbackRow::SOLVED));

                // Each guess agreed with everything learned before it
                for (i, guess) in result.attempts.iter().enumerate() {
                    for earlier in &result.steps[..i] {
                        let record = GuessRecord::new(earlier.guess.clone(), earlier.feedback);
                        assert!(is_consistent(guess, &record), "{strategy}: {guess} after {record}");
                    }
                }

                // Candidate counts never grow
                let counts: Vec<usize> = result.steps.iter().map(|s| s.candidates_before).collect();
                assert!(counts.windows(2).all(|w| w[1] <= w[0]));
            }
        }
    }

    #[test]
    fn opener_is_first_guess() {
        let pool = embedded_words();
        let mut source = KnownAnswer::new(word("robot"));
        let result = run_session(
            &pool,
            StrategyType::default(),
            6,
            &mut source,
            &mut StdRng::seed_from_u64(0),
        )
        .unwrap();

        assert_eq!(result.attempts[0].text(), "AROSE");
        assert_eq!(result.steps[0].candidates_before, pool.len());
    }

    #[test]
    fn attempt_cap_exhausts() {
        let pool = words(&["slate", "crane"]);
        let mut source = KnownAnswer::new(word("crane"));
        let result = run_session(
            &pool,
            StrategyType::default(),
            1,
            &mut source,
            &mut StdRng::seed_from_u64(0),
        )
        .unwrap();

        assert_eq!(result.status, SessionStatus::Exhausted);
        assert!(!result.solved);
        assert_eq!(result.attempts, vec![word("slate")]);
    }

    #[test]
    fn contradictory_feedback_aborts() {
        let pool = words(&["slate", "crane"]);
        let solver = Solver::new(StrategyType::default(), &pool);
        let mut session = Session::new(solver, SessionConfig::default());
        let mut source = ScriptedFeedback::new(["00000".parse().unwrap()]);
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(session.step(&mut source, &mut rng).unwrap(), SessionStatus::Running);
        assert_eq!(session.step(&mut source, &mut rng).unwrap(), SessionStatus::Aborted);

        let result = session.result();
        assert!(!result.solved);
        assert_eq!(result.guess_count(), 1);
    }

    #[test]
    fn empty_pool_aborts_immediately() {
        let pool: Vec<Word> = Vec::new();
        let mut source = ScriptedFeedback::default();
        let result = run_session(
            &pool,
            StrategyType::default(),
            6,
            &mut source,
            &mut StdRng::seed_from_u64(0),
        )
        .unwrap();

        assert_eq!(result.status, SessionStatus::Aborted);
        assert!(result.attempts.is_empty());
    }

    #[test]
    fn exhausted_script_is_an_error() {
        let pool = words(&["slate", "crane"]);
        let mut source = ScriptedFeedback::default();
        let result = run_session(
            &pool,
            StrategyType::default(),
            6,
            &mut source,
            &mut StdRng::seed_from_u64(0),
        );

        assert!(matches!(result, Err(SolverError::FeedbackSource(_))));
    }

    #[test]
    fn finished_session_rejects_steps() {
        let pool = words(&["slate"]);
        let solver = Solver::new(StrategyType::default(), &pool);
        let mut session = Session::new(solver, SessionConfig::default());
        let mut source = KnownAnswer::new(word("slate"));
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(session.step(&mut source, &mut rng).unwrap(), SessionStatus::Solved);
        assert!(matches!(
            session.step(&mut source, &mut rng),
            Err(SolverError::SessionFinished(SessionStatus::Solved))
        ));
        assert!(matches!(
            session.record(word("crane"), FeedbackRow::SOLVED),
            Err(SolverError::SessionFinished(_))
        ));
    }

    #[test]
    fn propose_and_record() {
        let pool = words(&["slate", "crane", "trace"]);
        let solver = Solver::new(StrategyType::default(), &pool);
        let mut session = Session::new(solver, SessionConfig::default());
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(session.status(), SessionStatus::Idle);
        let guess = session.propose(&mut rng).unwrap().clone();
        assert_eq!(session.status(), SessionStatus::Running);
        assert!(session.history().is_empty());

        let feedback = evaluate(&word("trace"), &guess);
        assert_eq!(session.record(guess, feedback).unwrap(), SessionStatus::Running);
        assert_eq!(session.attempts_left(), 5);
        assert_eq!(session.result().steps[0].candidates_before, 3);
    }

    #[test]
    fn accessors_reflect_construction() {
        let pool = words(&["slate", "crane", "trace"]);
        let solver = Solver::new(StrategyType::from_name("beam"), &pool);
        let mut session = Session::new(solver, SessionConfig::new(4).unwrap());

        assert_eq!(session.config().max_attempts, 4);
        assert_eq!(session.solver().strategy().name(), "beam");
        assert_eq!(session.solver().pool().len(), 3);

        session.step(&mut KnownAnswer::new(word("slate")), &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(session.status(), SessionStatus::Solved);
        assert_eq!(session.history()[0].to_string(), "SLATE:22222");
    }

    #[test]
    fn undo_and_reset() {
        let pool = words(&["slate", "crane", "trace", "grate"]);
        let solver = Solver::new(StrategyType::default(), &pool);
        let mut session = Session::new(solver, SessionConfig::new(1).unwrap());
        let mut source = KnownAnswer::new(word("grate"));
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(session.step(&mut source, &mut rng).unwrap(), SessionStatus::Exhausted);

        let undone = session.undo().unwrap();
        assert_eq!(undone.word.text(), "SLATE");
        assert_eq!(session.status(), SessionStatus::Idle);
        assert_eq!(session.candidates().len(), 4);
        assert!(session.undo().is_none());

        session.step(&mut source, &mut rng).unwrap();
        session.reset();
        assert_eq!(session.status(), SessionStatus::Idle);
        assert!(session.history().is_empty());
        assert!(session.result().steps.is_empty());
    }

    #[test]
    fn abort_is_terminal() {
        let pool = words(&["slate", "crane"]);
        let solver = Solver::new(StrategyType::default(), &pool);
        let mut session = Session::new(solver, SessionConfig::default());

        session.abort();
        assert_eq!(session.status(), SessionStatus::Aborted);
        assert!(session.propose(&mut StdRng::seed_from_u64(0)).is_err());
    }
}
