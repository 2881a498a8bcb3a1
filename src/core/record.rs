//! Guess history entries

use super::{FeedbackError, FeedbackRow, Word, WordError, evaluate};
use std::fmt;
use thiserror::Error;

/// One played guess together with the feedback it earned
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessRecord {
    pub word: Word,
    pub feedback: FeedbackRow,
}

/// Error type for `WORD:FEEDBACK` entries that do not parse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("expected WORD:FEEDBACK, got '{0}'")]
    MissingSeparator(String),
    #[error(transparent)]
    Word(#[from] WordError),
    #[error(transparent)]
    Feedback(#[from] FeedbackError),
}

impl GuessRecord {
    #[must_use]
    pub const fn new(word: Word, feedback: FeedbackRow) -> Self {
        Self { word, feedback }
    }

    /// Record `guess` scored against a known `answer`
    #[must_use]
    pub fn scored(guess: Word, answer: &Word) -> Self {
        let feedback = evaluate(answer, &guess);
        Self::new(guess, feedback)
    }
}

impl fmt::Display for GuessRecord {
    /// Formats as `WORD:digits`, the same shape `FromStr` accepts
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.word, self.feedback)
    }
}

impl std::str::FromStr for GuessRecord {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (word, feedback) = s
            .split_once(':')
            .ok_or_else(|| RecordError::MissingSeparator(s.to_string()))?;
        Ok(Self::new(Word::new(word)?, feedback.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scored_record_matches_evaluation() {
        let answer = Word::new("allow").unwrap();
        let record = GuessRecord::scored(Word::new("llama").unwrap(), &answer);
        assert_eq!(record.feedback.to_string(), "12100");
        assert_eq!(record.to_string(), "LLAMA:12100");
    }

    #[test]
    fn parse_round_trips_display() {
        let record: GuessRecord = "crane:00202".parse().unwrap();
        assert_eq!(record.word.text(), "CRANE");
        assert_eq!(record.to_string(), "CRANE:00202");
    }

    #[test]
    fn parse_rejects_bad_records() {
        assert_eq!(
            "crane".parse::<GuessRecord>(),
            Err(RecordError::MissingSeparator("crane".to_string()))
        );
        assert_eq!(
            "cran:00202".parse::<GuessRecord>(),
            Err(RecordError::Word(WordError::InvalidLength(4)))
        );
        assert_eq!(
            "crane:0020".parse::<GuessRecord>(),
            Err(RecordError::Feedback(FeedbackError::InvalidLength(4)))
        );
        assert_eq!(
            "crane:0020x".parse::<GuessRecord>(),
            Err(RecordError::Feedback(FeedbackError::InvalidSymbol('x')))
        );
    }
}
