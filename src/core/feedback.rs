//! Wordle feedback evaluation and representation
//!
//! A feedback row holds one [`LetterState`] per letter position. When
//! serialized it uses the digit code:
//! - 0 = absent (letter not in word, or no unmatched copies left)
//! - 1 = present (letter in word, wrong position)
//! - 2 = correct (letter in correct position)
//!
//! so a row reads like `"20110"`, one character per position.

use super::word::{WORD_LENGTH, Word, letter_index};
use std::fmt;
use thiserror::Error;

/// Classification of one guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterState {
    Absent,
    Present,
    Correct,
}

impl LetterState {
    /// Digit used in the serialized row
    #[must_use]
    pub const fn digit(self) -> char {
        match self {
            Self::Absent => '0',
            Self::Present => '1',
            Self::Correct => '2',
        }
    }

    /// Square emoji used for display
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }

    /// Parse one feedback symbol
    ///
    /// Accepts the digit code, `G`/`Y`/`-` letters and the square emoji.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '2' | 'G' | 'g' | '🟩' => Some(Self::Correct),
            '1' | 'Y' | 'y' | '🟨' => Some(Self::Present),
            '0' | '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback for one guess, in position order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeedbackRow([LetterState; WORD_LENGTH]);

/// Error type for malformed feedback strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("feedback must have exactly {WORD_LENGTH} symbols, got {0}")]
    InvalidLength(usize),
    #[error("invalid feedback symbol '{0}' (use 2/1/0, G/Y/- or 🟩🟨⬜)")]
    InvalidSymbol(char),
}

impl FeedbackRow {
    /// All positions correct
    pub const SOLVED: Self = Self([LetterState::Correct; WORD_LENGTH]);

    /// Build a row from explicit states
    #[must_use]
    pub const fn new(states: [LetterState; WORD_LENGTH]) -> Self {
        Self(states)
    }

    /// The per-position states
    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LENGTH] {
        &self.0
    }

    /// State at a specific position (0-4)
    #[inline]
    #[must_use]
    pub const fn state_at(&self, position: usize) -> LetterState {
        self.0[position]
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Number of positions carrying `state`
    #[must_use]
    pub fn count(&self, state: LetterState) -> usize {
        self.0.iter().filter(|&&s| s == state).count()
    }

    /// Convert to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

/// Score `guess` against the hidden `answer`
///
/// Exact matches are claimed first so a repeated guess letter never earns a
/// present mark at the expense of a correct one, and the correct plus present
/// marks for any letter never exceed its count in the answer.
///
/// # Algorithm
/// 1. First pass: mark exact position matches and consume them from the
///    answer's letter tally
/// 2. Second pass: mark the remaining positions present while unmatched
///    copies of the letter remain in the tally, absent otherwise
///
/// # Examples
/// ```
/// use wordly_solver::core::{Word, evaluate};
///
/// let answer = Word::new("slate").unwrap();
/// let guess = Word::new("crane").unwrap();
///
/// // C(absent) R(absent) A(correct) N(absent) E(correct)
/// assert_eq!(evaluate(&answer, &guess).to_string(), "00202");
/// ```
#[must_use]
pub fn evaluate(answer: &Word, guess: &Word) -> FeedbackRow {
    let mut states = [LetterState::Absent; WORD_LENGTH];
    let mut remaining = answer.letter_counts();

    // First pass: exact position matches
    for (i, (&g, &a)) in guess.letters().iter().zip(answer.letters()).enumerate() {
        if g == a {
            states[i] = LetterState::Correct;
            remaining[letter_index(g)] -= 1;
        }
    }

    // Second pass: present while unmatched copies remain
    for (i, &g) in guess.letters().iter().enumerate() {
        if states[i] == LetterState::Correct {
            continue;
        }
        let slot = &mut remaining[letter_index(g)];
        if *slot > 0 {
            states[i] = LetterState::Present;
            *slot -= 1;
        }
    }

    FeedbackRow(states)
}

impl fmt::Display for FeedbackRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for state in &self.0 {
            write!(f, "{}", state.digit())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for FeedbackRow {
    type Err = FeedbackError;

    /// Parse a row like "20110", "GY-GY" or "🟩🟨⬜🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.trim().chars().collect();
        if symbols.len() != WORD_LENGTH {
            return Err(FeedbackError::InvalidLength(symbols.len()));
        }

        let mut states = [LetterState::Absent; WORD_LENGTH];
        for (slot, &symbol) in states.iter_mut().zip(&symbols) {
            *slot = LetterState::from_symbol(symbol).ok_or(FeedbackError::InvalidSymbol(symbol))?;
        }

        Ok(Self(states))
    }
}
