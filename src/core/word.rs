//! Wordle word representation
//!
//! A Word stores a 5-letter uppercase word along with a per-letter tally used
//! by feedback evaluation and filtering.

use std::fmt;
use thiserror::Error;

/// Fixed word length for every guess, answer and feedback row
pub const WORD_LENGTH: usize = 5;

/// A 5-letter word, normalized to uppercase ASCII
///
/// Equality is exact match after normalization, so `"crane"` and `"CRANE"`
/// build equal words.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {WORD_LENGTH} letters, got {0}")]
    InvalidLength(usize),
    #[error("word '{0}' must contain only ASCII letters")]
    InvalidCharacters(String),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and letters are uppercased. Words
    /// of the wrong length are rejected, never truncated or padded.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use wordly_solver::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_ascii_uppercase();

        let length = text.chars().count();
        if length != WORD_LENGTH {
            return Err(WordError::InvalidLength(length));
        }

        let letters: [u8; WORD_LENGTH] = match text.as_bytes().try_into() {
            Ok(bytes) => bytes,
            // Five chars but more than five bytes: something non-ASCII slipped in
            Err(_) => return Err(WordError::InvalidCharacters(text)),
        };

        if !letters.iter().all(u8::is_ascii_uppercase) {
            return Err(WordError::InvalidCharacters(text));
        }

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array of uppercase ASCII letters
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }

    /// Number of times `letter` occurs in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.letters.iter().filter(|&&l| l == letter).count()
    }

    /// Occurrence count of each letter, indexed `A` = 0 .. `Z` = 25
    #[inline]
    pub(crate) fn letter_counts(&self) -> [u8; 26] {
        let mut counts = [0u8; 26];
        for &letter in &self.letters {
            counts[letter_index(letter)] += 1;
        }
        counts
    }
}

/// Index of an uppercase ASCII letter into a 26-slot table
#[inline]
pub(crate) const fn letter_index(letter: u8) -> usize {
    (letter - b'A') as usize
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "CRANE");
        assert_eq!(word.letters(), b"CRANE");
    }

    #[test]
    fn word_creation_normalizes_case_and_whitespace() {
        assert_eq!(Word::new("crane").unwrap().text(), "CRANE");
        assert_eq!(Word::new("CrAnE").unwrap().text(), "CRANE");
        assert_eq!(Word::new("  slate\n").unwrap().text(), "SLATE");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("toolong"), Err(WordError::InvalidLength(7)));
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            Word::new("cran3"),
            Err(WordError::InvalidCharacters(_))
        ));
        assert!(Word::new("cr ne").is_err());
        assert!(Word::new("cran!").is_err());
        assert!(Word::new("crané").is_err());
    }

    #[test]
    fn word_letter_queries() {
        let word = Word::new("llama").unwrap();
        assert_eq!(word.letter_at(0), b'L');
        assert!(word.has_letter(b'M'));
        assert!(!word.has_letter(b'Z'));
        assert_eq!(word.count_of(b'L'), 2);
        assert_eq!(word.count_of(b'A'), 2);
        assert_eq!(word.count_of(b'Q'), 0);
    }

    #[test]
    fn word_letter_counts() {
        let counts = Word::new("speed").unwrap().letter_counts();
        assert_eq!(counts[letter_index(b'E')], 2);
        assert_eq!(counts[letter_index(b'S')], 1);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), 5);
    }

    #[test]
    fn word_equality_and_display() {
        let lower = Word::new("crane").unwrap();
        let upper: Word = "CRANE".parse().unwrap();
        assert_eq!(lower, upper);
        assert_ne!(lower, Word::new("slate").unwrap());
        assert_eq!(format!("{lower}"), "CRANE");
    }
}
