//! Candidate filtering
//!
//! A word stays a candidate iff it could have been the answer for every
//! recorded guess. The exact test re-runs the evaluator with the candidate as
//! the hypothetical answer. The per-position letter rules are a cheaper
//! necessary condition checked first.

use crate::core::{GuessRecord, LetterState, WORD_LENGTH, Word, evaluate};

/// Keep the words consistent with every record in `history`
///
/// The result preserves pool order. An empty history keeps the whole pool;
/// an empty result means the history contradicts the pool.
///
/// # Examples
/// ```
/// use wordly_solver::core::{GuessRecord, Word};
/// use wordly_solver::solver::filter_candidates;
///
/// let pool: Vec<Word> = ["crate", "trace", "slate"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let history = vec!["crane:22202".parse::<GuessRecord>().unwrap()];
///
/// let remaining = filter_candidates(&pool, &history);
/// assert_eq!(remaining.len(), 1);
/// assert_eq!(remaining[0].text(), "CRATE");
/// ```
pub fn filter_candidates<'a, I>(pool: I, history: &[GuessRecord]) -> Vec<&'a Word>
where
    I: IntoIterator<Item = &'a Word>,
{
    pool.into_iter()
        .filter(|&candidate| history.iter().all(|record| is_consistent(candidate, record)))
        .collect()
}

/// Whether `candidate` as the answer would have produced `record`'s feedback
#[must_use]
pub fn is_consistent(candidate: &Word, record: &GuessRecord) -> bool {
    satisfies_letter_rules(candidate, record) && evaluate(candidate, &record.word) == record.feedback
}

/// Per-position letter rules implied by one record
///
/// - correct: the candidate has the guess letter at that position
/// - present: the candidate has the letter, but not at that position
/// - absent: the candidate does not have the letter at that position, and
///   has no copy at all unless the same letter is marked correct or present
///   elsewhere in the guess
///
/// Every evaluator-consistent candidate passes these rules. The converse does
/// not hold for repeated letters (the rules do not pin exact letter counts),
/// which is why [`is_consistent`] finishes with a full re-evaluation.
#[must_use]
pub fn satisfies_letter_rules(candidate: &Word, record: &GuessRecord) -> bool {
    let guess = &record.word;
    let feedback = &record.feedback;

    (0..WORD_LENGTH).all(|i| {
        let letter = guess.letter_at(i);
        match feedback.state_at(i) {
            LetterState::Correct => candidate.letter_at(i) == letter,
            LetterState::Present => {
                candidate.letter_at(i) != letter && candidate.has_letter(letter)
            }
            LetterState::Absent => {
                if candidate.letter_at(i) == letter {
                    return false;
                }
                let marked_elsewhere = (0..WORD_LENGTH).any(|j| {
                    guess.letter_at(j) == letter && feedback.state_at(j) != LetterState::Absent
                });
                marked_elsewhere || !candidate.has_letter(letter)
            }
        }
    })
}
