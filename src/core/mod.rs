//! Core domain types for Wordle
//!
//! Words, feedback rows and the evaluator that relates them. Nothing here
//! knows about candidate pools or strategies.

mod feedback;
mod record;
mod word;

pub use feedback::{FeedbackError, FeedbackRow, LetterState, evaluate};
pub use record::{GuessRecord, RecordError};
pub use word::{WORD_LENGTH, Word, WordError};
pub(crate) use word::letter_index;
