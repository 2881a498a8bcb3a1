//! Word pools
//!
//! The bundled dictionary plus helpers for loading custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;

/// The bundled dictionary as validated words, in file order
#[must_use]
pub fn embedded_words() -> Vec<Word> {
    loader::words_from_slice(WORDS)
}
