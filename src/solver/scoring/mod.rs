//! Guess scoring heuristics
//!
//! Two independent scores over the current candidate pool: letter and
//! positional frequency, and Shannon entropy of the feedback distribution.

mod entropy;
mod frequency;

pub use entropy::{GuessMetrics, calculate_metrics, entropy_score, pattern_distribution, shannon_entropy};
pub use frequency::{LetterFrequencies, frequency_score};
