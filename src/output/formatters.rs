//! Formatting utilities for terminal output

use crate::core::{FeedbackRow, LetterState, WORD_LENGTH, Word};
use colored::Colorize;

/// Entropy of a guess that splits the pool into every possible feedback row
#[must_use]
pub fn max_entropy() -> f64 {
    3f64.powi(WORD_LENGTH as i32).log2()
}

/// Render a guess as colored letter tiles
#[must_use]
pub fn colored_tiles(word: &Word, feedback: &FeedbackRow) -> String {
    word.text()
        .chars()
        .zip(feedback.states())
        .map(|(letter, state)| {
            let tile = format!(" {letter} ");
            match state {
                LetterState::Correct => tile.black().on_green().bold().to_string(),
                LetterState::Present => tile.black().on_yellow().bold().to_string(),
                LetterState::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the largest possible entropy
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    create_progress_bar(entropy, max_entropy(), width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_clamps() {
        assert_eq!(create_progress_bar(250.0, 100.0, 4), "████");
        assert_eq!(create_progress_bar(-3.0, 100.0, 4), "░░░░");
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn entropy_bar_scale() {
        assert!((max_entropy() - 243f64.log2()).abs() < 1e-12);
        assert_eq!(entropy_bar(max_entropy(), 8), "████████");
    }

    #[test]
    fn tiles_keep_letters_in_order() {
        colored::control::set_override(false);
        let word = Word::new("crate").unwrap();
        let feedback: FeedbackRow = "12212".parse().unwrap();
        assert_eq!(colored_tiles(&word, &feedback), " C  R  A  T  E ");
    }
}
