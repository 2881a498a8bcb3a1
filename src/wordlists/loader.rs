//! Word list loading utilities
//!
//! Lists are normalized to uppercase, deduplicated in first-seen order, and
//! stripped of entries that are not five ASCII letters.

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines and lines starting with `#` are ignored. Invalid entries are
/// skipped with a warning.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordly_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    let words = words_from_slice(&lines);

    log::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert a string slice to a deduplicated Word vector
///
/// # Examples
/// ```
/// use wordly_solver::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "CRANE", "toolong"]);
/// assert_eq!(words.len(), 1);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    slice
        .iter()
        .filter_map(|&s| match Word::new(s) {
            Ok(word) => Some(word),
            Err(e) => {
                log::warn!("skipping '{s}': {e}");
                None
            }
        })
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

/// Uniformly random answer from a pool
pub fn random_answer<'a, R: Rng + ?Sized>(pool: &'a [Word], rng: &mut R) -> Option<&'a Word> {
    pool.choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
        assert_eq!(words[2].text(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "sl4te", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn words_from_slice_dedupes_case_insensitively() {
        let words = words_from_slice(&["crane", "slate", "CRANE", " Crane "]);
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn words_from_slice_empty() {
        assert!(words_from_slice(&[]).is_empty());
    }

    #[test]
    fn load_from_file_skips_comments_and_blanks() {
        let path = std::env::temp_dir().join(format!("wordly_loader_{}.txt", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "# custom list\n\ncrane\nslate\n\ncrane\nbad").unwrap();
        drop(file);

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/definitely/not/here.txt").is_err());
    }

    #[test]
    fn random_answer_from_pool() {
        let pool = words_from_slice(&["crane", "slate", "irate"]);
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..20 {
            assert!(pool.contains(random_answer(&pool, &mut rng).unwrap()));
        }
        assert!(random_answer(&[], &mut rng).is_none());
    }
}
