//! One-shot next-guess suggestion for a game in progress

use crate::core::{GuessRecord, Word};
use crate::solver::{Solver, StrategyType};
use anyhow::{Context, Result};
use rand::Rng;

/// Candidates listed alongside a suggestion
const PREVIEW_LIMIT: usize = 10;

/// Most ranked alternatives a suggestion carries
pub const MAX_SUGGESTIONS: usize = 5;

pub struct SuggestResult {
    pub guess: Word,
    pub remaining: usize,
    pub confidence: f64,
    pub reasoning: String,
    /// Best candidates by the strategy's score, best first
    pub ranked: Vec<(Word, f64)>,
    /// First few remaining candidates, in pool order
    pub preview: Vec<Word>,
}

/// Parse `WORD:FEEDBACK` arguments into a history
///
/// # Errors
///
/// Returns an error naming the first entry that does not parse.
pub fn parse_history<S: AsRef<str>>(entries: &[S]) -> Result<Vec<GuessRecord>> {
    entries
        .iter()
        .map(|entry| {
            let entry = entry.as_ref();
            entry
                .parse::<GuessRecord>()
                .with_context(|| format!("bad history entry '{entry}'"))
        })
        .collect()
}

/// Suggest the next guess for the given history
///
/// Also ranks the `top` best candidates, clamped to `1..=MAX_SUGGESTIONS`.
///
/// # Errors
///
/// Returns an error if the history rules out every word in the pool.
pub fn suggest_next<R: Rng + ?Sized>(
    pool: &[Word],
    strategy: StrategyType,
    history: &[GuessRecord],
    top: usize,
    rng: &mut R,
) -> Result<SuggestResult> {
    let solver = Solver::new(strategy, pool);
    let suggestion = solver.suggest(history, rng)?;
    let ranked = solver
        .suggest_top(history, top.clamp(1, MAX_SUGGESTIONS))?
        .into_iter()
        .map(|r| (r.word.clone(), r.score))
        .collect();
    let preview = solver
        .candidates(history)
        .into_iter()
        .take(PREVIEW_LIMIT)
        .cloned()
        .collect();

    Ok(SuggestResult {
        guess: suggestion.guess.clone(),
        remaining: suggestion.remaining,
        confidence: suggestion.confidence,
        reasoning: suggestion.reasoning(strategy.name()),
        ranked,
        preview,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::scoring::frequency_score;
    use crate::wordlists::embedded_words;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parse_history_accepts_mixed_notation() {
        let history = parse_history(&["crane:00202", "slate:--G-G"]).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].to_string(), "SLATE:00202");
    }

    #[test]
    fn parse_history_reports_bad_entry() {
        let err = parse_history(&["crane:00202", "slate"]).unwrap_err();
        assert!(err.to_string().contains("slate"));
        assert!(err.chain().any(|cause| cause.to_string().contains("WORD:FEEDBACK")));
    }

    #[test]
    fn opening_suggestion() {
        let pool = embedded_words();
        let result =
            suggest_next(&pool, StrategyType::default(), &[], 1, &mut StdRng::seed_from_u64(0))
                .unwrap();

        assert_eq!(result.guess.text(), "AROSE");
        assert_eq!(result.remaining, pool.len());
        assert_eq!(result.preview.len(), 10);
        assert_eq!(result.ranked.len(), 1);
    }

    #[test]
    fn ranked_alternatives_are_clamped_and_ordered() {
        let pool = embedded_words();
        let suggest = |top| {
            suggest_next(&pool, StrategyType::default(), &[], top, &mut StdRng::seed_from_u64(0))
                .unwrap()
        };

        assert_eq!(suggest(0).ranked.len(), 1);
        assert_eq!(suggest(99).ranked.len(), MAX_SUGGESTIONS);

        let ranked = suggest(3).ranked;
        assert_eq!(ranked.len(), 3);
        assert!(ranked.windows(2).all(|pair| pair[0].1 >= pair[1].1));

        let refs: Vec<&Word> = pool.iter().collect();
        let leading = frequency_score(&ranked[0].0, &refs);
        assert!(refs.iter().take(100).all(|w| frequency_score(w, &refs) <= leading));
    }

    #[test]
    fn suggestion_is_consistent_with_history() {
        let pool = embedded_words();
        let answer = Word::new("llama").unwrap();
        let history = vec![GuessRecord::scored(Word::new("arose").unwrap(), &answer)];

        let result =
            suggest_next(&pool, StrategyType::default(), &history, 3, &mut StdRng::seed_from_u64(0))
                .unwrap();

        let candidates = crate::solver::filter_candidates(&pool, &history);
        assert!(candidates.contains(&&result.guess));
        assert_eq!(result.remaining, candidates.len());
        assert!(result.confidence > 0.0 && result.confidence <= 1.0);
    }

    #[test]
    fn contradictory_history_is_an_error() {
        let pool = embedded_words();
        let history = parse_history(&["arose:22222", "slate:22222"]).unwrap();
        assert!(
            suggest_next(&pool, StrategyType::default(), &history, 3, &mut StdRng::seed_from_u64(0))
                .is_err()
        );
    }
}
