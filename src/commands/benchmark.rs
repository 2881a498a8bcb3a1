//! Benchmark command
//!
//! Plays many independent self-play games in parallel and aggregates the
//! outcome. Every game gets its own generator seeded from the run seed and
//! the game's index, so a run is reproducible regardless of thread count.

use crate::core::Word;
use crate::solver::{KnownAnswer, SessionResult, SessionStatus, SolverError, StrategyType, run_session};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Benchmark settings
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    /// Number of answers for `pick_answers`
    pub count: usize,
    pub max_attempts: usize,
    pub seed: u64,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            count: 50,
            max_attempts: crate::solver::session::DEFAULT_MAX_ATTEMPTS,
            seed: 0,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub strategy: &'static str,
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub aborted: usize,
    /// Mean guesses over solved games
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Solved games keyed by guess count
    pub distribution: FxHashMap<usize, usize>,
    /// Answers that were not solved
    pub misses: Vec<Word>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Answers to play: a seeded sample of `count` pool words in pool order
#[must_use]
pub fn pick_answers(pool: &[Word], count: usize, seed: u64) -> Vec<Word> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut indices = rand::seq::index::sample(&mut rng, pool.len(), count.min(pool.len())).into_vec();
    indices.sort_unstable();
    indices.into_iter().map(|i| pool[i].clone()).collect()
}

/// Run the benchmark over `answers`
///
/// # Errors
///
/// Returns `SolverError::InvalidAttemptCap` if the cap is out of range.
pub fn run_benchmark(
    pool: &[Word],
    strategy: StrategyType,
    answers: &[Word],
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult, SolverError> {
    let pb = if config.show_progress {
        ProgressBar::new(answers.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .map_or_else(|_| ProgressStyle::default_bar(), |style| style.progress_chars("█▓▒░")),
    );
    pb.set_message(strategy.name());

    let start = Instant::now();
    let results: Vec<SessionResult> = answers
        .par_iter()
        .enumerate()
        .map(|(i, answer)| {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(i as u64));
            let mut source = KnownAnswer::new(answer.clone());
            let result = run_session(pool, strategy, config.max_attempts, &mut source, &mut rng);
            pb.inc(1);
            result
        })
        .collect::<Result<_, _>>()?;
    let duration = start.elapsed();

    pb.finish_with_message("Complete!");

    Ok(summarize(strategy, answers, &results, duration))
}

fn summarize(
    strategy: StrategyType,
    answers: &[Word],
    results: &[SessionResult],
    duration: Duration,
) -> BenchmarkResult {
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut misses = Vec::new();
    let mut aborted = 0;

    for (answer, result) in answers.iter().zip(results) {
        if result.solved {
            *distribution.entry(result.guess_count()).or_insert(0) += 1;
        } else {
            if result.status == SessionStatus::Aborted {
                aborted += 1;
            }
            misses.push(answer.clone());
        }
    }

    let solved: usize = distribution.values().sum();
    let total_guesses: usize = distribution.iter().map(|(guesses, n)| guesses * n).sum();
    let total_words = results.len();

    BenchmarkResult {
        strategy: strategy.name(),
        total_words,
        solved,
        failed: total_words - solved,
        aborted,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: distribution.keys().copied().min().unwrap_or(0),
        max_guesses: distribution.keys().copied().max().unwrap_or(0),
        distribution,
        misses,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
