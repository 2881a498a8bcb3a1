//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod play;
pub mod solve;
pub mod suggest;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, pick_answers, run_benchmark};
pub use play::{PlaySummary, run_play, run_play_with};
pub use solve::{SolveConfig, SolveResult, SolveStep, solve_word};
pub use suggest::{MAX_SUGGESTIONS, SuggestResult, parse_history, suggest_next};

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Seeded generator when a seed is given, OS-seeded otherwise
#[must_use]
pub fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}
