//! Next-guess search policies
//!
//! Every policy picks one word from a non-empty candidate pool:
//! - [`SystematicSearch`]: best frequency score among the first candidates
//! - [`HillClimbing`]: first-improvement local search on entropy
//! - [`SimulatedAnnealing`]: entropy search accepting worse moves while hot
//! - [`RandomPick`]: uniform choice
//! - [`BeamSearch`]: frequency beam re-ranked by entropy
//!
//! The shared preamble (sole candidate, opener list) lives on the
//! [`Strategy`](super::Strategy) trait, so these only run when a real
//! choice remains.

mod annealing;
mod beam;
mod hill_climbing;
mod random;
mod systematic;

pub use annealing::{AnnealOutcome, SimulatedAnnealing};
pub use beam::BeamSearch;
pub use hill_climbing::{ClimbOutcome, HillClimbing};
pub use random::RandomPick;
pub use systematic::SystematicSearch;

use crate::core::Word;
use rand::Rng;

/// High-coverage first guesses, tried in this order
pub const OPENERS: [&str; 5] = ["AROSE", "SLATE", "CRATE", "TRACE", "STARE"];

/// Candidates simulated per entropy score
pub const DEFAULT_ENTROPY_SAMPLE: usize = 200;

/// Leading candidates a randomized search may start from
pub const DEFAULT_START_WINDOW: usize = 10;

/// First opener present in `candidates`, if any
#[must_use]
pub fn opener<'a>(candidates: &[&'a Word]) -> Option<&'a Word> {
    OPENERS
        .iter()
        .find_map(|&opener| candidates.iter().copied().find(|w| w.text() == opener))
}

/// Random start word from the first `window` candidates
///
/// # Panics
/// Panics if `candidates` is empty.
pub(crate) fn random_start<'a, R: Rng + ?Sized>(
    candidates: &[&'a Word],
    window: usize,
    rng: &mut R,
) -> &'a Word {
    let bound = candidates.len().min(window).max(1);
    candidates[rng.random_range(0..bound)]
}

/// Up to `sample_size` distinct random candidates, excluding `current`
///
/// Returns an empty list when `current` is the only candidate, which callers
/// treat as "stay put".
pub(crate) fn sample_neighbors<'a, R: Rng + ?Sized>(
    current: &Word,
    candidates: &[&'a Word],
    sample_size: usize,
    rng: &mut R,
) -> Vec<&'a Word> {
    let amount = sample_size.min(candidates.len());
    rand::seq::index::sample(rng, candidates.len(), amount)
        .into_iter()
        .map(|i| candidates[i])
        .filter(|&w| w != current)
        .collect()
}
