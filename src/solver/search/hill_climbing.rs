//! Greedy local search over entropy scores

use super::{DEFAULT_ENTROPY_SAMPLE, DEFAULT_START_WINDOW, random_start, sample_neighbors};
use crate::core::Word;
use crate::solver::scoring::entropy_score;
use crate::solver::strategy::Strategy;
use rand::Rng;

/// First-improvement hill climbing
///
/// Starts from a random early candidate. Each iteration samples random
/// neighbors and moves to the first one that scores strictly higher. Stops
/// when a full sample holds no improvement or the iteration cap is hit.
#[derive(Debug, Clone, Copy)]
pub struct HillClimbing {
    pub start_window: usize,
    pub neighbor_sample: usize,
    pub max_iterations: usize,
    pub entropy_sample: usize,
}

/// Where a climb ended up
#[derive(Debug, Clone, Copy)]
pub struct ClimbOutcome<'a> {
    pub word: &'a Word,
    pub score: f64,
    pub start_score: f64,
    pub moves: usize,
}

impl Default for HillClimbing {
    fn default() -> Self {
        Self {
            start_window: DEFAULT_START_WINDOW,
            neighbor_sample: 30,
            max_iterations: 20,
            entropy_sample: DEFAULT_ENTROPY_SAMPLE,
        }
    }
}

impl HillClimbing {
    /// Climb from a given start word
    pub fn climb_from<'a, R: Rng + ?Sized>(
        &self,
        start: &'a Word,
        candidates: &[&'a Word],
        rng: &mut R,
    ) -> ClimbOutcome<'a> {
        let mut current = start;
        let mut current_score = entropy_score(current, candidates, self.entropy_sample);
        let start_score = current_score;
        let mut moves = 0;

        for iteration in 0..self.max_iterations {
            let improvement = sample_neighbors(current, candidates, self.neighbor_sample, rng)
                .into_iter()
                .map(|neighbor| (neighbor, entropy_score(neighbor, candidates, self.entropy_sample)))
                .find(|&(_, score)| score > current_score);

            let Some((neighbor, score)) = improvement else {
                log::trace!("hill climbing: local optimum after {iteration} iterations");
                break;
            };

            log::trace!("hill climbing: {current} ({current_score:.3}) -> {neighbor} ({score:.3})");
            current = neighbor;
            current_score = score;
            moves += 1;
        }

        ClimbOutcome {
            word: current,
            score: current_score,
            start_score,
            moves,
        }
    }
}

impl Strategy for HillClimbing {
    fn search<'a, R: Rng + ?Sized>(&self, candidates: &[&'a Word], rng: &mut R) -> &'a Word {
        let start = random_start(candidates, self.start_window, rng);
        self.climb_from(start, candidates, rng).word
    }

    fn scored<'a>(&self, candidates: &[&'a Word]) -> Vec<(&'a Word, f64)> {
        candidates
            .iter()
            .map(|&word| (word, entropy_score(word, candidates, self.entropy_sample)))
            .collect()
    }
}
