//! Simulated annealing over entropy scores

use super::{DEFAULT_ENTROPY_SAMPLE, DEFAULT_START_WINDOW, random_start, sample_neighbors};
use crate::core::Word;
use crate::solver::scoring::entropy_score;
use crate::solver::strategy::Strategy;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Simulated annealing with multiplicative cooling
///
/// Better neighbors are always accepted; worse ones with probability
/// `exp(Δ / T)`. The best word seen over the whole run is returned, which
/// need not be the final accepted one.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedAnnealing {
    pub initial_temperature: f64,
    pub cooling_rate: f64,
    pub min_temperature: f64,
    pub max_iterations: usize,
    pub neighbor_sample: usize,
    pub start_window: usize,
    pub entropy_sample: usize,
}

/// Result of one annealing run
#[derive(Debug, Clone, Copy)]
pub struct AnnealOutcome<'a> {
    pub best: &'a Word,
    pub best_score: f64,
    pub start_score: f64,
    pub iterations: usize,
    pub final_temperature: f64,
}

impl Default for SimulatedAnnealing {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            cooling_rate: 0.85,
            min_temperature: 1.0,
            max_iterations: 50,
            neighbor_sample: 20,
            start_window: DEFAULT_START_WINDOW,
            entropy_sample: DEFAULT_ENTROPY_SAMPLE,
        }
    }
}

impl SimulatedAnnealing {
    /// Anneal from a given start word
    pub fn anneal_from<'a, R: Rng + ?Sized>(
        &self,
        start: &'a Word,
        candidates: &[&'a Word],
        rng: &mut R,
    ) -> AnnealOutcome<'a> {
        let mut temperature = self.initial_temperature;
        let mut current = start;
        let mut current_score = entropy_score(current, candidates, self.entropy_sample);
        let start_score = current_score;
        let mut best = current;
        let mut best_score = current_score;
        let mut iterations = 0;

        while temperature > self.min_temperature && iterations < self.max_iterations {
            iterations += 1;

            let neighbors = sample_neighbors(current, candidates, self.neighbor_sample, rng);
            let Some(&neighbor) = neighbors.choose(rng) else {
                break;
            };
            let neighbor_score = entropy_score(neighbor, candidates, self.entropy_sample);

            let delta = neighbor_score - current_score;
            let accepted = delta > 0.0 || rng.random::<f64>() < (delta / temperature).exp();

            if accepted {
                current = neighbor;
                current_score = neighbor_score;
                if current_score > best_score {
                    best = current;
                    best_score = current_score;
                }
            }

            log::trace!(
                "annealing: t={temperature:.2} {neighbor} Δ={delta:.3} accepted={accepted} best={best}"
            );
            temperature *= self.cooling_rate;
        }

        AnnealOutcome {
            best,
            best_score,
            start_score,
            iterations,
            final_temperature: temperature,
        }
    }
}

impl Strategy for SimulatedAnnealing {
    fn search<'a, R: Rng + ?Sized>(&self, candidates: &[&'a Word], rng: &mut R) -> &'a Word {
        let start = random_start(candidates, self.start_window, rng);
        self.anneal_from(start, candidates, rng).best
    }

    fn scored<'a>(&self, candidates: &[&'a Word]) -> Vec<(&'a Word, f64)> {
        candidates
            .iter()
            .map(|&word| (word, entropy_score(word, candidates, self.entropy_sample)))
            .collect()
    }
}
