//! Uniform random selection

use crate::core::Word;
use crate::solver::strategy::Strategy;
use rand::Rng;

/// Picks any remaining candidate with equal probability
///
/// A baseline for comparing the scored policies in benchmarks.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPick;

impl Strategy for RandomPick {
    fn search<'a, R: Rng + ?Sized>(&self, candidates: &[&'a Word], rng: &mut R) -> &'a Word {
        candidates[rng.random_range(0..candidates.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rustc_hash::FxHashSet;

    #[test]
    fn picks_spread_over_pool() {
        let pool: Vec<Word> = ["crate", "grate", "irate", "trace"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        let refs: Vec<&Word> = pool.iter().collect();
        let mut rng = StdRng::seed_from_u64(2);

        let seen: FxHashSet<&Word> = (0..200).map(|_| RandomPick.search(&refs, &mut rng)).collect();
        assert_eq!(seen.len(), refs.len());
    }
}
