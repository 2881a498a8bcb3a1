//! Guess selection strategies
//!
//! Defines the Strategy trait and the runtime-selectable wrapper.

use super::scoring::entropy_score;
use super::search::{
    BeamSearch, DEFAULT_ENTROPY_SAMPLE, HillClimbing, RandomPick, SimulatedAnnealing,
    SystematicSearch, opener,
};
use crate::core::{GuessRecord, Word};
use rand::Rng;
use std::fmt;

/// A policy for picking the next guess from the remaining candidates
///
/// Implementors provide [`search`](Strategy::search); callers use
/// [`select_guess`](Strategy::select_guess), which handles the cases every
/// policy shares before searching.
pub trait Strategy {
    /// Pick a word from a pool holding at least two candidates
    fn search<'a, R: Rng + ?Sized>(&self, candidates: &[&'a Word], rng: &mut R) -> &'a Word;

    /// The words this policy weighs, each with the score it optimizes
    ///
    /// Unsorted. Defaults to sampled entropy over every candidate.
    fn scored<'a>(&self, candidates: &[&'a Word]) -> Vec<(&'a Word, f64)> {
        candidates
            .iter()
            .map(|&word| (word, entropy_score(word, candidates, DEFAULT_ENTROPY_SAMPLE)))
            .collect()
    }

    /// Select the next guess
    ///
    /// - no candidates: `None` (callers should report this before asking)
    /// - one candidate: that candidate
    /// - empty history: the first opener present in the pool, if any
    /// - otherwise: [`search`](Strategy::search)
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        candidates: &[&'a Word],
        history: &[GuessRecord],
        rng: &mut R,
    ) -> Option<&'a Word> {
        match candidates {
            [] => None,
            [only] => Some(*only),
            _ => {
                if history.is_empty()
                    && let Some(word) = opener(candidates)
                {
                    return Some(word);
                }
                Some(self.search(candidates, rng))
            }
        }
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy)]
pub enum StrategyType {
    /// Best frequency score, deterministic
    Systematic(SystematicSearch),
    /// First-improvement local search on entropy
    HillClimbing(HillClimbing),
    /// Entropy search with probabilistic acceptance of worse moves
    SimulatedAnnealing(SimulatedAnnealing),
    /// Uniform random candidate
    Random(RandomPick),
    /// Coverage beam re-ranked by entropy
    Beam(BeamSearch),
}

impl Strategy for StrategyType {
    fn search<'a, R: Rng + ?Sized>(&self, candidates: &[&'a Word], rng: &mut R) -> &'a Word {
        match self {
            Self::Systematic(s) => s.search(candidates, rng),
            Self::HillClimbing(s) => s.search(candidates, rng),
            Self::SimulatedAnnealing(s) => s.search(candidates, rng),
            Self::Random(s) => s.search(candidates, rng),
            Self::Beam(s) => s.search(candidates, rng),
        }
    }

    fn scored<'a>(&self, candidates: &[&'a Word]) -> Vec<(&'a Word, f64)> {
        match self {
            Self::Systematic(s) => s.scored(candidates),
            Self::HillClimbing(s) => s.scored(candidates),
            Self::SimulatedAnnealing(s) => s.scored(candidates),
            Self::Random(s) => s.scored(candidates),
            Self::Beam(s) => s.scored(candidates),
        }
    }
}

impl StrategyType {
    /// Names accepted by [`from_name`](Self::from_name), canonical first
    pub const NAMES: [&'static str; 5] = [
        "systematic",
        "hill-climbing",
        "simulated-annealing",
        "random",
        "beam",
    ];

    /// Create strategy from name string
    ///
    /// Besides the canonical names, accepts `dfs` and `frequency` for
    /// systematic, `annealing` for simulated annealing, and `k-beam` and
    /// `entropy` for beam. Unknown names fall back to systematic.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "systematic" | "dfs" | "frequency" => Self::Systematic(SystematicSearch::default()),
            "hill-climbing" | "hill" => Self::HillClimbing(HillClimbing::default()),
            "simulated-annealing" | "annealing" => {
                Self::SimulatedAnnealing(SimulatedAnnealing::default())
            }
            "random" => Self::Random(RandomPick),
            "beam" | "k-beam" | "entropy" => Self::Beam(BeamSearch::default()),
            other => {
                log::warn!("unknown strategy '{other}', defaulting to systematic");
                Self::Systematic(SystematicSearch::default())
            }
        }
    }

    /// Canonical name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Systematic(_) => "systematic",
            Self::HillClimbing(_) => "hill-climbing",
            Self::SimulatedAnnealing(_) => "simulated-annealing",
            Self::Random(_) => "random",
            Self::Beam(_) => "beam",
        }
    }

    /// Whether the policy consumes randomness
    #[must_use]
    pub const fn is_randomized(&self) -> bool {
        matches!(
            self,
            Self::HillClimbing(_) | Self::SimulatedAnnealing(_) | Self::Random(_)
        )
    }

    /// One-line description for help output
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Systematic(_) => "Frequency-based scan of the leading candidates; reproducible",
            Self::HillClimbing(_) => "Greedy local search on entropy; fast, may stop at a local optimum",
            Self::SimulatedAnnealing(_) => {
                "Entropy search that accepts worse moves while hot to escape local optima"
            }
            Self::Random(_) => "Uniform pick among remaining candidates",
            Self::Beam(_) => "Letter-coverage beam re-ranked by entropy",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Systematic(SystematicSearch::default())
    }
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
