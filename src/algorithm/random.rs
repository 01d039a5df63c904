//! Injectable sources of uniform random choice

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Picks one index among `candidates` options
///
/// Maze generation and endpoint placement draw every random decision
/// through this trait, so a scripted implementation makes them fully
/// reproducible. Any `FnMut(usize) -> usize` closure is a chooser.
///
/// Implementations must return a value below `candidates` whenever
/// `candidates > 0`. Callers never ask with zero candidates; out-of-range
/// answers are clamped by the callers.
pub trait Chooser {
    /// Choose an index in `0..candidates`
    fn choose(&mut self, candidates: usize) -> usize;
}

impl<F> Chooser for F
where
    F: FnMut(usize) -> usize,
{
    fn choose(&mut self, candidates: usize) -> usize {
        self(candidates)
    }
}

/// Uniform random chooser backed by a standard RNG
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a selector seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded when a seed is given, entropy-backed otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::new)
    }
}

impl Chooser for RandomSelector {
    fn choose(&mut self, candidates: usize) -> usize {
        if candidates <= 1 {
            return 0;
        }
        self.rng.random_range(0..candidates)
    }
}

/// Pick an element of `candidates` through `chooser`
///
/// Returns `None` only for an empty slice. An out-of-range answer from the
/// chooser is clamped to the last candidate.
pub fn pick<T: Copy>(chooser: &mut impl Chooser, candidates: &[T]) -> Option<T> {
    if candidates.is_empty() {
        return None;
    }
    let index = chooser.choose(candidates.len()).min(candidates.len() - 1);
    candidates.get(index).copied()
}
