//! Tie-break source for deadlocked runoff rounds
//!
//! Resolution is deterministic except for the full-deadlock draw. Isolating
//! that one draw behind a trait keeps resolver behavior reproducible: tests
//! and demos inject a seeded or fixed source, production uses the thread RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform choice among deadlocked candidates
pub trait TieBreak {
    /// Pick an index in `0..len`; `len` is always at least 1
    fn choose(&mut self, len: usize) -> usize;
}

/// Production tie-break backed by the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngTieBreak;

impl TieBreak for ThreadRngTieBreak {
    fn choose(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Seedable tie-break for reproducible resolution
#[derive(Debug, Clone)]
pub struct SeededTieBreak {
    rng: StdRng,
}

impl SeededTieBreak {
    /// Create a tie-break source from a fixed seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl TieBreak for SeededTieBreak {
    fn choose(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Tie-break that always selects the same slot (clamped to range)
///
/// Useful in tests that need a known deadlock winner.
#[derive(Debug, Clone, Copy)]
pub struct FixedTieBreak(pub usize);

impl TieBreak for FixedTieBreak {
    fn choose(&mut self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}
