//! # Random Index Source
//!
//! The controller never touches a global RNG. It asks an injected
//! `RandomIndex` for a position in `0..len`, so tests can force the draw.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks an index uniformly from `0..len`. `len` is always at least 1.
pub trait RandomIndex {
    fn pick(&mut self, len: usize) -> usize;
}

/// Any `FnMut(len) -> index` works as a source.
impl<F> RandomIndex for F
where
    F: FnMut(usize) -> usize,
{
    fn pick(&mut self, len: usize) -> usize {
        self(len)
    }
}

/// Thread-local OS-seeded RNG.
#[derive(Debug, Default)]
pub struct ThreadRandom;

impl RandomIndex for ThreadRandom {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Reproducible draws for `--seed`.
#[derive(Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomIndex for SeededRandom {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Always returns the same index (clamped by the caller).
#[derive(Debug, Clone, Copy)]
pub struct FixedIndex(pub usize);

impl RandomIndex for FixedIndex {
    fn pick(&mut self, _len: usize) -> usize {
        self.0
    }
}

/// Seeded when a seed is configured, thread RNG otherwise.
pub fn from_seed(seed: Option<u64>) -> Box<dyn RandomIndex> {
    match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    }
}
