//! Random template selection.
//!
//! Template choice is uniform and unseeded by default. The source is injected
//! so callers and tests can make selection reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies template indices.
pub trait RandomSource {
    /// Return an index in `0..len`. Only called with `len > 0`.
    fn next_index(&mut self, len: usize) -> usize;
}

/// Uniform choice from the thread-local generator. Not reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Uniform choice from a seeded generator. Same seed, same sequence.
#[derive(Debug, Clone)]
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

impl RandomSource for SeededRandom {
    fn next_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Always picks the same position, wrapped to the set length.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedRandom {
    pub index: usize,
}

impl FixedRandom {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl RandomSource for FixedRandom {
    fn next_index(&mut self, len: usize) -> usize {
        self.index % len
    }
}

/// Pick one template. Returns `None` only for an empty set.
pub fn pick_template<'a>(templates: &[&'a str], rng: &mut dyn RandomSource) -> Option<&'a str> {
    if templates.is_empty() {
        return None;
    }
    let index = rng.next_index(templates.len()).min(templates.len() - 1);
    Some(templates[index])
}
