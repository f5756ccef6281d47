//! Randomness behind a swappable source so spawns can be made deterministic.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// A uniform integer generator.
pub trait RandomSource: Send {
    /// A value uniformly distributed in `[0, max_exclusive)`. `max_exclusive` is never 0.
    fn next(&mut self, max_exclusive: usize) -> usize;
}

/// Thread-local RNG; the default for interactive play.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next(&mut self, max_exclusive: usize) -> usize {
        rand::rng().random_range(0..max_exclusive)
    }
}

/// Seeded RNG for reproducible games.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        SeededRandom {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next(&mut self, max_exclusive: usize) -> usize {
        self.rng.random_range(0..max_exclusive)
    }
}

/// Replays a fixed sequence of draws, each reduced modulo the requested
/// bound. Yields 0 once the script runs out.
#[derive(Debug, Default, Clone)]
pub struct ScriptedRandom {
    values: VecDeque<usize>,
}

impl ScriptedRandom {
    pub fn new<I: IntoIterator<Item = usize>>(values: I) -> Self {
        ScriptedRandom {
            values: values.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next(&mut self, max_exclusive: usize) -> usize {
        self.values.pop_front().unwrap_or(0) % max_exclusive
    }
}
