//! Where secret values come from.
//!
//! In play the secret comes from a `rand` generator. Tests and replays
//! inject a scripted source instead.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Source of secret values.
pub trait SecretSource {
    /// Draw a value uniformly from `0..=range_top`.
    fn draw(&mut self, range_top: u32) -> u32;
}

/// Secret source backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomSecret<R> {
    rng: R,
}

impl<R: Rng> RandomSecret<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSecret<StdRng> {
    /// Reproducible source: the same seed yields the same secrets.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> SecretSource for RandomSecret<R> {
    fn draw(&mut self, range_top: u32) -> u32 {
        self.rng.random_range(0..=range_top)
    }
}

/// Replays a fixed list of secrets, clamped to the requested range.
///
/// Once the script runs out the last value repeats; an empty script
/// always yields 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSecret {
    queue: VecDeque<u32>,
    last: u32,
}

impl ScriptedSecret {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            queue: values.into_iter().collect(),
            last: 0,
        }
    }
}

impl SecretSource for ScriptedSecret {
    fn draw(&mut self, range_top: u32) -> u32 {
        if let Some(next) = self.queue.pop_front() {
            self.last = next;
        }
        self.last.min(range_top)
    }
}
