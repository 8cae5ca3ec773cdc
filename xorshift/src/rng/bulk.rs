//! Bulk generation helpers
//!
//! All helpers here pull from the exact generator they are given. Passing
//! `&mut rng` advances the caller's generator; to leave it untouched, pass
//! a copy explicitly.

use super::{seed_with_splitmix64, Generator, SeedableGenerator};

/// Endless iterator over a borrowed generator's outputs
///
/// Created by [`Generator::outputs`].
#[derive(Debug)]
pub struct Outputs<'a, G> {
    rng: &'a mut G,
}

impl<'a, G: Generator> Outputs<'a, G> {
    pub(crate) fn new(rng: &'a mut G) -> Self {
        Self { rng }
    }
}

impl<G: Generator> Iterator for Outputs<'_, G> {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        Some(self.rng.next_u64())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<G: Generator> std::iter::FusedIterator for Outputs<'_, G> {}

/// Collect exactly `count` successive outputs of `rng`
///
/// The generator is advanced by `count` steps.
///
/// # Example
/// ```
/// use xorshift_core_rs::{generate_n, Generator, SplitMix64};
///
/// let mut rng = SplitMix64::new(0);
/// let values = generate_n(&mut rng, 3);
/// assert_eq!(values.len(), 3);
///
/// let mut fresh = SplitMix64::new(0);
/// assert_eq!(values[0], fresh.next_u64());
/// ```
pub fn generate_n<G: Generator + ?Sized>(rng: &mut G, count: usize) -> Vec<u64> {
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        values.push(rng.next_u64());
    }
    values
}

/// Seed a `T` through SplitMix64 and return its first `count` outputs
pub fn run_with_splitmix64<T: SeedableGenerator>(seed: u64, count: usize) -> Vec<u64> {
    let mut rng: T = seed_with_splitmix64(seed);
    generate_n(&mut rng, count)
}

/// Build a `T` from an explicit state and return its first `count` outputs
pub fn run<T: SeedableGenerator>(state: T::State, count: usize) -> Vec<u64> {
    let mut rng = T::from_state(state);
    generate_n(&mut rng, count)
}
