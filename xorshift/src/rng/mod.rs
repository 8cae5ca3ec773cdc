//! Deterministic pseudo-random number generators
//!
//! Four generators from the xorshift family, plus the seeding and bulk
//! generation helpers that connect them.
//!
//! # Generators
//!
//! - [`SplitMix64`]: 64-bit counter mixer, used to expand a single seed
//! - [`Xorshift128`]: xorshift128+ (2 words, additive output)
//! - [`Xoroshiro128`]: xoroshiro128+ (2 words, additive output)
//! - [`Xorshift1024`]: xorshift1024* (16 words + cursor, multiplicative output)
//!
//! # Determinism
//!
//! A generator's behaviour is fully determined by its state. Two instances
//! holding the same state produce the same sequence forever. None of these
//! generators are cryptographically secure.

mod bulk;
mod seed;
mod splitmix;
mod xoroshiro128;
mod xorshift1024;
mod xorshift128;

pub use bulk::{generate_n, run, run_with_splitmix64, Outputs};
pub use seed::{seed_with, seed_with_splitmix64};
pub use splitmix::SplitMix64;
pub use xoroshiro128::Xoroshiro128;
pub use xorshift1024::Xorshift1024;
pub use xorshift128::Xorshift128;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised at the construction boundary of a generator
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("State length mismatch: expected {expected} words, got {actual}")]
    StateLength { expected: usize, actual: usize },

    #[error("Cursor {0} out of range [0, 16)")]
    CursorOutOfRange(usize),

    #[error("{0} does not support jump")]
    JumpUnsupported(Algorithm),

    #[error("Unknown algorithm: '{0}'")]
    UnknownAlgorithm(String),
}

/// A source of 64-bit pseudo-random values
///
/// This is the only capability the seeding adapter and the bulk helpers
/// need from a generator.
pub trait Generator {
    /// Advance the state and return the next value
    fn next_u64(&mut self) -> u64;

    /// Borrow the generator as an endless iterator of outputs
    ///
    /// # Example
    /// ```
    /// use xorshift_core_rs::{Generator, SplitMix64};
    ///
    /// let mut rng = SplitMix64::new(0);
    /// let first: Vec<u64> = rng.outputs().take(2).collect();
    /// assert_eq!(first, vec![0xe220a8397b1dcdaf, 0x6e789e6aa1b965f4]);
    /// ```
    fn outputs(&mut self) -> Outputs<'_, Self>
    where
        Self: Sized,
    {
        Outputs::new(self)
    }
}

impl<G: Generator + ?Sized> Generator for &mut G {
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }
}

/// A generator whose whole state is a fixed-size array of 64-bit words
pub trait SeedableGenerator: Generator + Sized {
    /// Number of 64-bit words in the state
    const STATE_SIZE: usize;

    /// Fixed-size state array, `[u64; STATE_SIZE]`
    type State: Copy + Default + AsRef<[u64]> + AsMut<[u64]>;

    /// Build a generator from an exact-size state array
    fn from_state(state: Self::State) -> Self;

    /// Copy of the current state words
    fn state(&self) -> Self::State;

    /// Build a generator from a slice, checking its length
    ///
    /// # Errors
    /// Returns [`GeneratorError::StateLength`] unless
    /// `words.len() == STATE_SIZE`.
    fn from_slice(words: &[u64]) -> Result<Self, GeneratorError> {
        let mut state = Self::State::default();
        if words.len() != state.as_ref().len() {
            return Err(GeneratorError::StateLength {
                expected: Self::STATE_SIZE,
                actual: words.len(),
            });
        }
        state.as_mut().copy_from_slice(words);
        Ok(Self::from_state(state))
    }

    /// Fill a fresh state with consecutive outputs of `rng`
    fn from_rng<R: Generator + ?Sized>(rng: &mut R) -> Self {
        let mut state = Self::State::default();
        for word in state.as_mut() {
            *word = rng.next_u64();
        }
        Self::from_state(state)
    }
}

/// Long-jump support for stream splitting
pub trait Jump {
    /// Advance the state by a fixed, algorithm-specific power of two steps
    fn jump(&mut self);
}

/// Identifies one of the generator algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    SplitMix64,
    Xorshift128,
    Xoroshiro128,
    Xorshift1024,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::SplitMix64,
        Algorithm::Xorshift128,
        Algorithm::Xoroshiro128,
        Algorithm::Xorshift1024,
    ];

    /// Number of state words for this algorithm
    pub fn state_size(self) -> usize {
        match self {
            Algorithm::SplitMix64 => SplitMix64::STATE_SIZE,
            Algorithm::Xorshift128 => Xorshift128::STATE_SIZE,
            Algorithm::Xoroshiro128 => Xoroshiro128::STATE_SIZE,
            Algorithm::Xorshift1024 => Xorshift1024::STATE_SIZE,
        }
    }

    pub fn supports_jump(self) -> bool {
        !matches!(self, Algorithm::SplitMix64)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::SplitMix64 => "splitmix64",
            Algorithm::Xorshift128 => "xorshift128",
            Algorithm::Xoroshiro128 => "xoroshiro128",
            Algorithm::Xorshift1024 => "xorshift1024",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str() == lowered)
            .ok_or_else(|| GeneratorError::UnknownAlgorithm(s.to_string()))
    }
}

/// Emit a warning for an all-zero shift-register state
///
/// Such a state is valid but the xorshift recurrences map it to itself, so
/// every output is zero.
pub(crate) fn warn_if_zero(algorithm: Algorithm, words: &[u64]) {
    if words.iter().all(|&w| w == 0) {
        log::warn!("{} constructed from an all-zero state; output will be constant", algorithm);
    }
}
