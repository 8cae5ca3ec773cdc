//! SplitMix64 generator
//!
//! A 64-bit counter passed through a fixed mixing function. Any seed,
//! including zero, gives a well-distributed stream, which is why this
//! generator is used to expand a single seed into the larger state arrays
//! of the shift-register generators.
//!
//! # Algorithm
//!
//! ```text
//! x += 0x9E3779B97F4A7C15
//! z  = (x ^ (x >> 30)) * 0xBF58476D1CE4E5B9
//! z  = (z ^ (z >> 27)) * 0x94D049BB133111EB
//! return z ^ (z >> 31)
//! ```
//!
//! All arithmetic wraps modulo 2^64. There is no jump for this generator.

use serde::{Deserialize, Serialize};

use super::{Generator, SeedableGenerator};

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;
const MIX_1: u64 = 0xBF58_476D_1CE4_E5B9;
const MIX_2: u64 = 0x94D0_49BB_1331_11EB;

/// SplitMix64 generator
///
/// # Example
/// ```
/// use xorshift_core_rs::{Generator, SplitMix64};
///
/// let mut rng = SplitMix64::new(0);
/// assert_eq!(rng.next_u64(), 0xe220a8397b1dcdaf);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SplitMix64 {
    /// Counter (any value is a valid state)
    x: u64,
}

impl SplitMix64 {
    /// Create a generator from a raw seed
    pub fn new(seed: u64) -> Self {
        Self { x: seed }
    }

    /// Current counter value
    pub fn get_state(&self) -> u64 {
        self.x
    }
}

impl From<u64> for SplitMix64 {
    fn from(seed: u64) -> Self {
        Self::new(seed)
    }
}

impl Generator for SplitMix64 {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.x = self.x.wrapping_add(GOLDEN_GAMMA);
        let mut z = self.x;
        z = (z ^ (z >> 30)).wrapping_mul(MIX_1);
        z = (z ^ (z >> 27)).wrapping_mul(MIX_2);
        z ^ (z >> 31)
    }
}

impl SeedableGenerator for SplitMix64 {
    const STATE_SIZE: usize = 1;
    type State = [u64; 1];

    fn from_state(state: [u64; 1]) -> Self {
        Self::new(state[0])
    }

    fn state(&self) -> [u64; 1] {
        [self.x]
    }
}
