//! xoroshiro128+ generator
//!
//! Rotate/shift/rotate update over two words (a=55, b=14, c=36), output is
//! the wrapping sum of both words before the update.

use serde::{Deserialize, Serialize};

use super::{warn_if_zero, Algorithm, Generator, Jump, SeedableGenerator};

const JUMP: [u64; 2] = [0xbeac_0467_eba5_facb, 0xd86b_048b_86aa_9922];

/// xoroshiro128+ generator
///
/// # Example
/// ```
/// use xorshift_core_rs::{seed_with_splitmix64, Generator, Jump, Xoroshiro128};
///
/// let mut rng: Xoroshiro128 = seed_with_splitmix64(42);
/// let mut other = rng;
/// other.jump(); // 2^64 steps ahead, no overlap with `rng`
/// assert_ne!(rng.next_u64(), other.next_u64());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Xoroshiro128 {
    s: [u64; 2],
}

impl Xoroshiro128 {
    /// Create a generator from an explicit state
    pub fn new(state: [u64; 2]) -> Self {
        warn_if_zero(Algorithm::Xoroshiro128, &state);
        Self { s: state }
    }
}

impl Generator for Xoroshiro128 {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let s0 = self.s[0];
        let mut s1 = self.s[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.s[0] = s0.rotate_left(55) ^ s1 ^ (s1 << 14);
        self.s[1] = s1.rotate_left(36);

        result
    }
}

impl Jump for Xoroshiro128 {
    fn jump(&mut self) {
        log::trace!("xoroshiro128 jump");
        let mut s0 = 0;
        let mut s1 = 0;
        for word in JUMP {
            for b in 0..64 {
                if word & (1u64 << b) != 0 {
                    s0 ^= self.s[0];
                    s1 ^= self.s[1];
                }
                self.next_u64();
            }
        }
        self.s = [s0, s1];
    }
}

impl SeedableGenerator for Xoroshiro128 {
    const STATE_SIZE: usize = 2;
    type State = [u64; 2];

    fn from_state(state: [u64; 2]) -> Self {
        Self::new(state)
    }

    fn state(&self) -> [u64; 2] {
        self.s
    }
}
