//! xorshift128+ generator
//!
//! Two words of state, output is the wrapping sum of both words taken
//! before the update. Period 2^128 - 1.
//!
//! # Jump
//!
//! [`Jump::jump`] is equivalent to 2^64 calls to `next_u64`. Starting from
//! one seeded generator and jumping repeatedly yields 2^64 non-overlapping
//! subsequences.

use serde::{Deserialize, Serialize};

use super::{warn_if_zero, Algorithm, Generator, Jump, SeedableGenerator};

const JUMP: [u64; 2] = [0x8a5c_d789_635d_2dff, 0x121f_d215_5c47_2f96];

/// xorshift128+ generator
///
/// # Example
/// ```
/// use xorshift_core_rs::{Generator, Xorshift128};
///
/// let mut rng = Xorshift128::new([1, 2]);
/// assert_eq!(rng.next_u64(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Xorshift128 {
    s: [u64; 2],
}

impl Xorshift128 {
    /// Create a generator from an explicit state
    ///
    /// Prefer [`crate::seed_with_splitmix64`] over low-entropy seeds; an
    /// all-zero state produces nothing but zeros.
    pub fn new(state: [u64; 2]) -> Self {
        warn_if_zero(Algorithm::Xorshift128, &state);
        Self { s: state }
    }
}

impl Generator for Xorshift128 {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let mut s1 = self.s[0];
        let s0 = self.s[1];
        let result = s0.wrapping_add(s1);
        self.s[0] = s0;
        s1 ^= s1 << 23;
        self.s[1] = s1 ^ s0 ^ (s1 >> 18) ^ (s0 >> 5);
        result
    }
}

impl Jump for Xorshift128 {
    fn jump(&mut self) {
        log::trace!("xorshift128 jump");
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

impl SeedableGenerator for Xorshift128 {
    const STATE_SIZE: usize = 2;
    type State = [u64; 2];

    fn from_state(state: [u64; 2]) -> Self {
        Self::new(state)
    }

    fn state(&self) -> [u64; 2] {
        self.s
    }
}
