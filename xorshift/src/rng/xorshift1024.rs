//! xorshift1024* generator
//!
//! Sixteen words of state used as a ring buffer. The cursor `p` marks the
//! head of the ring; each step combines the word at `p` with the one after
//! it, stores the result in the next slot and scrambles it with a
//! multiplication. Period 2^1024 - 1.
//!
//! # Critical Invariants
//!
//! - `p` is always in `[0, 16)`, including after deserialization
//! - Jump accumulates relative to `p` so it stays aligned with the ring

use serde::{Deserialize, Serialize};

use super::{warn_if_zero, Algorithm, Generator, GeneratorError, Jump, SeedableGenerator};

const WORDS: usize = 16;
const MASK: usize = WORDS - 1;
const MULTIPLIER: u64 = 1_181_783_497_276_652_981;

const JUMP: [u64; WORDS] = [
    0x8424_2f96_eca9_c41d,
    0xa3c6_5b87_76f9_6855,
    0x5b34_a39f_070b_5837,
    0x4489_affc_e4f3_1a1e,
    0x2ffe_eb0a_4831_6f40,
    0xdc2d_9891_fe68_c022,
    0x3659_132b_b12f_ea70,
    0xaac1_7d8e_fa43_cab8,
    0xc4cb_8155_9098_9b13,
    0x5ee9_7528_3d71_c93b,
    0x6915_48c8_6c1b_d540,
    0x7910_c41d_10a1_e6a5,
    0x0b5f_c645_63b3_e2a8,
    0x047f_7684_e9fc_949d,
    0xb991_81f2_d8f6_85ca,
    0x2846_00e3_f30e_38c3,
];

/// xorshift1024* generator
///
/// # Example
/// ```
/// use xorshift_core_rs::{seed_with_splitmix64, Generator, Xorshift1024};
///
/// let mut rng: Xorshift1024 = seed_with_splitmix64(42);
/// rng.next_u64();
/// assert_eq!(rng.cursor(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Xorshift1024Snapshot")]
pub struct Xorshift1024 {
    s: [u64; WORDS],
    p: usize,
}

/// Unvalidated serialized form; the cursor is checked on conversion
#[derive(Deserialize)]
struct Xorshift1024Snapshot {
    s: [u64; WORDS],
    p: usize,
}

impl TryFrom<Xorshift1024Snapshot> for Xorshift1024 {
    type Error = GeneratorError;

    fn try_from(snapshot: Xorshift1024Snapshot) -> Result<Self, Self::Error> {
        Self::from_parts(snapshot.s, snapshot.p)
    }
}

impl Xorshift1024 {
    /// Create a generator from an explicit state, cursor at 0
    pub fn new(state: [u64; WORDS]) -> Self {
        warn_if_zero(Algorithm::Xorshift1024, &state);
        Self { s: state, p: 0 }
    }

    /// Resume a generator from a saved state and cursor
    ///
    /// # Errors
    /// Returns [`GeneratorError::CursorOutOfRange`] if `cursor >= 16`.
    ///
    /// # Example
    /// ```
    /// use xorshift_core_rs::{seed_with_splitmix64, Generator, SeedableGenerator, Xorshift1024};
    ///
    /// let mut rng: Xorshift1024 = seed_with_splitmix64(7);
    /// rng.next_u64();
    ///
    /// let mut resumed = Xorshift1024::from_parts(rng.state(), rng.cursor()).unwrap();
    /// assert_eq!(resumed.next_u64(), rng.next_u64());
    /// ```
    pub fn from_parts(state: [u64; WORDS], cursor: usize) -> Result<Self, GeneratorError> {
        if cursor >= WORDS {
            return Err(GeneratorError::CursorOutOfRange(cursor));
        }
        warn_if_zero(Algorithm::Xorshift1024, &state);
        Ok(Self { s: state, p: cursor })
    }

    /// Index of the current head of the ring
    pub fn cursor(&self) -> usize {
        self.p
    }
}

impl Generator for Xorshift1024 {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let s0 = self.s[self.p];
        self.p = (self.p + 1) & MASK;
        let mut s1 = self.s[self.p];
        s1 ^= s1 << 31;
        self.s[self.p] = s1 ^ s0 ^ (s1 >> 11) ^ (s0 >> 30);
        self.s[self.p].wrapping_mul(MULTIPLIER)
    }
}

impl Jump for Xorshift1024 {
    /// Equivalent to 2^512 calls to `next_u64`
    fn jump(&mut self) {
        log::trace!("xorshift1024 jump from cursor {}", self.p);
        let mut t = [0u64; WORDS];
        for word in JUMP {
            for b in 0..64 {
                if word & (1u64 << b) != 0 {
                    for (j, acc) in t.iter_mut().enumerate() {
                        *acc ^= self.s[(j + self.p) & MASK];
                    }
                }
                self.next_u64();
            }
        }

        for (j, acc) in t.into_iter().enumerate() {
            self.s[(j + self.p) & MASK] = acc;
        }
    }
}

impl SeedableGenerator for Xorshift1024 {
    const STATE_SIZE: usize = WORDS;
    type State = [u64; WORDS];

    fn from_state(state: [u64; WORDS]) -> Self {
        Self::new(state)
    }

    /// Raw state words; pair with [`Xorshift1024::cursor`] to resume
    fn state(&self) -> [u64; WORDS] {
        self.s
    }
}
