//! Seeding adapter
//!
//! The shift-register generators degrade badly when started from all-zero
//! or low-diversity state. The standard way to seed them is to expand a
//! single 64-bit value through SplitMix64 and use its first `STATE_SIZE`
//! outputs as the initial state.

use super::{Generator, SeedableGenerator, SplitMix64};

/// Build a `T` from the next `T::STATE_SIZE` outputs of `source`
///
/// The source is borrowed, not copied: the caller's generator is advanced
/// by exactly `T::STATE_SIZE` steps, so seeding twice from the same source
/// gives two different targets. To seed without moving the caller's
/// generator, pass a copy (`&mut source.clone()`).
///
/// # Example
/// ```
/// use xorshift_core_rs::{seed_with, Generator, SeedableGenerator, SplitMix64, Xorshift128};
///
/// let mut sm = SplitMix64::new(42);
/// let rng: Xorshift128 = seed_with(&mut sm);
///
/// let mut reference = SplitMix64::new(42);
/// assert_eq!(rng.state(), [reference.next_u64(), reference.next_u64()]);
/// assert_eq!(sm, reference);
/// ```
pub fn seed_with<T, S>(source: &mut S) -> T
where
    T: SeedableGenerator,
    S: Generator + ?Sized,
{
    log::trace!("seeding {}-word state from source generator", T::STATE_SIZE);
    T::from_rng(source)
}

/// Build a `T` from a single seed expanded through SplitMix64
///
/// # Example
/// ```
/// use xorshift_core_rs::{seed_with_splitmix64, Generator, Xorshift1024};
///
/// let mut a: Xorshift1024 = seed_with_splitmix64(12345);
/// let mut b: Xorshift1024 = seed_with_splitmix64(12345);
/// assert_eq!(a.next_u64(), b.next_u64());
/// ```
pub fn seed_with_splitmix64<T: SeedableGenerator>(seed: u64) -> T {
    let mut sm = SplitMix64::new(seed);
    seed_with(&mut sm)
}
