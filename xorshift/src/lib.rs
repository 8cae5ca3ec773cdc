//! Xorshift Core - Rust Engine
//!
//! Deterministic pseudo-random number generators from the xorshift family.
//!
//! # Architecture
//!
//! - **rng**: Generators (SplitMix64, xorshift128+, xoroshiro128+,
//!   xorshift1024*), the seeding adapter, and bulk generation helpers
//! - **config**: Declarative stream configuration and runtime-selected generators
//!
//! # Critical Invariants
//!
//! 1. All arithmetic wraps modulo 2^64; outputs are bit-exact with the
//!    reference recurrences
//! 2. Same state produces the same sequence (determinism)
//! 3. State arrays have a fixed length per generator (`STATE_SIZE`)
//! 4. FFI boundary is minimal and safe
//!
//! These generators are not cryptographically secure.

// Module declarations
pub mod config;
pub mod rng;

// Re-exports for convenience
pub use config::{AnyGenerator, ConfigError, SeedSource, StreamConfig};
pub use rng::{
    generate_n, run, run_with_splitmix64, seed_with, seed_with_splitmix64, Algorithm, Generator,
    GeneratorError, Jump, Outputs, SeedableGenerator, SplitMix64, Xoroshiro128, Xorshift1024,
    Xorshift128,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn xorshift_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::PyGenerator>()?;
    Ok(())
}
