//! PyO3 wrapper for the generators
//!
//! Exposes a single `Generator` class backed by [`AnyGenerator`], so Python
//! code selects the algorithm by name.
//!
//! # Example (from Python)
//!
//! ```python
//! from xorshift_core_rs import Generator
//!
//! rng = Generator("xorshift1024", seed=12345, jumps=1)
//! values = rng.generate(20)
//!
//! words, cursor = rng.state()
//! resumed = Generator.from_state("xorshift1024", words, cursor)
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::config::{AnyGenerator, SeedSource, StreamConfig};
use crate::rng::{generate_n, Algorithm, Generator};

fn to_py_err(err: impl std::fmt::Display) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

/// Python wrapper for a runtime-selected generator
#[pyclass(name = "Generator")]
pub struct PyGenerator {
    inner: AnyGenerator,
}

#[pymethods]
impl PyGenerator {
    /// Create a generator
    ///
    /// # Arguments
    ///
    /// * `algorithm` - One of "splitmix64", "xorshift128", "xoroshiro128", "xorshift1024"
    /// * `seed` - Seed expanded through SplitMix64 (raw seed for splitmix64)
    /// * `jumps` - Number of jumps applied after seeding
    ///
    /// # Errors
    ///
    /// Raises ValueError for an unknown algorithm or jumps on splitmix64.
    #[new]
    #[pyo3(signature = (algorithm, seed, jumps = 0))]
    fn new(algorithm: &str, seed: u64, jumps: u32) -> PyResult<Self> {
        let algorithm: Algorithm = algorithm.parse().map_err(to_py_err)?;
        let config = StreamConfig {
            algorithm,
            seed: SeedSource::SplitMix64 { seed },
            jumps,
        };
        let inner = config.build().map_err(to_py_err)?;
        Ok(PyGenerator { inner })
    }

    /// Create a generator from explicit state words
    ///
    /// Pass the `cursor` returned by `state()` to resume an xorshift1024
    /// stream at the same position.
    #[staticmethod]
    #[pyo3(signature = (algorithm, words, cursor = None))]
    fn from_state(algorithm: &str, words: Vec<u64>, cursor: Option<usize>) -> PyResult<Self> {
        let algorithm: Algorithm = algorithm.parse().map_err(to_py_err)?;
        let config = StreamConfig {
            algorithm,
            seed: SeedSource::State { words, cursor },
            jumps: 0,
        };
        let inner = config.build().map_err(to_py_err)?;
        Ok(PyGenerator { inner })
    }

    /// Next 64-bit value
    fn next(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Jump ahead (not available for splitmix64)
    fn jump(&mut self) -> PyResult<()> {
        self.inner.jump().map_err(to_py_err)
    }

    /// List of the next `count` values
    fn generate(&mut self, count: usize) -> Vec<u64> {
        generate_n(&mut self.inner, count)
    }

    /// Current state as `(words, cursor)`; cursor is None except for xorshift1024
    fn state(&self) -> (Vec<u64>, Option<usize>) {
        (self.inner.state_words(), self.inner.cursor())
    }

    #[getter]
    fn algorithm(&self) -> String {
        self.inner.algorithm().to_string()
    }
}
