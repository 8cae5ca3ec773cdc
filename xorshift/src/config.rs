//! Stream configuration
//!
//! Describes a generator stream declaratively (algorithm, seed source,
//! number of jumps) so callers can build one from deserialized data without
//! naming the concrete generator type.
//!
//! # Example
//! ```
//! use xorshift_core_rs::{Algorithm, Generator, SeedSource, StreamConfig};
//!
//! let config = StreamConfig {
//!     algorithm: Algorithm::Xorshift1024,
//!     seed: SeedSource::SplitMix64 { seed: 12345 },
//!     jumps: 2,
//! };
//! let mut rng = config.build().unwrap();
//! let value = rng.next_u64();
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rng::{
    seed_with_splitmix64, Algorithm, Generator, GeneratorError, Jump, SeedableGenerator,
    SplitMix64, Xoroshiro128, Xorshift1024, Xorshift128,
};

/// Errors from validating or building a [`StreamConfig`]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

/// Where a stream's initial state comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SeedSource {
    /// Expand a single value through SplitMix64 (recommended)
    ///
    /// For the SplitMix64 algorithm itself the value is used as the raw seed.
    #[serde(rename = "splitmix64")]
    SplitMix64 { seed: u64 },

    /// Explicit state words; length must equal the algorithm's state size
    ///
    /// `cursor` is the xorshift1024* ring head (defaults to 0) and is
    /// rejected for every other algorithm.
    State {
        words: Vec<u64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cursor: Option<usize>,
    },
}

/// Declarative description of a generator stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamConfig {
    /// Generator algorithm
    pub algorithm: Algorithm,

    /// Initial state source
    pub seed: SeedSource,

    /// Number of jumps applied after seeding (0 = none)
    #[serde(default)]
    pub jumps: u32,
}

impl StreamConfig {
    /// Stream seeded through SplitMix64 with no jumps
    pub fn new(algorithm: Algorithm, seed: u64) -> Self {
        Self {
            algorithm,
            seed: SeedSource::SplitMix64 { seed },
            jumps: 0,
        }
    }

    /// Check the configuration without building anything
    ///
    /// # Errors
    /// - `InvalidConfig` if jumps are requested for an algorithm without jump
    /// - `InvalidConfig` if a cursor is given for an algorithm without one
    /// - `Generator(StateLength)` if explicit state words have the wrong length
    /// - `Generator(CursorOutOfRange)` if the cursor is not in `[0, 16)`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jumps > 0 && !self.algorithm.supports_jump() {
            return Err(ConfigError::InvalidConfig(format!(
                "jumps must be 0 for {} (got {})",
                self.algorithm, self.jumps
            )));
        }

        if let SeedSource::State { words, cursor } = &self.seed {
            let expected = self.algorithm.state_size();
            if words.len() != expected {
                return Err(GeneratorError::StateLength {
                    expected,
                    actual: words.len(),
                }
                .into());
            }

            match (self.algorithm, *cursor) {
                (_, None) => {}
                (Algorithm::Xorshift1024, Some(p)) if p < expected => {}
                (Algorithm::Xorshift1024, Some(p)) => {
                    return Err(GeneratorError::CursorOutOfRange(p).into())
                }
                (algorithm, Some(_)) => {
                    return Err(ConfigError::InvalidConfig(format!(
                        "cursor is only valid for xorshift1024 (got {})",
                        algorithm
                    )))
                }
            }
        }

        Ok(())
    }

    /// Validate and build the generator, then apply `jumps`
    pub fn build(&self) -> Result<AnyGenerator, ConfigError> {
        self.validate()?;

        log::debug!(
            "building {} stream ({}), {} jump(s)",
            self.algorithm,
            match self.seed {
                SeedSource::SplitMix64 { .. } => "splitmix64 seeding",
                SeedSource::State { .. } => "explicit state",
            },
            self.jumps
        );

        let mut rng = match self.algorithm {
            Algorithm::SplitMix64 => AnyGenerator::SplitMix64(match &self.seed {
                SeedSource::SplitMix64 { seed } => SplitMix64::new(*seed),
                SeedSource::State { words, .. } => SplitMix64::from_slice(words)?,
            }),
            Algorithm::Xorshift128 => AnyGenerator::Xorshift128(self.seeded()?),
            Algorithm::Xoroshiro128 => AnyGenerator::Xoroshiro128(self.seeded()?),
            Algorithm::Xorshift1024 => AnyGenerator::Xorshift1024(match &self.seed {
                SeedSource::State {
                    words,
                    cursor: Some(p),
                } => {
                    let rng: Xorshift1024 = Xorshift1024::from_slice(words)?;
                    Xorshift1024::from_parts(rng.state(), *p)?
                }
                _ => self.seeded()?,
            }),
        };

        for _ in 0..self.jumps {
            rng.jump()?;
        }

        Ok(rng)
    }

    fn seeded<T: SeedableGenerator>(&self) -> Result<T, GeneratorError> {
        match &self.seed {
            SeedSource::SplitMix64 { seed } => Ok(seed_with_splitmix64(*seed)),
            SeedSource::State { words, .. } => T::from_slice(words),
        }
    }
}

/// Any of the supported generators, selected at runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "lowercase")]
pub enum AnyGenerator {
    SplitMix64(SplitMix64),
    Xorshift128(Xorshift128),
    Xoroshiro128(Xoroshiro128),
    Xorshift1024(Xorshift1024),
}

impl AnyGenerator {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            AnyGenerator::SplitMix64(_) => Algorithm::SplitMix64,
            AnyGenerator::Xorshift128(_) => Algorithm::Xorshift128,
            AnyGenerator::Xoroshiro128(_) => Algorithm::Xoroshiro128,
            AnyGenerator::Xorshift1024(_) => Algorithm::Xorshift1024,
        }
    }

    /// Jump the underlying generator
    ///
    /// # Errors
    /// Returns [`GeneratorError::JumpUnsupported`] for SplitMix64.
    pub fn jump(&mut self) -> Result<(), GeneratorError> {
        match self {
            AnyGenerator::SplitMix64(_) => {
                return Err(GeneratorError::JumpUnsupported(Algorithm::SplitMix64))
            }
            AnyGenerator::Xorshift128(rng) => rng.jump(),
            AnyGenerator::Xoroshiro128(rng) => rng.jump(),
            AnyGenerator::Xorshift1024(rng) => rng.jump(),
        }
        Ok(())
    }

    /// Ring cursor, for xorshift1024* only
    pub fn cursor(&self) -> Option<usize> {
        match self {
            AnyGenerator::Xorshift1024(rng) => Some(rng.cursor()),
            _ => None,
        }
    }

    /// Seed source that rebuilds this generator at its current position
    ///
    /// # Example
    /// ```
    /// use xorshift_core_rs::{generate_n, Algorithm, StreamConfig};
    ///
    /// let mut rng = StreamConfig::new(Algorithm::Xorshift1024, 8).build().unwrap();
    /// generate_n(&mut rng, 3);
    ///
    /// let config = StreamConfig {
    ///     seed: rng.seed_source(),
    ///     ..StreamConfig::new(Algorithm::Xorshift1024, 0)
    /// };
    /// let mut restored = config.build().unwrap();
    /// assert_eq!(generate_n(&mut restored, 3), generate_n(&mut rng, 3));
    /// ```
    pub fn seed_source(&self) -> SeedSource {
        SeedSource::State {
            words: self.state_words(),
            cursor: self.cursor(),
        }
    }

    /// State words of the underlying generator
    ///
    /// For xorshift1024* pair these with [`AnyGenerator::cursor`]; the words
    /// alone do not fix the stream position.
    pub fn state_words(&self) -> Vec<u64> {
        match self {
            AnyGenerator::SplitMix64(rng) => rng.state().to_vec(),
            AnyGenerator::Xorshift128(rng) => rng.state().to_vec(),
            AnyGenerator::Xoroshiro128(rng) => rng.state().to_vec(),
            AnyGenerator::Xorshift1024(rng) => rng.state().to_vec(),
        }
    }
}

impl Generator for AnyGenerator {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        match self {
            AnyGenerator::SplitMix64(rng) => rng.next_u64(),
            AnyGenerator::Xorshift128(rng) => rng.next_u64(),
            AnyGenerator::Xoroshiro128(rng) => rng.next_u64(),
            AnyGenerator::Xorshift1024(rng) => rng.next_u64(),
        }
    }
}
