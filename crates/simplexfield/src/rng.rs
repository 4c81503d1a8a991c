//! Seeded integer sources used to shuffle the permutation table.
//!
//! The table builder only ever asks for bounded integers, so any engine that
//! can be seeded from a 64-bit value and answer `next_bounded_int` will do.
//! Bit-exact reproducibility of a table across implementations depends on the
//! engine *and* on the bounded-draw algorithm, so both are pinned here:
//! [`Mt64Source`] is the default and matches the reference MT19937-64.

use std::fmt;
use std::str::FromStr;

use rand::{Rng, SeedableRng};
use rand_mt::Mt64;
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::NoiseError;

/// A 64-bit generator seed.
///
/// Seeds are signed so that negative values round-trip; engines consume the
/// two's-complement bit pattern via [`Seed::as_u64`]. Text and JSON both
/// accept unsigned values up to `u64::MAX`, which alias the same bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Seed(pub i64);

impl<'de> Deserialize<'de> for Seed {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawSeed {
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawSeed::deserialize(deserializer)? {
            RawSeed::Signed(v) => Seed(v),
            RawSeed::Unsigned(v) => Seed::from(v),
        })
    }
}

impl Seed {
    /// The raw two's-complement bits of the seed.
    #[inline]
    pub fn as_u64(self) -> u64 {
        self.0 as u64
    }
}

impl From<i64> for Seed {
    fn from(value: i64) -> Self {
        Seed(value)
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Seed(value as i64)
    }
}

impl From<u32> for Seed {
    fn from(value: u32) -> Self {
        Seed(i64::from(value))
    }
}

impl From<i32> for Seed {
    fn from(value: i32) -> Self {
        Seed(i64::from(value))
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Seed {
    type Err = NoiseError;

    /// Parse a decimal seed. Accepts the full `i64` range plus unsigned
    /// values up to `u64::MAX`, which are reinterpreted bitwise.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NoiseError::invalid("seed must not be empty"));
        }
        if let Ok(v) = s.parse::<i64>() {
            return Ok(Seed(v));
        }
        if let Ok(v) = s.parse::<u64>() {
            return Ok(Seed::from(v));
        }
        Err(NoiseError::invalid(format!(
            "seed '{}' is not a 64-bit integer",
            s
        )))
    }
}

/// A seeded pseudo-random integer source.
pub trait SeededIntSource {
    /// Create a source seeded with `seed`.
    fn from_seed(seed: Seed) -> Self
    where
        Self: Sized;

    /// Draw an integer uniformly from `[0, bound)`. `bound` must be non-zero.
    fn next_bounded_int(&mut self, bound: u32) -> u32;
}

/// 64-bit Mersenne Twister (MT19937-64).
///
/// Bounded draws use threshold rejection over full 64-bit words: with
/// `threshold = 2^64 mod bound`, words below the threshold are discarded and
/// the first accepted word is reduced `mod bound`.
#[derive(Clone)]
pub struct Mt64Source {
    inner: Mt64,
}

impl SeededIntSource for Mt64Source {
    fn from_seed(seed: Seed) -> Self {
        Self {
            inner: Mt64::new(seed.as_u64()),
        }
    }

    fn next_bounded_int(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0, "bound must be non-zero");
        let bound = u64::from(bound.max(1));
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let v = self.inner.next_u64();
            if v >= threshold {
                return (v % bound) as u32;
            }
        }
    }
}

/// PCG32 source, for callers that only need in-process determinism.
#[derive(Clone)]
pub struct Pcg32Source {
    inner: Pcg32,
}

impl SeededIntSource for Pcg32Source {
    fn from_seed(seed: Seed) -> Self {
        Self {
            inner: Pcg32::seed_from_u64(seed.as_u64()),
        }
    }

    #[inline]
    fn next_bounded_int(&mut self, bound: u32) -> u32 {
        self.inner.gen_range(0..bound.max(1))
    }
}

/// Runtime choice of seeded integer source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// MT19937-64; the pinned engine for cross-implementation tables.
    #[default]
    Mt64,
    /// PCG32 via `rand_pcg`.
    Pcg32,
}

impl Engine {
    pub fn as_str(&self) -> &'static str {
        match self {
            Engine::Mt64 => "mt64",
            Engine::Pcg32 => "pcg32",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Engine {
    type Err = NoiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mt64" => Ok(Engine::Mt64),
            "pcg32" => Ok(Engine::Pcg32),
            other => Err(NoiseError::invalid(format!(
                "unknown engine '{}' (expected mt64 or pcg32)",
                other
            ))),
        }
    }
}
