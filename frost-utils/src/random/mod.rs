//! Seeded random sources.
//!
//! Both generators reproduce the sequences of their Java counterparts, so a
//! decoration pass driven by the same seed places the same snow depths.

use enum_dispatch::enum_dispatch;
use serde::Deserialize;

pub mod legacy_random;
pub mod xoroshiro;

pub use legacy_random::{LegacyRandom, LegacyRandomSplitter};
pub use xoroshiro::{Xoroshiro, XoroshiroSplitter};

/// A source of uniformly distributed pseudo random numbers.
pub trait Random {
    /// Creates an independent generator seeded from this one.
    fn fork(&mut self) -> Self
    where
        Self: Sized;

    /// Returns a uniformly distributed `i32`.
    fn next_i32(&mut self) -> i32;

    /// Returns a value in `[0, bound)`. `bound` must be positive.
    fn next_i32_bounded(&mut self, bound: i32) -> i32;

    /// Returns a uniformly distributed `i64`.
    fn next_i64(&mut self) -> i64;

    /// Returns a value in `[min, max]`.
    fn next_i32_between(&mut self, min: i32, max: i32) -> i32 {
        self.next_i32_bounded(max - min + 1) + min
    }

    /// Returns a value in `[min, max)`.
    fn next_i32_between_exclusive(&mut self, min: i32, max: i32) -> i32 {
        min + self.next_i32_bounded(max - min)
    }

    /// Creates a splitter that derives generators from block positions.
    fn next_positional(&mut self) -> RandomSplitter;
}

/// Derives independent random sources for positions.
#[enum_dispatch]
pub trait PositionalRandom {
    /// A random source for the given block position.
    fn at(&self, x: i32, y: i32, z: i32) -> RandomSource;

    /// A random source for an explicit seed.
    fn with_seed(&self, seed: u64) -> RandomSource;
}

/// The generator algorithms available to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RandomKind {
    /// The 48 bit linear congruential generator of `java.util.Random`.
    #[default]
    Legacy,
    /// Xoroshiro128++.
    Xoroshiro,
}

/// A random source of either kind.
pub enum RandomSource {
    /// See [`LegacyRandom`].
    Legacy(LegacyRandom),
    /// See [`Xoroshiro`].
    Xoroshiro(Xoroshiro),
}

impl RandomSource {
    /// Creates a source of the given kind from a seed.
    #[must_use]
    pub fn from_seed(kind: RandomKind, seed: u64) -> Self {
        match kind {
            RandomKind::Legacy => Self::Legacy(LegacyRandom::from_seed(seed)),
            RandomKind::Xoroshiro => Self::Xoroshiro(Xoroshiro::from_seed(seed)),
        }
    }
}

impl Random for RandomSource {
    fn fork(&mut self) -> Self {
        match self {
            Self::Legacy(random) => Self::Legacy(random.fork()),
            Self::Xoroshiro(random) => Self::Xoroshiro(random.fork()),
        }
    }

    fn next_i32(&mut self) -> i32 {
        match self {
            Self::Legacy(random) => random.next_i32(),
            Self::Xoroshiro(random) => random.next_i32(),
        }
    }

    fn next_i32_bounded(&mut self, bound: i32) -> i32 {
        match self {
            Self::Legacy(random) => random.next_i32_bounded(bound),
            Self::Xoroshiro(random) => random.next_i32_bounded(bound),
        }
    }

    fn next_i64(&mut self) -> i64 {
        match self {
            Self::Legacy(random) => random.next_i64(),
            Self::Xoroshiro(random) => random.next_i64(),
        }
    }

    fn next_positional(&mut self) -> RandomSplitter {
        match self {
            Self::Legacy(random) => random.next_positional(),
            Self::Xoroshiro(random) => random.next_positional(),
        }
    }
}

/// A positional splitter of either kind.
#[enum_dispatch(PositionalRandom)]
pub enum RandomSplitter {
    /// See [`LegacyRandomSplitter`].
    Legacy(LegacyRandomSplitter),
    /// See [`XoroshiroSplitter`].
    Xoroshiro(XoroshiroSplitter),
}

/// Hashes a block position into a seed, matching vanilla's `Mth.getSeed`.
#[must_use]
pub fn get_seed(x: i32, y: i32, z: i32) -> i64 {
    let l = i64::from(x.wrapping_mul(3_129_871))
        ^ i64::from(z).wrapping_mul(116_129_781)
        ^ i64::from(y);
    let l = l
        .wrapping_mul(l)
        .wrapping_mul(42_317_861)
        .wrapping_add(l.wrapping_mul(11));
    l >> 16
}

/// Turns a textual world seed into a numeric one.
///
/// Numeric strings are used as is, anything else is hashed the way
/// `String.hashCode` does it. An empty string yields `None`.
#[must_use]
pub fn parse_seed(seed: &str) -> Option<u64> {
    let seed = seed.trim();
    if seed.is_empty() {
        return None;
    }
    if let Ok(value) = seed.parse::<i64>() {
        return Some(value as u64);
    }
    let mut hash = 0i32;
    for unit in seed.encode_utf16() {
        hash = hash.wrapping_mul(31).wrapping_add(i32::from(unit));
    }
    Some(i64::from(hash) as u64)
}
