//! Text seeds and the per-generation random state derived from them.
//!
//! A seed string that parses as a base-10 `u64` is used as-is; anything else
//! is hashed. The low 32 bits key the noise permutation, and the XOR of the
//! high and low halves seeds the general-purpose RNG.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::SimplexNoise;

/// A 64-bit generation seed resolved from user text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MapSeed(u64);

impl MapSeed {
    /// Resolve a seed from text.
    ///
    /// Surrounding whitespace is ignored for the numeric parse. Non-numeric
    /// (or out of range) text falls back to a SipHash of the original string.
    pub fn from_text(text: &str) -> Self {
        match text.trim().parse::<u64>() {
            Ok(value) => Self(value),
            Err(_) => {
                let mut hasher = DefaultHasher::new();
                text.hash(&mut hasher);
                Self(hasher.finish())
            }
        }
    }

    /// Wrap an already numeric seed.
    pub const fn from_u64(value: u64) -> Self {
        Self(value)
    }

    /// The full 64-bit value.
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Seed for the noise permutation table (low 32 bits).
    pub const fn noise_seed(self) -> u32 {
        (self.0 & 0xFFFF_FFFF) as u32
    }

    /// Seed for the general-purpose RNG (high half XOR low half).
    pub const fn rng_seed(self) -> u64 {
        (self.0 >> 32) ^ (self.0 & 0xFFFF_FFFF)
    }
}

impl std::fmt::Display for MapSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Noise table and RNG owned by exactly one generation call.
///
/// Build a fresh context per call; nothing carries over between generations.
#[derive(Debug)]
pub struct GenerationContext {
    seed: MapSeed,
    noise: SimplexNoise,
    rng: ChaCha8Rng,
}

impl GenerationContext {
    /// Build the noise table and RNG for `seed`.
    pub fn new(seed: MapSeed) -> Self {
        tracing::debug!(
            seed = seed.value(),
            noise_seed = seed.noise_seed(),
            "Seeding generation context"
        );
        Self {
            seed,
            noise: SimplexNoise::new(seed.noise_seed()),
            rng: ChaCha8Rng::seed_from_u64(seed.rng_seed()),
        }
    }

    /// Shorthand for `GenerationContext::new(MapSeed::from_text(text))`.
    pub fn from_text(text: &str) -> Self {
        Self::new(MapSeed::from_text(text))
    }

    pub fn seed(&self) -> MapSeed {
        self.seed
    }

    pub fn noise(&self) -> &SimplexNoise {
        &self.noise
    }

    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }
}

/// A fresh numeric seed string drawn from OS entropy.
pub fn random_seed() -> String {
    rand::random::<u64>().to_string()
}
