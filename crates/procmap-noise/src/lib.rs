//! Seeded 2D coherent noise and the per-generation random state built from a text seed.

mod seed;
mod simplex;

pub use seed::{GenerationContext, MapSeed, random_seed};
pub use simplex::SimplexNoise;
