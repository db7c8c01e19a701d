//! Island terrain: fractal height map, radial island mask, water/ground
//! classification onto a host map, and post-placement cleanup.

pub mod cleanup;
mod classify;
mod config;
mod heightmap;

pub use classify::{PlacementStopped, classify, classify_height, place_tiles};
pub use config::IslandConfig;
pub use heightmap::{HeightField, apply_island_mask, build_height_map};
