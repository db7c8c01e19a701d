use procmap_map::ItemId;
use serde::{Deserialize, Serialize};

/// Parameters for island generation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IslandConfig {
    /// Multiplier applied to tile coordinates before sampling noise.
    /// Smaller values give broader landmasses. Default: 0.01.
    pub noise_scale: f64,
    /// Number of fBm octaves, 1 through 8. Default: 4.
    pub noise_octaves: u32,
    /// Amplitude multiplier per octave. Default: 0.5.
    pub noise_persistence: f64,
    /// Frequency multiplier per octave. Default: 2.0.
    pub noise_lacunarity: f64,
    /// Island radius as a fraction of half the shorter side, in (0, 1].
    /// Default: 0.8.
    pub island_size: f64,
    /// Exponent of the radial falloff. Must be positive. Default: 2.0.
    pub island_falloff: f64,
    /// Land threshold in [-1, 1]. A cell is water when its height is below
    /// `(island_threshold + 1) / 2`. Default: 0.3.
    pub island_threshold: f64,
    /// Ground item for water cells. Default: 4608.
    pub water_id: ItemId,
    /// Ground item for land cells. Default: 4526.
    pub ground_id: ItemId,
    /// Run patch removal, hole filling and smoothing after placement.
    /// Default: true.
    pub enable_cleanup: bool,
    /// Land components smaller than this become water. 0 disables.
    /// Default: 4.
    pub min_land_patch_size: usize,
    /// Water components smaller than this become land. 0 disables.
    /// Default: 3.
    pub max_water_hole_size: usize,
    /// Number of coastline smoothing passes. Default: 2.
    pub smoothing_passes: u32,
    /// Floor the island is written to. Default: 7.
    pub target_floor: i32,
}

impl Default for IslandConfig {
    fn default() -> Self {
        Self {
            noise_scale: 0.01,
            noise_octaves: 4,
            noise_persistence: 0.5,
            noise_lacunarity: 2.0,
            island_size: 0.8,
            island_falloff: 2.0,
            island_threshold: 0.3,
            water_id: ItemId(4608),
            ground_id: ItemId(4526),
            enable_cleanup: true,
            min_land_patch_size: 4,
            max_water_hole_size: 3,
            smoothing_passes: 2,
            target_floor: 7,
        }
    }
}

impl IslandConfig {
    /// Check parameter ranges, returning a description of the first problem.
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=8).contains(&self.noise_octaves) {
            return Err(format!(
                "noise_octaves must be in 1..=8, got {}",
                self.noise_octaves
            ));
        }
        if !(self.island_size > 0.0 && self.island_size <= 1.0) {
            return Err(format!(
                "island_size must be in (0, 1], got {}",
                self.island_size
            ));
        }
        if !(self.island_falloff > 0.0) {
            return Err(format!(
                "island_falloff must be positive, got {}",
                self.island_falloff
            ));
        }
        if !(-1.0..=1.0).contains(&self.island_threshold) {
            return Err(format!(
                "island_threshold must be in [-1, 1], got {}",
                self.island_threshold
            ));
        }
        Ok(())
    }

    /// Height at or above which a cell becomes ground.
    pub fn land_cutoff(&self) -> f64 {
        (self.island_threshold + 1.0) * 0.5
    }
}
