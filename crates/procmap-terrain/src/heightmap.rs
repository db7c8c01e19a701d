//! Height field synthesis and the radial island mask.

use procmap_noise::SimplexNoise;

use crate::config::IslandConfig;

/// Row-major grid of heights in `[0, 1]`, indexed `y * width + x`.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightField {
    width: usize,
    height: usize,
    values: Vec<f64>,
}

impl HeightField {
    /// A field of `width * height` cells, all set to `fill`.
    pub fn filled(width: usize, height: usize, fill: f64) -> Self {
        Self {
            width,
            height,
            values: vec![fill; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.values[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f64) {
        self.values[y * self.width + x] = value;
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Sample fBm noise for every cell and remap it from `[-1, 1]` to `[0, 1]`.
pub fn build_height_map(
    noise: &SimplexNoise,
    config: &IslandConfig,
    width: usize,
    height: usize,
) -> HeightField {
    let mut field = HeightField::filled(width, height, 0.0);
    for y in 0..height {
        for x in 0..width {
            let v = noise.fractal(
                x as f64 * config.noise_scale,
                y as f64 * config.noise_scale,
                config.noise_octaves,
                config.noise_persistence,
                config.noise_lacunarity,
            );
            field.set(x, y, (v + 1.0) * 0.5);
        }
    }
    field
}

/// Subtract a radial falloff centred on the field so the edges sink below
/// the waterline.
pub fn apply_island_mask(field: &mut HeightField, config: &IslandConfig) {
    let cx = (field.width / 2) as f64;
    let cy = (field.height / 2) as f64;
    let radius = field.width.min(field.height) as f64 / 2.0 * config.island_size;

    for y in 0..field.height {
        for x in 0..field.width {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            let d = (dx * dx + dy * dy).sqrt() / radius;
            let falloff = if d <= 0.0 {
                0.0
            } else if d >= 1.0 {
                1.0
            } else {
                d.powf(config.island_falloff)
            };
            let v = field.get(x, y) - falloff;
            field.set(x, y, v.clamp(0.0, 1.0));
        }
    }
}
