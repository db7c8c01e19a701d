//! 2D simplex noise over a seeded permutation table, plus fractal (fBm) layering.
//!
//! The permutation is shuffled once at construction. Sampling is a pure
//! function of the coordinates and that table, so building a new
//! [`SimplexNoise`] is the only way to reseed.

use noise::NoiseFn;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Skew factor for 2D: `0.5 * (sqrt(3) - 1)`.
const F2: f64 = 0.366_025_403_784_438_6;

/// Unskew factor for 2D: `(3 - sqrt(3)) / 6`.
const G2: f64 = 0.211_324_865_405_187_13;

/// Scales the summed corner contributions into `[-1, 1]`.
const OUTPUT_SCALE: f64 = 70.0;

/// The 12 edge gradients of a cube, projected onto the XY plane.
const GRADIENTS: [[f64; 2]; 12] = [
    [1.0, 1.0],
    [-1.0, 1.0],
    [1.0, -1.0],
    [-1.0, -1.0],
    [1.0, 0.0],
    [-1.0, 0.0],
    [1.0, 0.0],
    [-1.0, 0.0],
    [0.0, 1.0],
    [0.0, -1.0],
    [0.0, 1.0],
    [0.0, -1.0],
];

/// Seeded 2D simplex noise generator.
///
/// The 256-entry permutation is stored twice (512 entries) so corner lookups
/// never wrap, alongside a precomputed `perm % 12` table for gradient selection.
#[derive(Clone)]
pub struct SimplexNoise {
    seed: u32,
    perm: [u8; 512],
    perm_mod12: [u8; 512],
}

impl SimplexNoise {
    /// Build the permutation table for `seed`.
    ///
    /// The identity table `0..256` is Fisher–Yates shuffled with a ChaCha8
    /// stream keyed by the little-endian seed bytes.
    pub fn new(seed: u32) -> Self {
        let mut table: [u8; 256] = std::array::from_fn(|i| i as u8);

        let mut key = [0u8; 32];
        key[..4].copy_from_slice(&seed.to_le_bytes());
        let mut rng = ChaCha8Rng::from_seed(key);

        for i in (1..table.len()).rev() {
            let j = (rng.next_u32() % (i as u32 + 1)) as usize;
            table.swap(i, j);
        }

        let mut perm = [0u8; 512];
        let mut perm_mod12 = [0u8; 512];
        for (i, (p, m)) in perm.iter_mut().zip(perm_mod12.iter_mut()).enumerate() {
            *p = table[i & 255];
            *m = *p % 12;
        }

        Self {
            seed,
            perm,
            perm_mod12,
        }
    }

    /// The seed this table was shuffled with.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Sample 2D simplex noise at `(x, y)`. The result lies in `[-1, 1]`.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        // Skew into simplex lattice space to find the containing cell.
        let s = (x + y) * F2;
        let i = (x + s).floor() as i64;
        let j = (y + s).floor() as i64;

        let t = (i + j) as f64 * G2;
        let x0 = x - (i as f64 - t);
        let y0 = y - (j as f64 - t);

        // Lower triangle when x0 > y0, upper triangle otherwise.
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f64 + G2;
        let y1 = y0 - j1 as f64 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;
        let gi0 = self.perm_mod12[ii + self.perm[jj] as usize] as usize;
        let gi1 = self.perm_mod12[ii + i1 + self.perm[jj + j1] as usize] as usize;
        let gi2 = self.perm_mod12[ii + 1 + self.perm[jj + 1] as usize] as usize;

        let n = corner(gi0, x0, y0) + corner(gi1, x1, y1) + corner(gi2, x2, y2);

        (OUTPUT_SCALE * n).clamp(-1.0, 1.0)
    }

    /// Fractal Brownian motion: `octaves` layers of [`sample`](Self::sample),
    /// each at `lacunarity` times the previous frequency and `persistence`
    /// times the previous amplitude, normalized by the summed amplitudes.
    ///
    /// Returns `0.0` when `octaves` is zero.
    pub fn fractal(
        &self,
        x: f64,
        y: f64,
        octaves: u32,
        persistence: f64,
        lacunarity: f64,
    ) -> f64 {
        let mut value = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_value = 0.0;

        for _ in 0..octaves {
            value += self.sample(x * frequency, y * frequency) * amplitude;
            max_value += amplitude;

            amplitude *= persistence;
            frequency *= lacunarity;
        }

        if max_value == 0.0 {
            return 0.0;
        }
        (value / max_value).clamp(-1.0, 1.0)
    }
}

impl std::fmt::Debug for SimplexNoise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimplexNoise")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl NoiseFn<f64, 2> for SimplexNoise {
    fn get(&self, point: [f64; 2]) -> f64 {
        self.sample(point[0], point[1])
    }
}

/// Contribution of one simplex corner at offset `(x, y)`.
///
/// The radial term is zero outside radius `sqrt(0.5)`; raising a negative
/// base to the fourth power would otherwise leak a positive contribution.
fn corner(gradient: usize, x: f64, y: f64) -> f64 {
    let t = 0.5 - x * x - y * y;
    if t <= 0.0 {
        return 0.0;
    }
    let t2 = t * t;
    let [gx, gy] = GRADIENTS[gradient];
    t2 * t2 * (gx * x + gy * y)
}
