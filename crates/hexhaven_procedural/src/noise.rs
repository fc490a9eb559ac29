//! # Simplex Noise
//!
//! Deterministic 2D/3D simplex noise for terrain heights.
//!
//! ## Determinism Guarantee
//!
//! Given the same [`MapSeed`], this implementation produces exactly the same
//! values on any platform, any time. The permutation table is shuffled with
//! a fixed xorshift stream derived from the seed; no OS entropy is involved.
//!
//! The 3D variant exists so the map generator can sample heights on the
//! surface of a cylinder, which makes the map wrap seamlessly east to west.

/// Map seed for deterministic generation.
///
/// All procedural generation derives from this seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MapSeed(u64);

impl MapSeed {
    /// Creates a new map seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Derives an independent sub-seed for a specific purpose (e.g. object
    /// scattering), via FNV-1a style mixing.
    #[inline]
    #[must_use]
    pub const fn derive(self, purpose: u64) -> Self {
        let mut hash = self.0;
        hash ^= purpose;
        hash = hash.wrapping_mul(0x517c_c1b7_2722_0a95);
        hash ^= hash >> 32;
        Self(hash)
    }
}

impl Default for MapSeed {
    fn default() -> Self {
        Self(0xBEE5_0F7E_ACAB_1E55)
    }
}

/// The 12 gradient vectors of the simplex lattice (cube edge midpoints).
/// 2D sampling uses the first two components.
const GRADIENTS: [[i8; 3]; 12] = [
    [1, 1, 0],
    [-1, 1, 0],
    [1, -1, 0],
    [-1, -1, 0],
    [1, 0, 1],
    [-1, 0, 1],
    [1, 0, -1],
    [-1, 0, -1],
    [0, 1, 1],
    [0, -1, 1],
    [0, 1, -1],
    [0, -1, -1],
];

/// Seeded permutation table, doubled to avoid index wrapping.
struct PermutationTable {
    perm: [u8; 512],
}

impl PermutationTable {
    fn new(seed: MapSeed) -> Self {
        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().take(256).enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            {
                *slot = i as u8;
            }
        }

        // Fisher-Yates with a fixed xorshift64 stream.
        let mut state = seed.value() | 1;
        for i in (1..256).rev() {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;

            #[allow(clippy::cast_possible_truncation)]
            let j = (state as usize) % (i + 1);
            perm.swap(i, j);
        }

        for i in 0..256 {
            perm[256 + i] = perm[i];
        }

        Self { perm }
    }

    #[inline]
    fn get(&self, index: usize) -> u8 {
        self.perm[index & 511]
    }

    #[inline]
    fn gradient(&self, hash: u8) -> [i8; 3] {
        GRADIENTS[(hash % 12) as usize]
    }
}

/// Simplex noise generator.
///
/// Produces smooth, continuous values in roughly `[-1, 1]`, in two or three
/// dimensions. O(1) per sample, no allocations.
pub struct SimplexNoise {
    table: PermutationTable,
}

impl SimplexNoise {
    /// Skew factor for the 2D simplex grid: `(sqrt(3) - 1) / 2`.
    const F2: f64 = 0.366_025_403_784_439;
    /// Unskew factor for the 2D simplex grid: `(3 - sqrt(3)) / 6`.
    const G2: f64 = 0.211_324_865_405_187;
    /// Skew factor for the 3D simplex grid: `1/3`.
    const F3: f64 = 1.0 / 3.0;
    /// Unskew factor for the 3D simplex grid: `1/6`.
    const G3: f64 = 1.0 / 6.0;

    /// Creates a generator from a seed.
    #[must_use]
    pub fn new(seed: MapSeed) -> Self {
        Self {
            table: PermutationTable::new(seed),
        }
    }

    /// Samples 2D noise. Returns a value in `[-1, 1]`.
    #[must_use]
    pub fn sample2(&self, x: f64, y: f64) -> f64 {
        let skew = (x + y) * Self::F2;
        let i = fast_floor(x + skew);
        let j = fast_floor(y + skew);

        let unskew = f64::from(i + j) * Self::G2;
        let x0 = x - (f64::from(i) - unskew);
        let y0 = y - (f64::from(j) - unskew);

        // Upper or lower triangle of the simplex cell.
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - f64::from(i1) + Self::G2;
        let y1 = y0 - f64::from(j1) + Self::G2;
        let x2 = x0 - 1.0 + 2.0 * Self::G2;
        let y2 = y0 - 1.0 + 2.0 * Self::G2;

        #[allow(clippy::cast_sign_loss)]
        let ii = (i & 255) as usize;
        #[allow(clippy::cast_sign_loss)]
        let jj = (j & 255) as usize;

        #[allow(clippy::cast_sign_loss)]
        let gi0 = self.table.get(ii + self.table.get(jj) as usize);
        #[allow(clippy::cast_sign_loss)]
        let gi1 = self
            .table
            .get(ii + i1 as usize + self.table.get(jj + j1 as usize) as usize);
        let gi2 = self.table.get(ii + 1 + self.table.get(jj + 1) as usize);

        let n0 = self.corner2(x0, y0, gi0);
        let n1 = self.corner2(x1, y1, gi1);
        let n2 = self.corner2(x2, y2, gi2);

        // 70.0 normalizes the sum into [-1, 1].
        70.0 * (n0 + n1 + n2)
    }

    /// Samples 3D noise. Returns a value in `[-1, 1]`.
    #[must_use]
    #[allow(clippy::many_single_char_names, clippy::similar_names)]
    pub fn sample3(&self, x: f64, y: f64, z: f64) -> f64 {
        let skew = (x + y + z) * Self::F3;
        let i = fast_floor(x + skew);
        let j = fast_floor(y + skew);
        let k = fast_floor(z + skew);

        let unskew = f64::from(i + j + k) * Self::G3;
        let x0 = x - (f64::from(i) - unskew);
        let y0 = y - (f64::from(j) - unskew);
        let z0 = z - (f64::from(k) - unskew);

        // Rank the offsets to find which of the six tetrahedra we are in.
        let (i1, j1, k1, i2, j2, k2) = if x0 >= y0 {
            if y0 >= z0 {
                (1, 0, 0, 1, 1, 0)
            } else if x0 >= z0 {
                (1, 0, 0, 1, 0, 1)
            } else {
                (0, 0, 1, 1, 0, 1)
            }
        } else if y0 < z0 {
            (0, 0, 1, 0, 1, 1)
        } else if x0 < z0 {
            (0, 1, 0, 0, 1, 1)
        } else {
            (0, 1, 0, 1, 1, 0)
        };

        let x1 = x0 - f64::from(i1) + Self::G3;
        let y1 = y0 - f64::from(j1) + Self::G3;
        let z1 = z0 - f64::from(k1) + Self::G3;
        let x2 = x0 - f64::from(i2) + 2.0 * Self::G3;
        let y2 = y0 - f64::from(j2) + 2.0 * Self::G3;
        let z2 = z0 - f64::from(k2) + 2.0 * Self::G3;
        let x3 = x0 - 1.0 + 3.0 * Self::G3;
        let y3 = y0 - 1.0 + 3.0 * Self::G3;
        let z3 = z0 - 1.0 + 3.0 * Self::G3;

        #[allow(clippy::cast_sign_loss)]
        let ii = (i & 255) as usize;
        #[allow(clippy::cast_sign_loss)]
        let jj = (j & 255) as usize;
        #[allow(clippy::cast_sign_loss)]
        let kk = (k & 255) as usize;

        let t = &self.table;
        let gi0 = t.get(ii + t.get(jj + t.get(kk) as usize) as usize);
        #[allow(clippy::cast_sign_loss)]
        let gi1 = t.get(
            ii + i1 as usize + t.get(jj + j1 as usize + t.get(kk + k1 as usize) as usize) as usize,
        );
        #[allow(clippy::cast_sign_loss)]
        let gi2 = t.get(
            ii + i2 as usize + t.get(jj + j2 as usize + t.get(kk + k2 as usize) as usize) as usize,
        );
        let gi3 = t.get(ii + 1 + t.get(jj + 1 + t.get(kk + 1) as usize) as usize);

        let n0 = self.corner3(x0, y0, z0, gi0);
        let n1 = self.corner3(x1, y1, z1, gi1);
        let n2 = self.corner3(x2, y2, z2, gi2);
        let n3 = self.corner3(x3, y3, z3, gi3);

        // 32.0 normalizes the sum into [-1, 1].
        32.0 * (n0 + n1 + n2 + n3)
    }

    /// Fractal (octaved) 3D noise, normalized back into roughly `[-1, 1]`.
    ///
    /// # Arguments
    ///
    /// * `octaves` - Number of layers (terrain uses 6)
    /// * `persistence` - Amplitude decay per octave (typically 0.5)
    /// * `lacunarity` - Frequency growth per octave (typically 2.0)
    #[must_use]
    pub fn fractal3(
        &self,
        x: f64,
        y: f64,
        z: f64,
        octaves: u32,
        persistence: f64,
        lacunarity: f64,
    ) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_amplitude = 0.0;

        for _ in 0..octaves {
            total += self.sample3(x * frequency, y * frequency, z * frequency) * amplitude;
            max_amplitude += amplitude;
            amplitude *= persistence;
            frequency *= lacunarity;
        }

        total / max_amplitude
    }

    #[inline]
    fn corner2(&self, x: f64, y: f64, gradient_index: u8) -> f64 {
        let t = 0.5 - x * x - y * y;
        if t < 0.0 {
            0.0
        } else {
            let grad = self.table.gradient(gradient_index);
            let t2 = t * t;
            t2 * t2 * (x * f64::from(grad[0]) + y * f64::from(grad[1]))
        }
    }

    #[inline]
    fn corner3(&self, x: f64, y: f64, z: f64, gradient_index: u8) -> f64 {
        let t = 0.6 - x * x - y * y - z * z;
        if t < 0.0 {
            0.0
        } else {
            let grad = self.table.gradient(gradient_index);
            let t2 = t * t;
            t2 * t2 * (x * f64::from(grad[0]) + y * f64::from(grad[1]) + z * f64::from(grad[2]))
        }
    }
}

/// Fast floor; cheaper than `f64::floor` for lattice coordinates.
#[inline]
#[allow(clippy::cast_possible_truncation)]
fn fast_floor(x: f64) -> i32 {
    let xi = x as i32;
    if x < f64::from(xi) {
        xi - 1
    } else {
        xi
    }
}
