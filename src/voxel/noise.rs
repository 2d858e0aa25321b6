use rand::Rng;

use crate::constants::{NOISE_OUTPUT_SCALE, NOISE_PERMUTATION_SIZE};

/// Anything that can provide a 2D height signal for terrain generation.
pub trait HeightNoise {
    fn sample(&self, x: f32, y: f32) -> f32;
}

const GRAD3: [[f32; 3]; 12] = [
    [1.0, 1.0, 0.0], [-1.0, 1.0, 0.0], [1.0, -1.0, 0.0], [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0], [-1.0, 0.0, 1.0], [1.0, 0.0, -1.0], [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0], [0.0, -1.0, 1.0], [0.0, 1.0, -1.0], [0.0, -1.0, -1.0],
];

// Skew/unskew factors for the 2D simplex grid
const F2: f32 = 0.366_025_42; // 0.5 * (sqrt(3) - 1)
const G2: f32 = 0.211_324_87; // (3 - sqrt(3)) / 6

/// 2D simplex-style gradient noise over a random permutation table.
///
/// The table is drawn once at construction; sampling is a pure function of
/// the inputs afterwards. Output lies roughly in [-1, 1].
#[derive(Clone, Debug)]
pub struct NoiseField {
    perm: [u8; NOISE_PERMUTATION_SIZE * 2],
}

impl NoiseField {
    /// Draw a permutation table from `rng`. Entries are independent draws,
    /// so repeats are possible.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut table = [0u8; NOISE_PERMUTATION_SIZE];
        for entry in table.iter_mut() {
            *entry = rng.gen_range(0..NOISE_PERMUTATION_SIZE) as u8;
        }
        Self::from_table(table)
    }

    pub fn from_table(table: [u8; NOISE_PERMUTATION_SIZE]) -> Self {
        let mut perm = [0u8; NOISE_PERMUTATION_SIZE * 2];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = table[i & 255];
        }
        Self { perm }
    }

    #[inline]
    fn perm(&self, index: usize) -> usize {
        self.perm[index] as usize
    }

    pub fn sample(&self, xin: f32, yin: f32) -> f32 {
        let s = (xin + yin) * F2;
        let i = (xin + s).floor() as i32;
        let j = (yin + s).floor() as i32;

        let t = (i + j) as f32 * G2;
        let x0 = xin - (i as f32 - t);
        let y0 = yin - (j as f32 - t);

        // Which of the two triangles of the skewed cell we are in
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f32 + G2;
        let y1 = y0 - j1 as f32 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;

        let gi0 = self.perm(ii + self.perm(jj)) % 12;
        let gi1 = self.perm(ii + i1 + self.perm(jj + j1)) % 12;
        let gi2 = self.perm(ii + 1 + self.perm(jj + 1)) % 12;

        let n0 = corner(gi0, x0, y0);
        let n1 = corner(gi1, x1, y1);
        let n2 = corner(gi2, x2, y2);

        NOISE_OUTPUT_SCALE * (n0 + n1 + n2)
    }
}

impl HeightNoise for NoiseField {
    fn sample(&self, x: f32, y: f32) -> f32 {
        NoiseField::sample(self, x, y)
    }
}

fn corner(gradient: usize, x: f32, y: f32) -> f32 {
    let t = 0.5 - x * x - y * y;
    if t < 0.0 {
        0.0
    } else {
        let g = GRAD3[gradient];
        t.powi(4) * (g[0] * x + g[1] * y)
    }
}
