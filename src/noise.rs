//! Seeded value noise and fractal sums.
//!
//! The primitive is a trigonometric hash:
//!   hash(x, y, seed) = fract(sin(x·12.9898 + y·78.233 + seed) · 43758.5453)
//!
//! [`lattice_noise`] evaluates the hash at the four integer lattice corners
//! around a point and blends them with smoothstep easing, and [`fbm`] sums
//! octaves of that at doubling frequency and halving amplitude.
//!
//! Everything here is a pure function of its arguments, so rasters built on
//! top of it are reproducible bit-for-bit and can be filled from any number
//! of threads.

use noise::{MultiFractal, NoiseFn, Seedable};

/// Octave count used by [`ValueFbm`] when none is set.
const DEFAULT_OCTAVES: usize = 4;

/// Seed stride between successive fbm octaves.
const OCTAVE_SEED_STRIDE: f64 = 100.0;

/// Deterministic hash of a 2-D point and a seed into `[0, 1)`.
#[inline]
pub fn hash_noise(x: f64, y: f64, seed: f64) -> f64 {
    let n = (x * 12.9898 + y * 78.233 + seed).sin() * 43758.5453;
    let f = n - n.floor();
    // `n - floor(n)` rounds to exactly 1.0 for tiny negative `n`.
    if f >= 1.0 { 0.0 } else { f }
}

/// Bilinear, smoothstep-eased interpolation of [`hash_noise`] on the integer
/// lattice.  Output is in `[0, 1)`.
pub fn lattice_noise(x: f64, y: f64, seed: f64) -> f64 {
    let ix = x.floor();
    let iy = y.floor();
    let fx = x - ix;
    let fy = y - iy;

    let a = hash_noise(ix, iy, seed);
    let b = hash_noise(ix + 1.0, iy, seed);
    let c = hash_noise(ix, iy + 1.0, seed);
    let d = hash_noise(ix + 1.0, iy + 1.0, seed);

    let ux = smoothstep(fx);
    let uy = smoothstep(fy);
    a * (1.0 - ux) * (1.0 - uy) + b * ux * (1.0 - uy) + c * (1.0 - ux) * uy + d * ux * uy
}

/// Fractal sum of `octaves` layers of [`lattice_noise`].
///
/// Amplitude starts at 0.5 and halves each octave while frequency doubles;
/// octave `i` is sampled with seed `seed + i·100` so the layers decorrelate.
/// The result lies in `[0, 1 − 0.5^octaves)`.
pub fn fbm(x: f64, y: f64, octaves: usize, seed: f64) -> f64 {
    let mut value = 0.0;
    let mut amplitude = 0.5;
    let mut frequency = 1.0;
    for i in 0..octaves {
        let octave_seed = seed + i as f64 * OCTAVE_SEED_STRIDE;
        value += amplitude * lattice_noise(x * frequency, y * frequency, octave_seed);
        amplitude *= 0.5;
        frequency *= 2.0;
    }
    value
}

/// Expected value of [`fbm`] for the given octave count.
#[inline]
pub fn fbm_mean(octaves: usize) -> f64 {
    0.5 * (1.0 - 0.5f64.powi(octaves as i32))
}

#[inline]
fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// [`lattice_noise`] as a seeded [`NoiseFn`] source.
#[derive(Clone, Copy, Debug)]
pub struct ValueNoise {
    seed: u32,
}

impl ValueNoise {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }
}

impl Seedable for ValueNoise {
    fn set_seed(self, seed: u32) -> Self {
        Self { seed }
    }

    fn seed(&self) -> u32 {
        self.seed
    }
}

impl NoiseFn<f64, 2> for ValueNoise {
    fn get(&self, point: [f64; 2]) -> f64 {
        lattice_noise(point[0], point[1], self.seed as f64)
    }
}

/// Configurable fractal sum over [`ValueNoise`].
///
/// With the default frequency, lacunarity and persistence this evaluates
/// exactly like [`fbm`].
#[derive(Clone, Copy, Debug)]
pub struct ValueFbm {
    seed: u32,
    pub octaves: usize,
    pub frequency: f64,
    pub lacunarity: f64,
    pub persistence: f64,
}

impl ValueFbm {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            octaves: DEFAULT_OCTAVES,
            frequency: 1.0,
            lacunarity: 2.0,
            persistence: 0.5,
        }
    }
}

impl Default for ValueFbm {
    fn default() -> Self {
        Self::new(0)
    }
}

impl MultiFractal for ValueFbm {
    fn set_octaves(self, octaves: usize) -> Self {
        Self { octaves, ..self }
    }

    fn set_frequency(self, frequency: f64) -> Self {
        Self { frequency, ..self }
    }

    fn set_lacunarity(self, lacunarity: f64) -> Self {
        Self { lacunarity, ..self }
    }

    fn set_persistence(self, persistence: f64) -> Self {
        Self {
            persistence,
            ..self
        }
    }
}

impl Seedable for ValueFbm {
    fn set_seed(self, seed: u32) -> Self {
        Self { seed, ..self }
    }

    fn seed(&self) -> u32 {
        self.seed
    }
}

impl NoiseFn<f64, 2> for ValueFbm {
    fn get(&self, point: [f64; 2]) -> f64 {
        let seed = self.seed as f64;
        let mut value = 0.0;
        let mut amplitude = self.persistence;
        let mut frequency = self.frequency;
        for i in 0..self.octaves {
            let octave_seed = seed + i as f64 * OCTAVE_SEED_STRIDE;
            value += amplitude
                * lattice_noise(point[0] * frequency, point[1] * frequency, octave_seed);
            amplitude *= self.persistence;
            frequency *= self.lacunarity;
        }
        value
    }
}
