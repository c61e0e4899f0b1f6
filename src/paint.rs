//! Painted surface: flat colour with a fine stipple.
//!
//! Also the fallback for unrecognised texture types.

use crate::{
    color::Rgb,
    generator::{PatternGenerator, Raster, grey, shade},
    noise::hash_noise,
};

pub struct PaintGenerator {
    seed: f64,
}

impl PaintGenerator {
    pub fn new(seed: u32) -> Self {
        Self { seed: seed as f64 }
    }
}

impl PatternGenerator for PaintGenerator {
    fn albedo(&self, base: Rgb) -> Raster {
        let seed = self.seed;
        Raster::square(|x, y| {
            let stipple = hash_noise(x as f64 * 0.3, y as f64 * 0.3, seed) * 0.06;
            shade(base, 0.95 + stipple)
        })
    }

    fn roughness(&self) -> Raster {
        let seed = self.seed;
        Raster::square(|x, y| {
            grey(0.4 + hash_noise(x as f64 * 0.2, y as f64 * 0.2, seed) * 0.15)
        })
    }
}
