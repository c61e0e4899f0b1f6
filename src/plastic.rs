//! Plastic: near-flat colour with only faint micro-noise, low roughness.

use crate::{
    color::Rgb,
    generator::{PatternGenerator, Raster, grey, shade},
    noise::hash_noise,
};

pub struct PlasticGenerator {
    seed: f64,
}

impl PlasticGenerator {
    pub fn new(seed: u32) -> Self {
        Self { seed: seed as f64 }
    }
}

impl PatternGenerator for PlasticGenerator {
    fn albedo(&self, base: Rgb) -> Raster {
        let seed = self.seed;
        Raster::square(|x, y| {
            let micro = hash_noise(x as f64 * 0.5, y as f64 * 0.5, seed) * 0.02;
            shade(base, 0.98 + micro)
        })
    }

    fn roughness(&self) -> Raster {
        let seed = self.seed;
        Raster::square(|x, y| {
            grey(0.12 + hash_noise(x as f64 * 0.3, y as f64 * 0.3, seed) * 0.05)
        })
    }
}
