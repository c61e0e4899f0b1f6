//! Brushed metal texture generator.
//!
//! Lattice noise sampled with a very low x frequency and a high y frequency
//! gives long horizontal streaks on top of a near-uniform bright base; sparse
//! high-frequency hash noise adds micro-scratches.

use noise::NoiseFn;

use crate::{
    color::Rgb,
    generator::{PatternGenerator, Raster, grey, shade},
    noise::{ValueNoise, hash_noise},
};

pub struct MetalGenerator {
    seed: u32,
}

impl MetalGenerator {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }
}

impl PatternGenerator for MetalGenerator {
    fn albedo(&self, base: Rgb) -> Raster {
        let streaks = ValueNoise::new(self.seed);
        let micro_seed = self.seed as f64 + 30.0;
        Raster::square(|x, y| {
            let (x, y) = (x as f64, y as f64);
            let streak = streaks.get([x * 0.01, y * 0.5]) * 0.15;
            let micro = hash_noise(x * 2.0, y * 2.0, micro_seed) * 0.05;
            shade(base, 0.85 + streak + micro)
        })
    }

    fn roughness(&self) -> Raster {
        let streaks = ValueNoise::new(self.seed);
        Raster::square(|x, y| {
            let brushed = streaks.get([x as f64 * 0.01, y as f64 * 0.8]) * 0.3;
            grey(0.2 + brushed)
        })
    }
}
