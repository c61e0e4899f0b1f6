//! Woven fabric texture generator.
//!
//! Two orthogonal sines form the weave; low-amplitude hash noise adds fuzz.
//! Roughness stays high everywhere, modulated by the same weave.

use crate::{
    color::Rgb,
    generator::{PatternGenerator, Raster, grey, shade},
    noise::hash_noise,
};

/// Angular frequency of the weave threads, in radians per texel.
const WEAVE_FREQ: f64 = 0.8;

pub struct FabricGenerator {
    seed: f64,
}

impl FabricGenerator {
    pub fn new(seed: u32) -> Self {
        Self { seed: seed as f64 }
    }
}

impl PatternGenerator for FabricGenerator {
    fn albedo(&self, base: Rgb) -> Raster {
        let seed = self.seed;
        Raster::square(|x, y| {
            let (x, y) = (x as f64, y as f64);
            let weave = (x * WEAVE_FREQ).sin() * 0.03 + (y * WEAVE_FREQ).sin() * 0.03 + 0.06;
            let fuzz = hash_noise(x * 0.5, y * 0.5, seed) * 0.08;
            shade(base, 0.9 + weave + fuzz)
        })
    }

    fn roughness(&self) -> Raster {
        let seed = self.seed;
        Raster::square(|x, y| {
            let (x, y) = (x as f64, y as f64);
            let weave = (x * WEAVE_FREQ).sin() * (y * WEAVE_FREQ).sin() * 0.1;
            grey(0.8 + weave + hash_noise(x, y, seed) * 0.1)
        })
    }
}
