//! Wood texture generator.
//!
//! The colour map layers three signals:
//!  1. Grain: 5-octave fbm stretched along y and slightly sheared by x.
//!  2. Rings: a sine across x whose phase is pushed around by the grain.
//!  3. Detail: fine per-texel hash noise.
//!
//! Roughness is a broad, low-frequency fbm centred on 0.5.

use noise::{MultiFractal, NoiseFn};

use crate::{
    color::Rgb,
    generator::{PatternGenerator, Raster, grey, shade},
    noise::{ValueFbm, fbm_mean, hash_noise},
};

/// Half-width of the roughness band around 0.5, before fbm centring.
const ROUGHNESS_SPREAD: f64 = 0.3;

pub struct WoodGenerator {
    seed: u32,
}

impl WoodGenerator {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }
}

impl PatternGenerator for WoodGenerator {
    fn albedo(&self, base: Rgb) -> Raster {
        let grain_noise = ValueFbm::new(self.seed).set_octaves(5);
        let detail_seed = self.seed as f64 + 50.0;
        Raster::square(|x, y| {
            let (x, y) = (x as f64, y as f64);
            let grain = grain_noise.get([x * 0.02, y * 0.15 + x * 0.005]);
            let ring = (x * 0.05 + grain * 8.0).sin() * 0.5 + 0.5;
            let detail = hash_noise(x * 0.3, y * 0.3, detail_seed) * 0.1;
            shade(base, ring * 0.3 + grain * 0.5 + 0.4 + detail)
        })
    }

    fn roughness(&self) -> Raster {
        let fbm = ValueFbm::new(self.seed).set_octaves(3);
        let centre = fbm_mean(fbm.octaves);
        Raster::square(|x, y| {
            let n = fbm.get([x as f64 * 0.03, y as f64 * 0.2]);
            grey(0.5 + (n - centre) * ROUGHNESS_SPREAD)
        })
    }
}
