//! Stone / marble texture generator.
//!
//! Veins come from folding a sine of fbm (`|sin(6·fbm)|`), which peaks along
//! the fbm's iso-lines.  Independent speckle noise and a very low-frequency
//! fbm tint shift sit on top.

use noise::{MultiFractal, NoiseFn};

use crate::{
    color::Rgb,
    generator::{PatternGenerator, Raster, grey, shade},
    noise::{ValueFbm, hash_noise},
};

pub struct StoneGenerator {
    seed: u32,
}

impl StoneGenerator {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }
}

impl PatternGenerator for StoneGenerator {
    fn albedo(&self, base: Rgb) -> Raster {
        let veins = ValueFbm::new(self.seed).set_octaves(5);
        let tint_shift = ValueFbm::new(self.seed.wrapping_add(40)).set_octaves(3);
        let speckle_seed = self.seed as f64 + 20.0;
        Raster::square(|x, y| {
            let (x, y) = (x as f64, y as f64);
            let vein = (veins.get([x * 0.015, y * 0.01]) * 6.0).sin().abs() * 0.12;
            let speckle = hash_noise(x * 0.8, y * 0.8, speckle_seed) * 0.06;
            let tint = tint_shift.get([x * 0.008, y * 0.008]) * 0.1;
            shade(base, 0.88 + vein + speckle + tint)
        })
    }

    fn roughness(&self) -> Raster {
        let broad_noise = ValueFbm::new(self.seed).set_octaves(3);
        let seed = self.seed as f64;
        Raster::square(|x, y| {
            let (x, y) = (x as f64, y as f64);
            let broad = broad_noise.get([x * 0.02, y * 0.02]) * 0.2;
            let grit = hash_noise(x * 0.5, y * 0.5, seed) * 0.08;
            grey(0.15 + broad + grit)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::fbm;

    /// The tint layer runs on its own seed, 40 above the vein layer's.
    #[test]
    fn albedo_layers_follow_seeded_fbm() {
        let seed = 221_509_292u32;
        let base = Rgb::new(0x70, 0x70, 0x70);
        let raster = StoneGenerator::new(seed).albedo(base);
        let s = seed as f64;
        for (x, y) in [(0u32, 0u32), (17, 200), (131, 64), (255, 255)] {
            let (fx, fy) = (x as f64, y as f64);
            let vein = (fbm(fx * 0.015, fy * 0.01, 5, s) * 6.0).sin().abs() * 0.12;
            let speckle = hash_noise(fx * 0.8, fy * 0.8, s + 20.0) * 0.06;
            let tint = fbm(fx * 0.008, fy * 0.008, 3, s + 40.0) * 0.1;
            assert_eq!(raster.texel(x, y), shade(base, 0.88 + vein + speckle + tint));
        }
    }

    #[test]
    fn roughness_is_mostly_smooth() {
        let raster = StoneGenerator::new(7).roughness();
        let mean = raster.texels().map(|t| t[0] as f64).sum::<f64>() / (256.0 * 256.0);
        assert!((38.0..110.0).contains(&mean), "mean roughness {mean}");
    }
}
