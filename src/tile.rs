//! Ceramic tile texture generator.
//!
//! A 64-texel square grid of 2-texel grout lines; tile interiors carry a
//! sheared fbm for marble-like veining.  Glazed tiles are glossy while the
//! grout is close to fully rough.

use noise::{MultiFractal, NoiseFn};

use crate::{
    color::Rgb,
    generator::{PatternGenerator, Raster, grey, shade},
    noise::{ValueFbm, hash_noise},
};

/// Edge length of one tile, in texels.  Divides the raster size, so the
/// grid itself tiles.
pub const TILE_SIZE: u32 = 64;

/// Width of the grout line at the low edge of each tile, in texels.
pub const GROUT_WIDTH: u32 = 2;

/// Albedo multiplier applied to grout texels.
const GROUT_SHADE: f64 = 0.4;

/// Raw roughness byte written for grout texels.
const GROUT_ROUGHNESS: u8 = 200;

#[inline]
pub fn is_grout(x: u32, y: u32) -> bool {
    x % TILE_SIZE < GROUT_WIDTH || y % TILE_SIZE < GROUT_WIDTH
}

pub struct TileGenerator {
    seed: u32,
}

impl TileGenerator {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }
}

impl PatternGenerator for TileGenerator {
    fn albedo(&self, base: Rgb) -> Raster {
        let veining = ValueFbm::new(self.seed).set_octaves(4);
        Raster::square(|x, y| {
            if is_grout(x, y) {
                return shade(base, GROUT_SHADE);
            }
            let (x, y) = (x as f64, y as f64);
            let marble = veining.get([x * 0.01 + y * 0.005, y * 0.02]) * 0.15;
            shade(base, 0.9 + marble)
        })
    }

    fn roughness(&self) -> Raster {
        let seed = self.seed as f64;
        Raster::square(|x, y| {
            if is_grout(x, y) {
                let g = GROUT_ROUGHNESS;
                return [g, g, g, 255];
            }
            grey(0.1 + hash_noise(x as f64 * 0.1, y as f64 * 0.1, seed) * 0.1)
        })
    }
}
