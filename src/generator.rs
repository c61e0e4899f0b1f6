//! Core trait and data types shared by all pattern generators.

use std::fmt;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    color::Rgb, fabric::FabricGenerator, metal::MetalGenerator, paint::PaintGenerator,
    plastic::PlasticGenerator, stone::StoneGenerator, tile::TileGenerator, wood::WoodGenerator,
};

/// Side length of every generated raster, in texels.
///
/// Square and power-of-two so maps wrap cleanly and stay mip-friendly.  The
/// pattern frequencies in each generator are tuned for this size.
pub const TEXTURE_SIZE: u32 = 256;

/// An immutable RGBA8 texel buffer, row-major, `width * height * 4` bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Raster {
    /// Build a raster by evaluating `texel` at every coordinate.
    ///
    /// Rows are filled in parallel.  `texel` must be a pure function of its
    /// coordinates, which makes the result independent of scheduling.
    pub fn from_fn<F>(width: u32, height: u32, texel: F) -> Self
    where
        F: Fn(u32, u32) -> [u8; 4] + Sync,
    {
        let w = width as usize;
        let mut data = vec![0u8; w * height as usize * 4];
        if w > 0 {
            data.par_chunks_mut(w * 4).enumerate().for_each(|(y, row)| {
                for (x, px) in row.chunks_exact_mut(4).enumerate() {
                    px.copy_from_slice(&texel(x as u32, y as u32));
                }
            });
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// A `TEXTURE_SIZE × TEXTURE_SIZE` raster built from `texel`.
    pub fn square<F>(texel: F) -> Self
    where
        F: Fn(u32, u32) -> [u8; 4] + Sync,
    {
        Self::from_fn(TEXTURE_SIZE, TEXTURE_SIZE, texel)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA of the texel at `(x, y)`.  Panics when out of bounds.
    #[inline]
    pub fn texel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(
            x < self.width && y < self.height,
            "texel ({x}, {y}) outside {}×{} raster",
            self.width,
            self.height
        );
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Raw RGBA8 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Iterator over every texel in row-major order.
    pub fn texels(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        self.data
            .chunks_exact(4)
            .map(|px| [px[0], px[1], px[2], px[3]])
    }
}

impl fmt::Debug for Raster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Raster")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// The fixed material archetypes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum TextureType {
    Wood,
    Metal,
    Fabric,
    Tile,
    Stone,
    Plastic,
    Paint,
}

impl TextureType {
    pub const ALL: [TextureType; 7] = [
        TextureType::Wood,
        TextureType::Metal,
        TextureType::Fabric,
        TextureType::Tile,
        TextureType::Stone,
        TextureType::Plastic,
        TextureType::Paint,
    ];

    /// Resolve an archetype name.  Unrecognised names fall back to
    /// [`TextureType::Paint`]; this is not an error.
    pub fn from_name(name: &str) -> Self {
        match name {
            "wood" => TextureType::Wood,
            "metal" => TextureType::Metal,
            "fabric" => TextureType::Fabric,
            "tile" => TextureType::Tile,
            "stone" => TextureType::Stone,
            "plastic" => TextureType::Plastic,
            "paint" => TextureType::Paint,
            other => {
                tracing::debug!(texture_type = other, "unknown texture type, using paint");
                TextureType::Paint
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TextureType::Wood => "wood",
            TextureType::Metal => "metal",
            TextureType::Fabric => "fabric",
            TextureType::Tile => "tile",
            TextureType::Stone => "stone",
            TextureType::Plastic => "plastic",
            TextureType::Paint => "paint",
        }
    }

    /// The pattern generator for this archetype, seeded with `seed`.
    pub fn generator(self, seed: u32) -> Box<dyn PatternGenerator> {
        match self {
            TextureType::Wood => Box::new(WoodGenerator::new(seed)),
            TextureType::Metal => Box::new(MetalGenerator::new(seed)),
            TextureType::Fabric => Box::new(FabricGenerator::new(seed)),
            TextureType::Tile => Box::new(TileGenerator::new(seed)),
            TextureType::Stone => Box::new(StoneGenerator::new(seed)),
            TextureType::Plastic => Box::new(PlasticGenerator::new(seed)),
            TextureType::Paint => Box::new(PaintGenerator::new(seed)),
        }
    }
}

impl From<String> for TextureType {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

impl fmt::Display for TextureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One procedural material family.
///
/// Implementations hold the per-material seed and produce two independent
/// rasters: a colour map that doubles as a height source for the normal map,
/// and a greyscale roughness map.
pub trait PatternGenerator: Send + Sync {
    /// Colour raster: `base × modulation(x, y)` per channel, alpha 255.
    fn albedo(&self, base: Rgb) -> Raster;

    /// Greyscale roughness raster, value repeated in RGB, alpha 255.
    fn roughness(&self) -> Raster;
}

/// Scale `base` by `v`, rounding and clamping each channel to `[0, 255]`.
#[inline]
pub(crate) fn shade(base: Rgb, v: f64) -> [u8; 4] {
    let [r, g, b] = base.to_f64();
    [channel(r * v), channel(g * v), channel(b * v), 255]
}

/// Encode a roughness value in `[0, 1]` as an opaque grey texel.
#[inline]
pub(crate) fn grey(v: f64) -> [u8; 4] {
    let c = (v * 255.0).floor().clamp(0.0, 255.0) as u8;
    [c, c, c, 255]
}

#[inline]
fn channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}
