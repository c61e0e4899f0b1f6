//! `pbr_texture_synth` — procedural, tileable PBR textures for a material catalog.
//!
//! # Architecture
//! Each material archetype (wood, metal, fabric, tile, stone, plastic, paint)
//! has a [`PatternGenerator`] that turns a base colour and a seed into an
//! albedo [`Raster`] and a roughness [`Raster`].  The albedo's red channel
//! doubles as a height field for [`normal::height_to_normal`], which fetches
//! neighbours toroidally so the normal map tiles without a seam.
//!
//! [`generate_textures`] ties it together: it derives the seed from the
//! material id, dispatches on the texture type, and memoizes each map in a
//! caller-owned [`TextureCache`].  The same material always reproduces the
//! same texels.
//!
//! ```
//! use pbr_texture_synth::{TextureCache, generate_textures};
//!
//! let cache = TextureCache::new();
//! let maps = generate_textures(&cache, "wood", "#8b6e4e", "wood-walnut-light")?;
//! assert_eq!(maps.albedo.width(), 256);
//! # Ok::<(), pbr_texture_synth::TextureError>(())
//! ```
//!
//! With the `bevy` feature, [`PbrTexturePlugin`] inserts a shared cache
//! resource and uploads background-generated bundles as `Image` assets.

#[cfg(feature = "bevy")]
pub mod async_gen;
pub mod cache;
pub mod catalog;
pub mod color;
pub mod config;
pub mod error;
pub mod fabric;
pub mod generator;
pub mod metal;
pub mod noise;
pub mod normal;
pub mod paint;
pub mod plastic;
pub mod stone;
pub mod synth;
pub mod tile;
#[cfg(feature = "bevy")]
pub mod upload;
pub mod wood;

pub use cache::{CacheKey, Channel, TextureCache};
pub use catalog::{Catalog, MaterialSpec};
pub use color::Rgb;
pub use config::{NormalEncoding, SynthConfig};
pub use error::TextureError;
pub use generator::{PatternGenerator, Raster, TEXTURE_SIZE, TextureType};
pub use synth::{
    MaterialTextureRequest, PbrTextures, generate_request, generate_textures, material_seed,
};

/// UV repeat the generators are tuned for: map each texture 2×2 across a
/// surface.
pub const UV_REPEAT: f32 = 2.0;

#[cfg(feature = "bevy")]
use bevy::prelude::*;

/// Bevy plugin — inserts [`async_gen::SharedTextureCache`] and registers the
/// async-generation polling system.
#[cfg(feature = "bevy")]
pub struct PbrTexturePlugin;

#[cfg(feature = "bevy")]
impl Plugin for PbrTexturePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<async_gen::SharedTextureCache>()
            .add_systems(Update, async_gen::poll_texture_tasks);
    }
}
