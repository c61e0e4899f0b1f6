//! Material catalog: the material list a host feeds into the synthesizer.
//!
//! [`Catalog::builtin`] carries the stock interior-design materials.  Hosts
//! with their own list deserialize a [`Catalog`] from any serde format; each
//! entry uses the `{ id, name, color: "#RRGGBB", textureType, roughness,
//! metalness }` shape.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    cache::TextureCache,
    color::Rgb,
    generator::TextureType::{self, Fabric, Metal, Paint, Plastic, Stone, Wood},
    synth::{MaterialTextureRequest, PbrTextures, generate_request},
};

/// One catalog entry.
///
/// `roughness` and `metalness` are the material's scalar PBR factors; the
/// renderer multiplies them with the generated maps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialSpec {
    pub id: String,
    pub name: String,
    pub color: Rgb,
    pub texture_type: TextureType,
    pub roughness: f32,
    pub metalness: f32,
}

impl MaterialSpec {
    pub fn request(&self) -> MaterialTextureRequest {
        MaterialTextureRequest {
            texture_type: self.texture_type,
            base_color: self.color,
            material_id: self.id.clone(),
        }
    }
}

/// An ordered list of materials.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    materials: Vec<MaterialSpec>,
}

impl Catalog {
    pub fn new(materials: Vec<MaterialSpec>) -> Self {
        Self { materials }
    }

    /// The stock material list.
    pub fn builtin() -> Self {
        let materials = BUILTIN
            .iter()
            .map(|&(id, name, color, texture_type, roughness, metalness)| MaterialSpec {
                id: id.to_owned(),
                name: name.to_owned(),
                color: Rgb(color),
                texture_type,
                roughness,
                metalness,
            })
            .collect();
        Self { materials }
    }

    pub fn materials(&self) -> &[MaterialSpec] {
        &self.materials
    }

    pub fn get(&self, id: &str) -> Option<&MaterialSpec> {
        self.materials.iter().find(|m| m.id == id)
    }

    pub fn of_type(&self, texture_type: TextureType) -> impl Iterator<Item = &MaterialSpec> {
        self.materials
            .iter()
            .filter(move |m| m.texture_type == texture_type)
    }

    /// Generate every material's bundle into `cache`, in parallel.
    ///
    /// Returns the bundles in catalog order.  Materials already cached are
    /// fetched rather than regenerated.
    pub fn prewarm(&self, cache: &TextureCache) -> Vec<PbrTextures> {
        tracing::info!(materials = self.materials.len(), "pre-generating catalog textures");
        self.materials
            .par_iter()
            .map(|m| generate_request(cache, &m.request()))
            .collect()
    }
}

type Entry = (&'static str, &'static str, [u8; 3], TextureType, f32, f32);

#[rustfmt::skip]
const BUILTIN: &[Entry] = &[
    ("wood-oak-light", "Oak Light", [0xd4, 0xb8, 0x8c], Wood, 0.55, 0.0),
    ("wood-oak-medium", "Oak Medium", [0xb8, 0x93, 0x4a], Wood, 0.5, 0.0),
    ("wood-oak-dark", "Oak Dark", [0x8a, 0x6a, 0x30], Wood, 0.48, 0.0),
    ("wood-walnut-light", "Walnut Light", [0x8b, 0x6e, 0x4e], Wood, 0.5, 0.0),
    ("wood-walnut-dark", "Walnut Dark", [0x5d, 0x40, 0x37], Wood, 0.45, 0.0),
    ("wood-mahogany", "Mahogany", [0x3e, 0x1c, 0x14], Wood, 0.42, 0.0),
    ("wood-mahogany-red", "Mahogany Red", [0x6b, 0x1c, 0x0e], Wood, 0.44, 0.0),
    ("wood-birch", "Birch Light", [0xf0, 0xe6, 0xd2], Wood, 0.6, 0.0),
    ("wood-pine", "Pine Honey", [0xc8, 0xa4, 0x5e], Wood, 0.58, 0.0),
    ("wood-teak", "Teak Warm", [0x9a, 0x73, 0x40], Wood, 0.5, 0.0),
    ("metal-steel-brushed", "Brushed Steel", [0xa8, 0xa8, 0xa8], Metal, 0.3, 0.85),
    ("metal-steel-polished", "Polished Steel", [0xc8, 0xc8, 0xc8], Metal, 0.1, 0.95),
    ("metal-steel-matte", "Matte Steel", [0x80, 0x80, 0x80], Metal, 0.5, 0.7),
    ("metal-brass-bright", "Brass Bright", [0xd4, 0xa8, 0x4e], Metal, 0.2, 0.9),
    ("metal-brass-aged", "Brass Aged", [0x9a, 0x7a, 0x3a], Metal, 0.4, 0.75),
    ("metal-copper-new", "Copper New", [0xc4, 0x70, 0x40], Metal, 0.25, 0.85),
    ("metal-copper-aged", "Copper Patina", [0x60, 0x8a, 0x6a], Metal, 0.5, 0.6),
    ("metal-black", "Matte Black", [0x2a, 0x2a, 0x2a], Metal, 0.5, 0.7),
    ("metal-chrome", "Chrome Mirror", [0xd0, 0xd0, 0xd0], Metal, 0.08, 0.95),
    ("fabric-linen-nat", "Linen Natural", [0xdd, 0xd5, 0xc0], Fabric, 0.9, 0.0),
    ("fabric-linen-white", "Linen White", [0xf0, 0xec, 0xe0], Fabric, 0.88, 0.0),
    ("fabric-velvet-navy", "Velvet Navy", [0x1a, 0x27, 0x44], Fabric, 0.95, 0.0),
    ("fabric-velvet-emerald", "Velvet Emerald", [0x1a, 0x4a, 0x2e], Fabric, 0.95, 0.0),
    ("fabric-velvet-wine", "Velvet Wine", [0x5a, 0x1a, 0x2a], Fabric, 0.95, 0.0),
    ("fabric-leather-cognac", "Leather Cognac", [0x8b, 0x45, 0x13], Fabric, 0.6, 0.0),
    ("fabric-leather-black", "Leather Black", [0x1c, 0x1c, 0x1c], Fabric, 0.55, 0.05),
    ("fabric-leather-tan", "Leather Tan", [0xc0, 0x90, 0x60], Fabric, 0.58, 0.0),
    ("fabric-wool-grey", "Wool Grey", [0x88, 0x85, 0x7f], Fabric, 0.85, 0.0),
    ("stone-marble-white", "Carrara Marble", [0xf0, 0xec, 0xe4], Stone, 0.1, 0.0),
    ("stone-marble-grey", "Grey Marble", [0xc0, 0xba, 0xb0], Stone, 0.12, 0.0),
    ("stone-granite-black", "Black Granite", [0x1e, 0x1e, 0x1e], Stone, 0.15, 0.05),
    ("stone-granite-speckle", "Speckled Granite", [0x70, 0x70, 0x70], Stone, 0.2, 0.03),
    ("stone-slate-dark", "Slate Dark", [0x3a, 0x3f, 0x47], Stone, 0.3, 0.0),
    ("stone-travertine", "Travertine", [0xd8, 0xc8, 0xa8], Stone, 0.35, 0.0),
    ("stone-terracotta", "Terracotta", [0xc0, 0x59, 0x3b], Stone, 0.5, 0.0),
    ("plastic-white", "Gloss White", [0xf5, 0xf5, 0xf5], Plastic, 0.15, 0.0),
    ("plastic-black", "Matte Black", [0x1a, 0x1a, 0x1a], Plastic, 0.4, 0.0),
    ("plastic-grey", "Cool Grey", [0x8a, 0x8a, 0x8a], Plastic, 0.25, 0.0),
    ("plastic-red", "Signal Red", [0xcc, 0x20, 0x20], Plastic, 0.2, 0.0),
    ("plastic-navy", "Deep Navy", [0x1a, 0x20, 0x40], Plastic, 0.22, 0.0),
    ("paint-white", "Matte White", [0xf8, 0xf8, 0xf8], Paint, 0.7, 0.0),
    ("paint-cream", "Eggshell Cream", [0xf5, 0xed, 0xd0], Paint, 0.5, 0.0),
    ("paint-charcoal", "Charcoal Matte", [0x30, 0x30, 0x30], Paint, 0.65, 0.0),
    ("paint-navy", "Navy Satin", [0x1a, 0x25, 0x52], Paint, 0.35, 0.0),
    ("paint-sage", "Sage Green", [0x8f, 0xa8, 0x78], Paint, 0.5, 0.0),
    ("paint-terracotta", "Terracotta Warm", [0xc4, 0x70, 0x30], Paint, 0.55, 0.0),
];
