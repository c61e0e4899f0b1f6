//! Public entry points: request parsing, seeding, dispatch and caching.

use std::sync::Arc;

use crate::{
    cache::{CacheKey, Channel, TextureCache},
    color::Rgb,
    config::SynthConfig,
    error::TextureError,
    generator::{Raster, TextureType},
    normal::height_to_normal,
};

/// The three maps of one material, shared with the cache that produced them.
#[derive(Clone, Debug)]
pub struct PbrTextures {
    pub albedo: Arc<Raster>,
    pub roughness: Arc<Raster>,
    pub normal: Arc<Raster>,
}

/// One validated material texture request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaterialTextureRequest {
    pub texture_type: TextureType,
    pub base_color: Rgb,
    pub material_id: String,
}

impl MaterialTextureRequest {
    /// Validate raw inputs.  Only the colour can be rejected; an unknown
    /// `texture_type` resolves to paint.
    pub fn parse(
        texture_type: &str,
        base_color: &str,
        material_id: &str,
    ) -> Result<Self, TextureError> {
        Ok(Self {
            texture_type: TextureType::from_name(texture_type),
            base_color: Rgb::from_hex(base_color)?,
            material_id: material_id.to_owned(),
        })
    }

    /// Generator seed for this request's material.
    pub fn seed(&self) -> u32 {
        material_seed(&self.material_id)
    }

    fn key(&self, channel: Channel) -> CacheKey {
        CacheKey::new(channel, self.material_id.as_str(), self.base_color)
    }
}

/// Stable seed derived from a material identifier.
///
/// `h = h·31 + c` over the UTF-16 code units of `id` in wrapping 32-bit
/// arithmetic, then the absolute value.
pub fn material_seed(id: &str) -> u32 {
    id.encode_utf16()
        .fold(0i32, |h, c| h.wrapping_mul(31).wrapping_add(c as i32))
        .unsigned_abs()
}

/// Generate (or fetch) the texture bundle for one material.
///
/// Fails only when `base_color` is not a `#RRGGBB` string.
pub fn generate_textures(
    cache: &TextureCache,
    texture_type: &str,
    base_color: &str,
    material_id: &str,
) -> Result<PbrTextures, TextureError> {
    let request = MaterialTextureRequest::parse(texture_type, base_color, material_id)?;
    Ok(generate_request(cache, &request))
}

/// Generate (or fetch) the texture bundle for a parsed request.
///
/// Each map is cached under its own key.  The normal map is derived from the
/// albedo map's red channel using the cache's [`SynthConfig`].
pub fn generate_request(cache: &TextureCache, request: &MaterialTextureRequest) -> PbrTextures {
    let config = cache.config();
    let generator = request.texture_type.generator(request.seed());

    let albedo = cache.get_or_create(request.key(Channel::Albedo), || {
        generator.albedo(request.base_color)
    });
    let roughness = cache.get_or_create(request.key(Channel::Roughness), || generator.roughness());
    let normal = cache.get_or_create(request.key(Channel::Normal), || {
        height_to_normal(
            &albedo,
            normal_strength(request.texture_type, config),
            config.normal_encoding,
        )
    });

    PbrTextures {
        albedo,
        roughness,
        normal,
    }
}

fn normal_strength(texture_type: TextureType, config: &SynthConfig) -> f64 {
    match texture_type {
        TextureType::Fabric => config.fabric_normal_strength,
        _ => config.normal_strength,
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{config::NormalEncoding, generator::TEXTURE_SIZE};

    fn luminance(rgb: [f64; 3]) -> f64 {
        0.2126 * rgb[0] + 0.7152 * rgb[1] + 0.0722 * rgb[2]
    }

    fn mean_luminance(raster: &Raster) -> f64 {
        let sum: f64 = raster
            .texels()
            .map(|t| luminance([t[0] as f64, t[1] as f64, t[2] as f64]))
            .sum();
        sum / (raster.width() * raster.height()) as f64
    }

    #[test]
    fn seed_matches_java_style_string_hash() {
        assert_eq!(material_seed(""), 0);
        assert_eq!(material_seed("a"), 97);
        assert_eq!(material_seed("ab"), 97 * 31 + 98);
        assert_ne!(material_seed("wood-oak-light"), material_seed("wood-oak-dark"));
        // Hashes to i32::MIN, whose absolute value only fits unsigned.
        assert_eq!(material_seed("polygenelubricants"), 2_147_483_648);
    }

    #[test]
    fn deterministic_across_caches() {
        let a = generate_textures(&TextureCache::new(), "stone", "#707070", "stone-granite-speckle")
            .unwrap();
        let b = generate_textures(&TextureCache::new(), "stone", "#707070", "stone-granite-speckle")
            .unwrap();
        assert!(!Arc::ptr_eq(&a.albedo, &b.albedo));
        assert_eq!(a.albedo, b.albedo);
        assert_eq!(a.roughness, b.roughness);
        assert_eq!(a.normal, b.normal);
    }

    #[test]
    fn every_archetype_yields_well_formed_maps() {
        let cache = TextureCache::new();
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for kind in TextureType::ALL {
            let color = Rgb::new(rng.random(), rng.random(), rng.random());
            let id = format!("{kind}-{}", rng.random::<u32>());
            let bundle = generate_textures(&cache, kind.name(), &color.to_string(), &id).unwrap();

            for map in [&bundle.albedo, &bundle.roughness, &bundle.normal] {
                assert_eq!((map.width(), map.height()), (TEXTURE_SIZE, TEXTURE_SIZE));
                assert_eq!(map.as_bytes().len(), (TEXTURE_SIZE * TEXTURE_SIZE * 4) as usize);
                assert!(map.texels().all(|t| t[3] == 255), "{kind}: alpha not opaque");
            }
            assert!(
                bundle
                    .roughness
                    .texels()
                    .all(|t| t[0] == t[1] && t[1] == t[2]),
                "{kind}: roughness is not greyscale"
            );
            assert!(bundle.normal.texels().all(|t| t[2] == 255));
        }
        assert_eq!(cache.len(), 3 * TextureType::ALL.len());
    }

    #[test]
    fn repeated_request_returns_cached_instances() {
        let cache = TextureCache::new();
        let first = generate_textures(&cache, "metal", "#a8a8a8", "metal-steel-brushed").unwrap();
        let second = generate_textures(&cache, "metal", "#a8a8a8", "metal-steel-brushed").unwrap();
        assert!(Arc::ptr_eq(&first.albedo, &second.albedo));
        assert!(Arc::ptr_eq(&first.roughness, &second.roughness));
        assert!(Arc::ptr_eq(&first.normal, &second.normal));
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn unknown_type_matches_paint() {
        let unknown =
            generate_textures(&TextureCache::new(), "unknown-xyz", "#c47030", "paint-terracotta")
                .unwrap();
        let paint =
            generate_textures(&TextureCache::new(), "paint", "#c47030", "paint-terracotta")
                .unwrap();
        assert_eq!(unknown.albedo, paint.albedo);
        assert_eq!(unknown.roughness, paint.roughness);
        assert_eq!(unknown.normal, paint.normal);
    }

    #[test]
    fn walnut_scenario() {
        let base = Rgb::from_hex("#8b6e4e").unwrap();
        let bundle =
            generate_textures(&TextureCache::new(), "wood", "#8b6e4e", "wood-walnut-light")
                .unwrap();

        let base_lum = luminance(base.to_f64());
        let albedo_lum = mean_luminance(&bundle.albedo);
        assert!(
            (albedo_lum - base_lum).abs() <= base_lum * 0.2,
            "mean albedo luminance {albedo_lum:.1} too far from base {base_lum:.1}"
        );

        let n = (TEXTURE_SIZE * TEXTURE_SIZE) as f64;
        let mean = bundle.roughness.texels().map(|t| t[0] as f64).sum::<f64>() / n;
        assert!(
            (mean - 127.5).abs() < 0.1 * 255.0,
            "roughness mean {mean:.1} is not centred on 0.5"
        );
        assert!(
            bundle
                .roughness
                .texels()
                .all(|t| (0.35 * 255.0..=0.65 * 255.0).contains(&(t[0] as f64)))
        );
    }

    #[test]
    fn material_id_drives_variation() {
        let cache = TextureCache::new();
        let a = generate_textures(&cache, "wood", "#8b6e4e", "wood-walnut-light").unwrap();
        let b = generate_textures(&cache, "wood", "#8b6e4e", "wood-walnut-custom").unwrap();
        assert_ne!(a.albedo, b.albedo);
        let differing = a
            .albedo
            .texels()
            .zip(b.albedo.texels())
            .filter(|(p, q)| p != q)
            .count();
        assert!(differing > (TEXTURE_SIZE * TEXTURE_SIZE / 2) as usize);
    }

    #[test]
    fn normal_map_is_seamless_at_wrap_boundary() {
        let bundle =
            generate_textures(&TextureCache::new(), "tile", "#d8c8a8", "tile-travertine").unwrap();
        let config = SynthConfig::default();
        let last = TEXTURE_SIZE - 1;
        let hgt = |x: u32, y: u32| bundle.albedo.texel(x, y)[0] as f64 / 255.0;

        for y in 0..TEXTURE_SIZE {
            let dx = (hgt(last, y) - hgt(1, y)) * config.normal_strength;
            let expected = ((dx * 0.5 + 0.5) * 255.0).floor().clamp(0.0, 255.0) as u8;
            assert_eq!(bundle.normal.texel(0, y)[0], expected, "row {y}");
        }
    }

    #[test]
    fn fabric_uses_softer_normals() {
        let request = MaterialTextureRequest::parse("fabric", "#ddd5c0", "fabric-linen-nat").unwrap();
        let soft = generate_request(&TextureCache::new(), &request);
        let sharp_config = SynthConfig {
            fabric_normal_strength: 2.0,
            ..Default::default()
        };
        let sharp = generate_request(&TextureCache::with_config(sharp_config).unwrap(), &request);

        let spread = |r: &Raster| {
            r.texels()
                .map(|t| (t[0] as i32 - 127).abs() as u64)
                .sum::<u64>()
        };
        assert_eq!(soft.albedo, sharp.albedo);
        assert!(spread(&soft.normal) < spread(&sharp.normal));
    }

    /// Normal maps follow the config of the cache that stores them, so two
    /// caches with different encodings never hand out each other's maps.
    #[test]
    fn normal_encoding_follows_cache_config() {
        let request = MaterialTextureRequest::parse("stone", "#3a3f47", "stone-slate-dark").unwrap();
        let normalized = SynthConfig {
            normal_encoding: NormalEncoding::Normalized,
            ..Default::default()
        };

        let plain_cache = TextureCache::new();
        let plain = generate_request(&plain_cache, &request);
        let unit_cache = TextureCache::with_config(normalized.clone()).unwrap();
        let unit = generate_request(&unit_cache, &request);

        assert_eq!(plain.albedo, unit.albedo);
        assert_ne!(plain.normal, unit.normal);
        assert!(unit.normal.texels().any(|t| t[2] < 255));
        assert!(plain.normal.texels().all(|t| t[2] == 255));

        // Repeat requests stay on each cache's own encoding.
        let again = generate_request(&unit_cache, &request);
        assert!(Arc::ptr_eq(&again.normal, &unit.normal));
        let fresh = generate_request(&TextureCache::with_config(normalized).unwrap(), &request);
        assert_eq!(again.normal, fresh.normal);
    }

    #[test]
    fn invalid_strength_never_reaches_generation() {
        for bad in [f64::NAN, -1.0, f64::INFINITY] {
            let config = SynthConfig {
                normal_strength: bad,
                ..Default::default()
            };
            assert!(matches!(
                TextureCache::with_config(config),
                Err(TextureError::InvalidConfig {
                    field: "normal_strength",
                    ..
                })
            ));
        }
    }

    #[test]
    fn malformed_color_is_rejected_before_caching() {
        let cache = TextureCache::new();
        let err = generate_textures(&cache, "wood", "#8b6e4", "wood-walnut-light").unwrap_err();
        assert!(matches!(err, TextureError::InvalidColorFormat { .. }));
        assert!(generate_textures(&cache, "wood", "brown", "wood-walnut-light").is_err());
        assert!(cache.is_empty());
    }
}
