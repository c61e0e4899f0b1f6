//! Upload generated bundles into Bevy's asset system.

use bevy::{
    asset::{Assets, RenderAssetUsages},
    image::{Image, ImageAddressMode, ImageSampler, ImageSamplerDescriptor},
    prelude::Handle,
    render::render_resource::{Extent3d, TextureDimension, TextureFormat},
};

use crate::{generator::Raster, synth::PbrTextures};

/// Handles returned after uploading a [`PbrTextures`] bundle.
#[derive(Clone, Debug)]
pub struct GeneratedHandles {
    /// Handle to the albedo (colour) image.
    pub albedo: Handle<Image>,
    /// Handle to the greyscale roughness image.
    pub roughness: Handle<Image>,
    /// Handle to the tangent-space normal map image.
    pub normal: Handle<Image>,
}

/// Upload a bundle into [`Assets<Image>`] with repeat-wrapping samplers.
///
/// The cache keeps its own copy of every raster, so the bytes are cloned.
/// Apply a [`UV_REPEAT`](crate::UV_REPEAT) × `UV_REPEAT` texture transform on
/// the material that samples these images.
pub fn bundle_to_images(bundle: &PbrTextures, images: &mut Assets<Image>) -> GeneratedHandles {
    GeneratedHandles {
        albedo: images.add(make_image(&bundle.albedo, TextureFormat::Rgba8UnormSrgb)),
        roughness: images.add(make_image(&bundle.roughness, TextureFormat::Rgba8Unorm)),
        normal: images.add(make_image(&bundle.normal, TextureFormat::Rgba8Unorm)),
    }
}

fn make_image(raster: &Raster, format: TextureFormat) -> Image {
    let mut image = Image::new(
        Extent3d {
            width: raster.width(),
            height: raster.height(),
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        raster.as_bytes().to_vec(),
        format,
        RenderAssetUsages::default(),
    );
    image.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
        address_mode_u: ImageAddressMode::Repeat,
        address_mode_v: ImageAddressMode::Repeat,
        mag_filter: bevy::image::ImageFilterMode::Linear,
        min_filter: bevy::image::ImageFilterMode::Linear,
        ..Default::default()
    });
    image
}
