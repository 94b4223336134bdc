use bevy::image::{ImageAddressMode, ImageFilterMode, ImageSampler, ImageSamplerDescriptor};
use bevy::prelude::*;

use crate::constants::render_settings::TEXTURE_ANISOTROPY;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::texture_loader::EarthTextures;

/// Apply colour-space and sampling settings once all three maps are
/// resolved.
pub fn configure_loaded_textures(
    mut loading_progress: ResMut<LoadingProgress>,
    textures: Res<EarthTextures>,
    mut images: ResMut<Assets<Image>>,
) {
    if loading_progress.textures_configured || !loading_progress.textures_loaded {
        return;
    }

    for handle in [&textures.day, &textures.night, &textures.specular_clouds] {
        if let Some(image) = images.get_mut(handle) {
            configure_color_texture(image);
        }
    }

    info!("✓ Textures configured: sRGB, anisotropy x{TEXTURE_ANISOTROPY}");
    loading_progress.textures_configured = true;
}

/// Colour maps sample in sRGB with anisotropic filtering. Anisotropy
/// requires every filter mode to be linear. The equirectangular maps wrap
/// in U and clamp in V.
pub fn configure_color_texture(image: &mut Image) {
    image.texture_descriptor.format = image.texture_descriptor.format.add_srgb_suffix();
    image.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
        address_mode_u: ImageAddressMode::Repeat,
        address_mode_v: ImageAddressMode::ClampToEdge,
        mag_filter: ImageFilterMode::Linear,
        min_filter: ImageFilterMode::Linear,
        mipmap_filter: ImageFilterMode::Linear,
        anisotropy_clamp: TEXTURE_ANISOTROPY,
        ..default()
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_texture_is_srgb_with_anisotropy() {
        let mut image = Image::default();
        configure_color_texture(&mut image);

        assert!(
            image.texture_descriptor.format.is_srgb(),
            "colour maps must be tagged sRGB, got {:?}",
            image.texture_descriptor.format
        );

        let ImageSampler::Descriptor(descriptor) = &image.sampler else {
            panic!("configure_color_texture must install an explicit sampler");
        };
        assert_eq!(
            descriptor.anisotropy_clamp, TEXTURE_ANISOTROPY,
            "anisotropy level must match the configured setting"
        );
        assert!(
            matches!(descriptor.min_filter, ImageFilterMode::Linear),
            "anisotropic sampling requires linear filtering"
        );
    }

    #[test]
    fn configuration_is_idempotent() {
        let mut image = Image::default();
        configure_color_texture(&mut image);
        let format = image.texture_descriptor.format;
        configure_color_texture(&mut image);
        assert_eq!(
            image.texture_descriptor.format, format,
            "re-running configuration must not change the format again"
        );
    }
}
