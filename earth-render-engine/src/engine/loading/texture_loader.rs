use bevy::asset::{LoadState, RenderAssetUsages};
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use crate::engine::loading::manifest_loader::ActiveManifest;
use crate::engine::loading::progress::LoadingProgress;

/// Handles for the three globe colour maps.
#[derive(Resource, Default)]
pub struct EarthTextures {
    pub day: Handle<Image>,
    pub night: Handle<Image>,
    pub specular_clouds: Handle<Image>,
    pub started: bool,
}

/// Kick off the texture loads once the manifest has settled.
pub fn start_texture_loading(
    mut textures: ResMut<EarthTextures>,
    manifest: Option<Res<ActiveManifest>>,
    asset_server: Res<AssetServer>,
) {
    if textures.started {
        return;
    }
    let Some(manifest) = manifest else {
        return;
    };

    info!(
        "Loading globe textures: {}, {}, {}",
        manifest.0.day_texture, manifest.0.night_texture, manifest.0.specular_clouds_texture
    );
    textures.day = asset_server.load(&manifest.0.day_texture);
    textures.night = asset_server.load(&manifest.0.night_texture);
    textures.specular_clouds = asset_server.load(&manifest.0.specular_clouds_texture);
    textures.started = true;
}

/// Poll texture load states. A failed texture is swapped for a flat
/// placeholder so the scene still comes up; the frame loop never stalls
/// on a missing asset.
pub fn check_texture_loading(
    mut loading_progress: ResMut<LoadingProgress>,
    mut textures: ResMut<EarthTextures>,
    mut images: ResMut<Assets<Image>>,
    asset_server: Res<AssetServer>,
) {
    if loading_progress.textures_loaded || !textures.started {
        return;
    }

    let day = settle_texture(&asset_server, &mut images, &mut textures.day, "day");
    let night = settle_texture(&asset_server, &mut images, &mut textures.night, "night");
    let clouds = settle_texture(
        &asset_server,
        &mut images,
        &mut textures.specular_clouds,
        "specular clouds",
    );

    if day && night && clouds {
        info!("✓ Globe textures resolved");
        loading_progress.textures_loaded = true;
    }
}

fn settle_texture(
    asset_server: &AssetServer,
    images: &mut Assets<Image>,
    handle: &mut Handle<Image>,
    name: &str,
) -> bool {
    match asset_server.get_load_state(&*handle) {
        Some(LoadState::Loaded) => true,
        Some(LoadState::Failed(_)) => {
            warn!("{name} texture failed to load, substituting placeholder");
            *handle = images.add(placeholder_image());
            true
        }
        _ => false,
    }
}

/// 1×1 mid-grey stand-in for a map that failed to load.
pub fn placeholder_image() -> Image {
    Image::new_fill(
        Extent3d {
            width: 1,
            height: 1,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        &[128, 128, 128, 255],
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    )
}
