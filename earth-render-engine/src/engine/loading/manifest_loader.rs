use bevy::asset::LoadState;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::render_settings::{
    ATMOSPHERE_DAY_COLOR, ATMOSPHERE_TWILIGHT_COLOR, DEFAULT_DAY_TEXTURE, DEFAULT_NIGHT_TEXTURE,
    DEFAULT_SPECULAR_CLOUDS_TEXTURE, SCENE_MANIFEST_PATH,
};
use crate::engine::loading::progress::LoadingProgress;

/// Optional JSON description of the globe scene: texture paths and the two
/// atmosphere colours. Every field falls back to a compiled default, so a
/// partial or absent manifest still yields a complete scene.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath)]
pub struct SceneManifest {
    #[serde(default = "default_day_texture")]
    pub day_texture: String,
    #[serde(default = "default_night_texture")]
    pub night_texture: String,
    #[serde(default = "default_specular_clouds_texture")]
    pub specular_clouds_texture: String,
    /// sRGB components in `[0, 1]`.
    #[serde(default = "default_day_color")]
    pub atmosphere_day_color: [f32; 3],
    #[serde(default = "default_twilight_color")]
    pub atmosphere_twilight_color: [f32; 3],
}

fn default_day_texture() -> String {
    DEFAULT_DAY_TEXTURE.to_string()
}

fn default_night_texture() -> String {
    DEFAULT_NIGHT_TEXTURE.to_string()
}

fn default_specular_clouds_texture() -> String {
    DEFAULT_SPECULAR_CLOUDS_TEXTURE.to_string()
}

fn default_day_color() -> [f32; 3] {
    ATMOSPHERE_DAY_COLOR.to_f32_array_no_alpha()
}

fn default_twilight_color() -> [f32; 3] {
    ATMOSPHERE_TWILIGHT_COLOR.to_f32_array_no_alpha()
}

impl Default for SceneManifest {
    fn default() -> Self {
        Self {
            day_texture: default_day_texture(),
            night_texture: default_night_texture(),
            specular_clouds_texture: default_specular_clouds_texture(),
            atmosphere_day_color: default_day_color(),
            atmosphere_twilight_color: default_twilight_color(),
        }
    }
}

impl SceneManifest {
    pub fn day_color(&self) -> LinearRgba {
        let [r, g, b] = self.atmosphere_day_color;
        Srgba::rgb(r, g, b).into()
    }

    pub fn twilight_color(&self) -> LinearRgba {
        let [r, g, b] = self.atmosphere_twilight_color;
        Srgba::rgb(r, g, b).into()
    }
}

#[derive(Resource, Default)]
pub struct ManifestLoader {
    pub handle: Option<Handle<SceneManifest>>,
}

/// Manifest values the rest of the loading phase reads, settled either
/// from the JSON asset or from defaults.
#[derive(Resource, Clone)]
pub struct ActiveManifest(pub SceneManifest);

pub fn start_loading(mut loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    info!("Loading scene manifest from: {}", SCENE_MANIFEST_PATH);
    loader.handle = Some(asset_server.load(SCENE_MANIFEST_PATH));
}

/// Poll the manifest load. A missing or unreadable manifest is not an
/// error for the scene; defaults take over.
pub fn load_manifest_system(
    mut commands: Commands,
    mut loading_progress: ResMut<LoadingProgress>,
    loader: Res<ManifestLoader>,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<SceneManifest>>,
) {
    if loading_progress.manifest_loaded {
        return;
    }
    let Some(handle) = &loader.handle else {
        return;
    };

    match asset_server.get_load_state(handle) {
        Some(LoadState::Loaded) => {
            if let Some(manifest) = manifests.get(handle) {
                info!("Scene manifest loaded");
                commands.insert_resource(ActiveManifest(manifest.clone()));
                loading_progress.manifest_loaded = true;
            }
        }
        Some(LoadState::Failed(_)) => {
            warn!("Scene manifest missing or unreadable, using built-in defaults");
            commands.insert_resource(ActiveManifest(SceneManifest::default()));
            loading_progress.manifest_loaded = true;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_manifest_fills_in_defaults() {
        let manifest: SceneManifest = serde_json::from_str("{}").expect("empty object parses");
        assert_eq!(
            manifest.day_texture, DEFAULT_DAY_TEXTURE,
            "day texture should default to the compiled path"
        );
        assert_eq!(manifest.night_texture, DEFAULT_NIGHT_TEXTURE);
        assert_eq!(
            manifest.specular_clouds_texture,
            DEFAULT_SPECULAR_CLOUDS_TEXTURE
        );
    }

    #[test]
    fn partial_manifest_keeps_other_defaults() {
        let manifest: SceneManifest =
            serde_json::from_str(r#"{"day_texture": "earth/day_8k.jpg"}"#)
                .expect("partial object parses");
        assert_eq!(manifest.day_texture, "earth/day_8k.jpg");
        assert_eq!(
            manifest.night_texture, DEFAULT_NIGHT_TEXTURE,
            "unset fields should keep their defaults"
        );
    }

    #[test]
    fn manifest_colors_convert_to_linear() {
        let manifest = SceneManifest::default();
        let day = manifest.day_color();
        let twilight = manifest.twilight_color();
        assert!(
            day.blue > day.red,
            "day colour should be blue-dominant, got {day:?}"
        );
        assert!(
            twilight.red > twilight.blue,
            "twilight colour should be red-dominant, got {twilight:?}"
        );
    }
}
