use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub manifest_loaded: bool,
    pub textures_loaded: bool,
    pub textures_configured: bool,
    pub scene_spawned: bool,
}
