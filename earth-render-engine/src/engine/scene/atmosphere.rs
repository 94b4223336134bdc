use bevy::prelude::*;

use crate::constants::render_settings::ATMOSPHERE_SCALE;
use crate::engine::loading::manifest_loader::SceneManifest;
use crate::engine::scene::sun::SunDirection;
use crate::engine::shaders::AtmosphereMaterial;

/// Marker component for the glow shell.
#[derive(Component)]
pub struct AtmosphereShell;

/// Spawn the shell: the surface sphere scaled up slightly, drawn back-face
/// only and alpha-blended by its material.
pub fn spawn_atmosphere(
    commands: &mut Commands,
    sphere: Handle<Mesh>,
    sun_direction: &SunDirection,
    manifest: &SceneManifest,
    materials: &mut Assets<AtmosphereMaterial>,
) {
    commands.spawn((
        AtmosphereShell,
        Mesh3d(sphere),
        MeshMaterial3d(materials.add(AtmosphereMaterial::new(
            sun_direction.0,
            manifest.day_color(),
            manifest.twilight_color(),
        ))),
        Transform::from_scale(Vec3::splat(ATMOSPHERE_SCALE)),
    ));
}

/// Copy the shared sun direction into the shell shader. Independent of the
/// surface material's copy: two shader programs, two uniform sets, one
/// source vector.
pub fn update_atmosphere_sun_direction(
    sun_direction: Res<SunDirection>,
    query: Query<&MeshMaterial3d<AtmosphereMaterial>, With<AtmosphereShell>>,
    mut materials: ResMut<Assets<AtmosphereMaterial>>,
) {
    for handle in &query {
        if let Some(material) = materials.get_mut(&handle.0) {
            material.sun_direction = sun_direction.0.extend(0.0);
        }
    }
}
