//! Scene composition: the earth surface, sun marker, and atmosphere shell
//! under an orbit-controlled camera, sharing one sun direction.

pub mod atmosphere;
pub mod earth;
pub mod sun;

use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;

use crate::constants::render_settings::{
    CAMERA_FOV_DEGREES, CAMERA_POSITION, EARTH_RADIUS, EARTH_SEGMENTS,
};
use crate::engine::camera::orbit_camera::OrbitCamera;
use crate::engine::loading::manifest_loader::ActiveManifest;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::texture_loader::EarthTextures;
use crate::engine::scene::sun::SunDirection;
use crate::engine::shaders::{AtmosphereMaterial, EarthMaterial};

/// Spawn the camera and the three scene siblings once the textures have
/// settled. Runs once; guarded by the loading progress flags.
pub fn spawn_scene_when_ready(
    mut commands: Commands,
    mut loading_progress: ResMut<LoadingProgress>,
    manifest: Option<Res<ActiveManifest>>,
    textures: Res<EarthTextures>,
    sun_direction: Res<SunDirection>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut earth_materials: ResMut<Assets<EarthMaterial>>,
    mut atmosphere_materials: ResMut<Assets<AtmosphereMaterial>>,
    mut standard_materials: ResMut<Assets<StandardMaterial>>,
) {
    if loading_progress.scene_spawned || !loading_progress.textures_configured {
        return;
    }
    let Some(manifest) = manifest else {
        return;
    };
    let manifest = &manifest.0;

    spawn_camera(&mut commands);

    // The surface and the shell share one sphere mesh; the shell scales it.
    let sphere = meshes.add(Sphere::new(EARTH_RADIUS).mesh().uv(EARTH_SEGMENTS, EARTH_SEGMENTS));

    earth::spawn_earth(
        &mut commands,
        sphere.clone(),
        &textures,
        &sun_direction,
        manifest,
        &mut earth_materials,
    );
    sun::spawn_sun_marker(
        &mut commands,
        &sun_direction,
        &mut meshes,
        &mut standard_materials,
    );
    atmosphere::spawn_atmosphere(
        &mut commands,
        sphere,
        &sun_direction,
        manifest,
        &mut atmosphere_materials,
    );

    info!("✓ Globe scene spawned");
    loading_progress.scene_spawned = true;
}

fn spawn_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        // Texture colours pass through untouched.
        Tonemapping::None,
        Transform::from_translation(CAMERA_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.insert_resource(OrbitCamera::from_position(CAMERA_POSITION));
}
