use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::constants::render_settings::{DAY_MIX_EDGES, EARTH_ROTATION_STEP};
use crate::engine::loading::manifest_loader::SceneManifest;
use crate::engine::loading::texture_loader::EarthTextures;
use crate::engine::scene::sun::SunDirection;
use crate::engine::shaders::EarthMaterial;

/// Accumulated spin around +Y. Wrapped at TAU so the angle does not drift
/// over very long sessions.
#[derive(Component, Debug, Default)]
pub struct EarthRotation {
    pub angle: f32,
}

impl EarthRotation {
    pub fn advance(&mut self, step: f32) {
        self.angle = (self.angle + step) % TAU;
    }
}

pub fn spawn_earth(
    commands: &mut Commands,
    sphere: Handle<Mesh>,
    textures: &EarthTextures,
    sun_direction: &SunDirection,
    manifest: &SceneManifest,
    materials: &mut Assets<EarthMaterial>,
) {
    let material = EarthMaterial::new(
        textures.day.clone(),
        textures.night.clone(),
        textures.specular_clouds.clone(),
        sun_direction.0,
        manifest.day_color(),
        manifest.twilight_color(),
    );
    commands.spawn((
        EarthRotation::default(),
        Mesh3d(sphere),
        MeshMaterial3d(materials.add(material)),
        Transform::default(),
    ));
}

/// Advance the self-rotation by a fixed step each frame.
pub fn rotate_earth(mut query: Query<(&mut EarthRotation, &mut Transform)>) {
    for (mut rotation, mut transform) in &mut query {
        rotation.advance(EARTH_ROTATION_STEP);
        transform.rotation = Quat::from_rotation_y(rotation.angle);
    }
}

/// Copy the shared sun direction into the surface shader. The material
/// asset is mutated in place; the handle the mesh holds is never swapped
/// for a new asset.
pub fn update_earth_sun_direction(
    sun_direction: Res<SunDirection>,
    query: Query<&MeshMaterial3d<EarthMaterial>, With<EarthRotation>>,
    mut materials: ResMut<Assets<EarthMaterial>>,
) {
    for handle in &query {
        if let Some(material) = materials.get_mut(&handle.0) {
            material.sun_direction = sun_direction.0.extend(0.0);
        }
    }
}

/// CPU mirror of the shader's day/night blend, kept here so the curve is
/// testable: 1.0 is fully day-lit, 0.0 fully night.
pub fn surface_day_mix(normal: Vec3, sun_direction: Vec3) -> f32 {
    let sun_orientation = normal.normalize().dot(sun_direction.normalize());
    smoothstep(DAY_MIX_EDGES.x, DAY_MIX_EDGES.y, sun_orientation)
}

fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_after_n_steps_is_n_times_step_modulo_tau() {
        let mut rotation = EarthRotation::default();
        let n = 5000;
        for _ in 0..n {
            rotation.advance(EARTH_ROTATION_STEP);
        }
        let expected = (n as f32 * EARTH_ROTATION_STEP) % TAU;
        assert!(
            (rotation.angle - expected).abs() < 1e-3,
            "after {n} frames the angle should be {expected}, got {}",
            rotation.angle
        );
    }

    #[test]
    fn rotation_wraps_below_tau() {
        let mut rotation = EarthRotation { angle: TAU - 0.0005 };
        rotation.advance(EARTH_ROTATION_STEP);
        assert!(
            rotation.angle < TAU,
            "angle must wrap at TAU, got {}",
            rotation.angle
        );
        assert!(
            rotation.angle >= 0.0,
            "wrapped angle must stay non-negative, got {}",
            rotation.angle
        );
    }

    #[test]
    fn noon_facing_normal_gets_full_day_weight() {
        let mix = surface_day_mix(Vec3::Z, Vec3::Z);
        assert!(
            (mix - 1.0).abs() < 1e-6,
            "a normal aligned with the sun should be fully day-lit, got {mix}"
        );
    }

    #[test]
    fn anti_sun_normal_gets_full_night_weight() {
        let mix = surface_day_mix(Vec3::NEG_Z, Vec3::Z);
        assert!(
            mix.abs() < 1e-6,
            "a normal opposite the sun should be fully night, got {mix}"
        );
    }

    #[test]
    fn day_mix_increases_across_the_terminator() {
        let sun = Vec3::Z;
        let mut previous = surface_day_mix(Vec3::NEG_Z, sun);
        for i in 1..=32 {
            let angle = std::f32::consts::PI * (1.0 - i as f32 / 32.0);
            let normal = Vec3::new(angle.sin(), 0.0, angle.cos());
            let mix = surface_day_mix(normal, sun);
            assert!(
                mix >= previous - 1e-6,
                "day weight must not decrease while rotating toward the sun \
                 (step {i}: {previous} -> {mix})"
            );
            previous = mix;
        }
    }

    #[test]
    fn rotation_system_drives_the_transform() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_systems(Update, rotate_earth);
        let entity = app
            .world_mut()
            .spawn((EarthRotation::default(), Transform::default()))
            .id();

        let frames = 200;
        for _ in 0..frames {
            app.update();
        }

        let expected = frames as f32 * EARTH_ROTATION_STEP;
        let rotation = app
            .world()
            .get::<EarthRotation>(entity)
            .expect("rotation component survives");
        assert!(
            (rotation.angle - expected).abs() < 1e-4,
            "after {frames} updates the accumulated angle should be {expected}, got {}",
            rotation.angle
        );

        let transform = app
            .world()
            .get::<Transform>(entity)
            .expect("transform component survives");
        let expected_quat = Quat::from_rotation_y(rotation.angle);
        assert!(
            transform.rotation.angle_between(expected_quat) < 1e-4,
            "the transform must follow the accumulated spin angle"
        );
    }
}
