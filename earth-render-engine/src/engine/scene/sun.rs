use bevy::prelude::*;

use crate::constants::render_settings::{
    SUN_MARKER_COLOR, SUN_MARKER_DISTANCE, SUN_MARKER_RADIUS, SUN_MARKER_SUBDIVISIONS,
};

/// Shared sun direction, normalized at construction. Read-only for the
/// scene children; immutable in the current scope. A future day/night
/// animator replaces the whole vector, never a single component.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SunDirection(pub Vec3);

impl SunDirection {
    pub fn new(direction: Vec3) -> Self {
        Self(direction.normalize())
    }
}

impl Default for SunDirection {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 1.0))
    }
}

/// Marker component for the sun locator mesh.
#[derive(Component)]
pub struct SunMarker;

/// Where the marker sits along the sun ray.
pub fn sun_marker_translation(direction: &SunDirection) -> Vec3 {
    direction.0 * SUN_MARKER_DISTANCE
}

/// Small faceted sphere showing where the light comes from. Flat unlit
/// yellow; a locator, not a light source. Placed once at spawn.
pub fn spawn_sun_marker(
    commands: &mut Commands,
    direction: &SunDirection,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let mesh = match Sphere::new(SUN_MARKER_RADIUS)
        .mesh()
        .ico(SUN_MARKER_SUBDIVISIONS)
    {
        Ok(mesh) => mesh,
        Err(err) => {
            warn!("Icosphere generation failed ({err}), falling back to UV sphere");
            Sphere::new(SUN_MARKER_RADIUS).mesh().uv(8, 8)
        }
    };

    commands.spawn((
        SunMarker,
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: SUN_MARKER_COLOR.into(),
            unlit: true,
            ..default()
        })),
        Transform::from_translation(sun_marker_translation(direction)),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_is_normalized_on_construction() {
        for raw in [
            Vec3::new(0.0, 0.0, 7.5),
            Vec3::new(3.0, -4.0, 12.0),
            Vec3::new(-0.001, 0.002, 0.003),
        ] {
            let direction = SunDirection::new(raw);
            assert!(
                (direction.0.length() - 1.0).abs() < 1e-6,
                "sun direction from {raw:?} should be unit length, got {}",
                direction.0.length()
            );
        }
    }

    #[test]
    fn default_direction_points_along_positive_z() {
        assert_eq!(SunDirection::default().0, Vec3::Z);
    }

    #[test]
    fn marker_sits_at_fixed_distance_along_the_sun_ray() {
        let direction = SunDirection::new(Vec3::new(1.0, 1.0, 0.0));
        let translation = sun_marker_translation(&direction);
        assert!(
            (translation - direction.0 * SUN_MARKER_DISTANCE).length() < 1e-6,
            "marker must sit at direction * {SUN_MARKER_DISTANCE}, got {translation:?}"
        );
        assert!(
            (translation.length() - SUN_MARKER_DISTANCE).abs() < 1e-6,
            "marker distance from origin must equal the configured distance"
        );
    }
}
