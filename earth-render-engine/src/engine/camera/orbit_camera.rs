//! Orbit camera controller.
//!
//! Left-drag orbits around the globe; zoom is disabled so the framing
//! stays fixed. The transform is smoothed toward the orbit target the same
//! way every frame.

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;

use crate::constants::render_settings::CAMERA_POSITION;

const YAW_SENSITIVITY: f32 = 0.0035;
const PITCH_SENSITIVITY: f32 = 0.0030;
const PITCH_LIMIT: f32 = 1.55;

#[derive(Resource)]
pub struct OrbitCamera {
    pub focus_point: Vec3,
    /// Fixed orbit distance; never changed at runtime (zoom disabled).
    pub radius: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl OrbitCamera {
    /// Derive orbit angles from an initial position looking at the origin.
    pub fn from_position(position: Vec3) -> Self {
        let radius = position.length();
        Self {
            focus_point: Vec3::ZERO,
            radius,
            yaw: position.x.atan2(position.z),
            pitch: (position.y / radius).asin(),
        }
    }

    /// Camera translation for the current orbit angles.
    pub fn translation(&self) -> Vec3 {
        let rotation = Quat::from_euler(EulerRot::YXZ, self.yaw, -self.pitch, 0.0);
        self.focus_point + rotation * (Vec3::Z * self.radius)
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_position(CAMERA_POSITION)
    }
}

pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    if mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO {
        orbit.yaw -= mouse_delta.x * YAW_SENSITIVITY;
        orbit.pitch += mouse_delta.y * PITCH_SENSITIVITY;
        orbit.pitch = orbit.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    // Zoom stays disabled: the radius is fixed, wheel input is ignored.

    let target_pos = orbit.translation();
    let target_rot = Transform::from_translation(target_pos)
        .looking_at(orbit.focus_point, Vec3::Y)
        .rotation;

    let lerp_speed = (12.0 * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform.translation.lerp(target_pos, lerp_speed);
    camera_transform.rotation = camera_transform.rotation.slerp(target_rot, lerp_speed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_angles_reproduce_the_initial_position() {
        let orbit = OrbitCamera::from_position(CAMERA_POSITION);
        let translation = orbit.translation();
        assert!(
            (translation - CAMERA_POSITION).length() < 1e-4,
            "orbit translation should reproduce the start position, got {translation:?}"
        );
    }

    #[test]
    fn orbit_distance_is_invariant_under_rotation() {
        let mut orbit = OrbitCamera::from_position(CAMERA_POSITION);
        let radius = orbit.radius;
        for (yaw, pitch) in [(0.0, 0.0), (1.2, 0.4), (-2.5, -1.0), (3.1, 1.5)] {
            orbit.yaw = yaw;
            orbit.pitch = pitch;
            let distance = orbit.translation().distance(orbit.focus_point);
            assert!(
                (distance - radius).abs() < 1e-4,
                "zoom is disabled, distance must stay {radius}, got {distance} \
                 at yaw {yaw} pitch {pitch}"
            );
        }
    }
}
