//! Orbit camera for the globe scene.

pub mod orbit_camera;
