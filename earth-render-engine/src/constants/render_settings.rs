/// Shared configuration for the globe scene.
use bevy::color::Srgba;
use bevy::math::{Vec2, Vec3};

/// Radius of the earth surface sphere.
pub const EARTH_RADIUS: f32 = 2.0;

/// Sectors and stacks of the UV sphere; enough tessellation to hide faceting.
pub const EARTH_SEGMENTS: u32 = 32;

/// Self-rotation advance per frame (radians around +Y).
pub const EARTH_ROTATION_STEP: f32 = 0.001;

/// The glow shell is this factor larger than the surface sphere.
pub const ATMOSPHERE_SCALE: f32 = 1.04;

/// Distance of the sun marker along the sun ray.
pub const SUN_MARKER_DISTANCE: f32 = 4.0;

/// Radius of the sun marker icosphere.
pub const SUN_MARKER_RADIUS: f32 = 0.1;

/// Icosphere subdivisions; low on purpose so the marker reads as faceted.
pub const SUN_MARKER_SUBDIVISIONS: u32 = 2;

/// Anisotropic filtering level applied to all three colour maps.
pub const TEXTURE_ANISOTROPY: u16 = 8;

/// Fixed camera start position, looking at the origin.
pub const CAMERA_POSITION: Vec3 = Vec3::new(12.0, 5.0, 1.0);

/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 25.0;

/// Smoothstep edges (on the normal·sun term) for the surface day/night blend.
pub const DAY_MIX_EDGES: Vec2 = Vec2::new(-0.25, 0.5);

/// Smoothstep edges for the twilight-to-day tint near the terminator.
pub const SURFACE_ATMOSPHERE_MIX_EDGES: Vec2 = Vec2::new(-0.25, 0.75);

/// Smoothstep edges for the shell's twilight-to-day colour mix.
pub const SHELL_DAY_MIX_EDGES: Vec2 = Vec2::new(-0.5, 1.0);

/// Daylit atmosphere blue (#00aaff).
pub const ATMOSPHERE_DAY_COLOR: Srgba = Srgba::rgb(0.0, 0.666_7, 1.0);

/// Terminator orange (#ff6600).
pub const ATMOSPHERE_TWILIGHT_COLOR: Srgba = Srgba::rgb(1.0, 0.4, 0.0);

/// Sun marker colour.
pub const SUN_MARKER_COLOR: Srgba = Srgba::rgb(1.0, 1.0, 0.0);

/// Default texture paths under `assets/`, overridable by the scene manifest.
pub const DEFAULT_DAY_TEXTURE: &str = "earth/day.jpg";
pub const DEFAULT_NIGHT_TEXTURE: &str = "earth/night.jpg";
pub const DEFAULT_SPECULAR_CLOUDS_TEXTURE: &str = "earth/specular_clouds.jpg";

/// Optional scene manifest path under `assets/`.
pub const SCENE_MANIFEST_PATH: &str = "earth/scene_manifest.json";
