/// Custom shader materials for the globe surface and the glow shell.
///
/// The two materials are independent: each carries its own copy of the sun
/// direction, rewritten in place every frame by the scene systems. The
/// bindings here must stay in sync with the `@group(2)` declarations in
/// `assets/shaders/earth.wgsl` and `assets/shaders/atmosphere.wgsl`.
use bevy::pbr::{Material, MaterialPipeline, MaterialPipelineKey};
use bevy::prelude::*;
use bevy::reflect::TypePath;
use bevy::render::mesh::MeshVertexBufferLayoutRef;
use bevy::render::render_resource::{
    AsBindGroup, Face, RenderPipelineDescriptor, ShaderRef, SpecializedMeshPipelineError,
};

use crate::constants::render_settings::{
    DAY_MIX_EDGES, SHELL_DAY_MIX_EDGES, SURFACE_ATMOSPHERE_MIX_EDGES,
};

/// Day/night surface material. Textures and colours are set once at
/// spawn; `sun_direction` is the only per-frame uniform.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct EarthMaterial {
    #[texture(0)]
    #[sampler(1)]
    pub day_texture: Handle<Image>,

    #[texture(2)]
    #[sampler(3)]
    pub night_texture: Handle<Image>,

    #[texture(4)]
    #[sampler(5)]
    pub specular_clouds_texture: Handle<Image>,

    /// Unit sun direction in world space (xyz; w unused).
    #[uniform(6)]
    pub sun_direction: Vec4,

    #[uniform(7)]
    pub atmosphere_day_color: LinearRgba,

    #[uniform(8)]
    pub atmosphere_twilight_color: LinearRgba,

    /// xy: day-mix smoothstep edges, zw: terminator tint edges.
    #[uniform(9)]
    pub blend_edges: Vec4,
}

impl EarthMaterial {
    pub fn new(
        day_texture: Handle<Image>,
        night_texture: Handle<Image>,
        specular_clouds_texture: Handle<Image>,
        sun_direction: Vec3,
        atmosphere_day_color: LinearRgba,
        atmosphere_twilight_color: LinearRgba,
    ) -> Self {
        Self {
            day_texture,
            night_texture,
            specular_clouds_texture,
            sun_direction: sun_direction.extend(0.0),
            atmosphere_day_color,
            atmosphere_twilight_color,
            blend_edges: Vec4::new(
                DAY_MIX_EDGES.x,
                DAY_MIX_EDGES.y,
                SURFACE_ATMOSPHERE_MIX_EDGES.x,
                SURFACE_ATMOSPHERE_MIX_EDGES.y,
            ),
        }
    }
}

impl Material for EarthMaterial {
    fn fragment_shader() -> ShaderRef {
        "shaders/earth.wgsl".into()
    }
}

/// Limb glow material, alpha-blended and drawn on back faces only so the
/// far side of the shell reads as a halo around the surface.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct AtmosphereMaterial {
    /// Unit sun direction in world space (xyz; w unused).
    #[uniform(0)]
    pub sun_direction: Vec4,

    #[uniform(1)]
    pub atmosphere_day_color: LinearRgba,

    #[uniform(2)]
    pub atmosphere_twilight_color: LinearRgba,

    /// xy: twilight-to-day smoothstep edges (zw unused).
    #[uniform(3)]
    pub blend_edges: Vec4,
}

impl AtmosphereMaterial {
    pub fn new(
        sun_direction: Vec3,
        atmosphere_day_color: LinearRgba,
        atmosphere_twilight_color: LinearRgba,
    ) -> Self {
        Self {
            sun_direction: sun_direction.extend(0.0),
            atmosphere_day_color,
            atmosphere_twilight_color,
            blend_edges: Vec4::new(SHELL_DAY_MIX_EDGES.x, SHELL_DAY_MIX_EDGES.y, 0.0, 0.0),
        }
    }
}

impl Material for AtmosphereMaterial {
    fn fragment_shader() -> ShaderRef {
        "shaders/atmosphere.wgsl".into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Blend
    }

    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        _layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        // Cull front faces so only the far side of the shell is visible.
        descriptor.primitive.cull_mode = Some(Face::Front);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earth_material_packs_blend_edges_from_settings() {
        let material = EarthMaterial::new(
            Handle::default(),
            Handle::default(),
            Handle::default(),
            Vec3::Z,
            LinearRgba::BLUE,
            LinearRgba::RED,
        );
        assert_eq!(material.blend_edges.x, DAY_MIX_EDGES.x);
        assert_eq!(material.blend_edges.y, DAY_MIX_EDGES.y);
        assert_eq!(material.blend_edges.z, SURFACE_ATMOSPHERE_MIX_EDGES.x);
        assert_eq!(material.blend_edges.w, SURFACE_ATMOSPHERE_MIX_EDGES.y);
    }

    #[test]
    fn shell_material_blends_and_carries_its_own_sun_copy() {
        let material = AtmosphereMaterial::new(Vec3::Z, LinearRgba::BLUE, LinearRgba::RED);
        assert_eq!(
            material.alpha_mode(),
            AlphaMode::Blend,
            "the shell must be alpha-blended over the scene"
        );
        assert_eq!(material.sun_direction, Vec3::Z.extend(0.0));
    }
}
