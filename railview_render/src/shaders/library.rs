/// Shader program registry
///
/// Programs are compiled up front from embedded sources and fetched by
/// identifier. Requesting a program before `ensure_loaded` has run is a
/// caller bug and reported as `InvalidResource`.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::gfx::{GpuProgram, GraphicsDevice, ParamKind, ParamSpec, ProgramDesc};
use crate::render_info;
use crate::shaders::sources;

/// Built-in program identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgramId {
    /// Scene geometry lit by the directional sun
    DirectionalLight,
    /// Scene geometry lit by the fixed point lamp
    PointLight,
    /// Scene geometry lit by the camera-mounted spot
    SpotLight,
    /// Unlit emissive marker (light sources, control points)
    LightSource,
    /// Fullscreen composite of the main offscreen target
    MainScreen,
    /// Filtered inset composite of the sub target
    SubScreen,
    /// Displaced water surface
    WaterSurface,
    /// Height-field relaxation step
    HeightField,
}

impl ProgramId {
    /// Every built-in program, in load order
    pub const ALL: [ProgramId; 8] = [
        ProgramId::DirectionalLight,
        ProgramId::PointLight,
        ProgramId::SpotLight,
        ProgramId::LightSource,
        ProgramId::MainScreen,
        ProgramId::SubScreen,
        ProgramId::WaterSurface,
        ProgramId::HeightField,
    ];

    /// Descriptor for this program: name, sources and declared parameters
    pub fn desc(&self) -> ProgramDesc {
        match self {
            ProgramId::DirectionalLight => ProgramDesc {
                name: "directional_light",
                vertex_source: sources::LIGHT_VERT,
                fragment_source: sources::DIRECTIONAL_FRAG,
                params: DIRECTIONAL_PARAMS,
            },
            ProgramId::PointLight => ProgramDesc {
                name: "point_light",
                vertex_source: sources::LIGHT_VERT,
                fragment_source: sources::POINT_FRAG,
                params: POINT_PARAMS,
            },
            ProgramId::SpotLight => ProgramDesc {
                name: "spot_light",
                vertex_source: sources::LIGHT_VERT,
                fragment_source: sources::SPOT_FRAG,
                params: SPOT_PARAMS,
            },
            ProgramId::LightSource => ProgramDesc {
                name: "light_source",
                vertex_source: sources::LIGHT_VERT,
                fragment_source: sources::LIGHT_SOURCE_FRAG,
                params: LIGHT_SOURCE_PARAMS,
            },
            ProgramId::MainScreen => ProgramDesc {
                name: "main_screen",
                vertex_source: sources::SCREEN_VERT,
                fragment_source: sources::MAIN_SCREEN_FRAG,
                params: SCREEN_PARAMS,
            },
            ProgramId::SubScreen => ProgramDesc {
                name: "sub_screen",
                vertex_source: sources::SCREEN_VERT,
                fragment_source: sources::SUB_SCREEN_FRAG,
                params: SCREEN_PARAMS,
            },
            ProgramId::WaterSurface => ProgramDesc {
                name: "water_surface",
                vertex_source: sources::WATER_VERT,
                fragment_source: sources::WATER_FRAG,
                params: WATER_PARAMS,
            },
            ProgramId::HeightField => ProgramDesc {
                name: "height_field",
                vertex_source: sources::HEIGHT_FIELD_VERT,
                fragment_source: sources::HEIGHT_FIELD_FRAG,
                params: HEIGHT_FIELD_PARAMS,
            },
        }
    }
}

const DIRECTIONAL_PARAMS: &[ParamSpec] = &[
    ParamSpec { name: "model", kind: ParamKind::Mat4 },
    ParamSpec { name: "objectColor", kind: ParamKind::Vec3 },
    ParamSpec { name: "viewPos", kind: ParamKind::Vec3 },
    ParamSpec { name: "material.shininess", kind: ParamKind::Float },
    ParamSpec { name: "dirLight.direction", kind: ParamKind::Vec3 },
    ParamSpec { name: "dirLight.ambient", kind: ParamKind::Vec3 },
    ParamSpec { name: "dirLight.diffuse", kind: ParamKind::Vec3 },
    ParamSpec { name: "dirLight.specular", kind: ParamKind::Vec3 },
];

const POINT_PARAMS: &[ParamSpec] = &[
    ParamSpec { name: "model", kind: ParamKind::Mat4 },
    ParamSpec { name: "objectColor", kind: ParamKind::Vec3 },
    ParamSpec { name: "viewPos", kind: ParamKind::Vec3 },
    ParamSpec { name: "material.shininess", kind: ParamKind::Float },
    ParamSpec { name: "pointLight.position", kind: ParamKind::Vec3 },
    ParamSpec { name: "pointLight.ambient", kind: ParamKind::Vec3 },
    ParamSpec { name: "pointLight.diffuse", kind: ParamKind::Vec3 },
    ParamSpec { name: "pointLight.specular", kind: ParamKind::Vec3 },
    ParamSpec { name: "pointLight.constant", kind: ParamKind::Float },
    ParamSpec { name: "pointLight.linear", kind: ParamKind::Float },
    ParamSpec { name: "pointLight.quadratic", kind: ParamKind::Float },
];

const SPOT_PARAMS: &[ParamSpec] = &[
    ParamSpec { name: "model", kind: ParamKind::Mat4 },
    ParamSpec { name: "objectColor", kind: ParamKind::Vec3 },
    ParamSpec { name: "viewPos", kind: ParamKind::Vec3 },
    ParamSpec { name: "material.shininess", kind: ParamKind::Float },
    ParamSpec { name: "spotLight.position", kind: ParamKind::Vec3 },
    ParamSpec { name: "spotLight.direction", kind: ParamKind::Vec3 },
    ParamSpec { name: "spotLight.cutOff", kind: ParamKind::Float },
    ParamSpec { name: "spotLight.ambient", kind: ParamKind::Vec3 },
    ParamSpec { name: "spotLight.diffuse", kind: ParamKind::Vec3 },
    ParamSpec { name: "spotLight.specular", kind: ParamKind::Vec3 },
    ParamSpec { name: "spotLight.constant", kind: ParamKind::Float },
    ParamSpec { name: "spotLight.linear", kind: ParamKind::Float },
    ParamSpec { name: "spotLight.quadratic", kind: ParamKind::Float },
];

const LIGHT_SOURCE_PARAMS: &[ParamSpec] = &[
    ParamSpec { name: "model", kind: ParamKind::Mat4 },
    ParamSpec { name: "objectColor", kind: ParamKind::Vec3 },
];

const SCREEN_PARAMS: &[ParamSpec] = &[
    ParamSpec { name: "screenTexture", kind: ParamKind::Int },
];

const WATER_PARAMS: &[ParamSpec] = &[
    ParamSpec { name: "model", kind: ParamKind::Mat4 },
    ParamSpec { name: "time", kind: ParamKind::Float },
    ParamSpec { name: "numWaves", kind: ParamKind::Int },
    ParamSpec { name: "amplitude", kind: ParamKind::FloatArray(8) },
    ParamSpec { name: "wavelength", kind: ParamKind::FloatArray(8) },
    ParamSpec { name: "speed", kind: ParamKind::FloatArray(8) },
    ParamSpec { name: "direction", kind: ParamKind::Vec2Array(8) },
    ParamSpec { name: "EyePos", kind: ParamKind::Vec3 },
];

const HEIGHT_FIELD_PARAMS: &[ParamSpec] = &[
    ParamSpec { name: "heightMap", kind: ParamKind::Int },
    ParamSpec { name: "u_center", kind: ParamKind::Vec2 },
    ParamSpec { name: "u_mode", kind: ParamKind::Int },
];

/// Registry of compiled built-in programs
pub struct ShaderLibrary {
    programs: FxHashMap<ProgramId, Arc<dyn GpuProgram>>,
}

impl ShaderLibrary {
    pub fn new() -> Self {
        Self {
            programs: FxHashMap::default(),
        }
    }

    /// Compile every built-in program that is not loaded yet.
    /// Safe to call more than once; already-loaded programs are kept.
    pub fn ensure_loaded(&mut self, device: &mut dyn GraphicsDevice) -> Result<()> {
        for id in ProgramId::ALL {
            if self.programs.contains_key(&id) {
                continue;
            }
            let desc = id.desc();
            let program = device.create_program(&desc)?;
            self.programs.insert(id, program);
        }
        render_info!(
            "railview::ShaderLibrary",
            "{} programs loaded",
            self.programs.len()
        );
        Ok(())
    }

    /// Fetch a loaded program
    pub fn program(&self, id: ProgramId) -> Result<&Arc<dyn GpuProgram>> {
        self.programs.get(&id).ok_or_else(|| {
            Error::InvalidResource(format!("program '{}' not loaded", id.desc().name))
        })
    }

    /// Number of loaded programs
    pub fn loaded_count(&self) -> usize {
        self.programs.len()
    }
}

impl Default for ShaderLibrary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "library_tests.rs"]
mod tests;
