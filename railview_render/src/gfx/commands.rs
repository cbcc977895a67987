/// Per-frame command recording interface

use std::sync::Arc;

use glam::Mat4;

use crate::error::Result;
use crate::gfx::{GpuMesh, GpuProgram, GpuTarget, UniformBlock};

/// Viewport rectangle with depth range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

impl Viewport {
    /// Full-target viewport with the standard depth range
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: width as f32,
            height: height as f32,
            min_depth: 0.0,
            max_depth: 1.0,
        }
    }
}

/// Clear operations applied when a target is bound for drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearOps {
    /// Color clear value, if the color attachment should be cleared
    pub color: Option<[f32; 4]>,
    /// Depth clear value, if the depth attachment should be cleared
    pub depth: Option<f32>,
    /// Stencil clear value, if the stencil attachment should be cleared
    pub stencil: Option<u32>,
}

impl ClearOps {
    /// Standard scene clear: dark blue, depth 1.0, stencil 0
    pub fn scene_default() -> Self {
        Self {
            color: Some([0.0, 0.0, 0.3, 0.0]),
            depth: Some(1.0),
            stencil: Some(0),
        }
    }

    /// No clearing, preserve existing attachment contents
    pub fn none() -> Self {
        Self {
            color: None,
            depth: None,
            stencil: None,
        }
    }
}

/// Screen-space region for pick queries
#[derive(Debug, Clone, Copy)]
pub struct PickRegion {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Command recording for one frame
///
/// Obtained from `GraphicsDevice::begin_frame` and submitted with
/// `GraphicsDevice::end_frame`. Drawing happens between a `begin_target` /
/// `end_target` pair; `begin_target(None, ..)` binds the window surface.
pub trait FrameCommands: Send + Sync {
    /// Set the active viewport
    fn set_viewport(&mut self, viewport: Viewport);

    /// Bind a render target for drawing (`None` = window surface) and
    /// apply the requested clears
    fn begin_target(&mut self, target: Option<&Arc<dyn GpuTarget>>, clear: ClearOps);

    /// Finish drawing to the current target
    fn end_target(&mut self);

    /// Bind a shader program for subsequent draws
    fn bind_program(&mut self, program: &Arc<dyn GpuProgram>);

    /// Bind a uniform block at a numbered slot
    fn bind_uniform_block(&mut self, block: &Arc<dyn UniformBlock>, slot: u32);

    /// Bind a target's color attachment as a texture at the given unit
    fn bind_target_texture(&mut self, unit: u32, target: &Arc<dyn GpuTarget>);

    /// Enable or disable color channel writes (depth writes unaffected)
    fn set_color_writes(&mut self, enabled: bool);

    /// Draw an indexed mesh
    fn draw_mesh(&mut self, mesh: &Arc<dyn GpuMesh>);

    /// Begin an identification pass over a screen region
    fn begin_pick(&mut self, region: PickRegion);

    /// Draw a mesh tagged with a pick identifier (must be non-zero)
    fn pick_draw(&mut self, id: u32, mesh: &Arc<dyn GpuMesh>, model: &Mat4);

    /// Resolve the identification pass: the identifier of the frontmost
    /// tagged draw covering the region, or `None` if nothing hit
    fn end_pick(&mut self) -> Result<Option<u32>>;
}
