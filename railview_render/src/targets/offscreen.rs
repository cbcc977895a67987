/// Offscreen render target wrapper

use std::sync::Arc;

use crate::error::Result;
use crate::gfx::{
    AttachmentFlags, ClearOps, FrameCommands, GpuTarget, GraphicsDevice, TargetDesc,
};
use crate::render_debug;

/// An offscreen target that can be drawn into one pass and sampled the next.
///
/// Targets are created at a fixed size and never resized: when the viewport
/// changes, the owner drops the target and creates a new one. The backend
/// resource is released when the wrapper (and any outstanding handles) drop.
pub struct OffscreenTarget {
    gpu: Arc<dyn GpuTarget>,
    desc: TargetDesc,
}

impl OffscreenTarget {
    /// Allocate a target. Allocation failure is fatal and propagates.
    pub fn create(
        device: &mut dyn GraphicsDevice,
        label: &'static str,
        width: u32,
        height: u32,
        attachments: AttachmentFlags,
    ) -> Result<Self> {
        let desc = TargetDesc {
            width,
            height,
            attachments,
            label,
        };
        let gpu = device.create_target(&desc)?;
        render_debug!(
            "railview::OffscreenTarget",
            "created target '{}' {}x{}",
            label,
            width,
            height
        );
        Ok(Self { gpu, desc })
    }

    /// Bind as the draw destination, applying the requested clears
    pub fn bind_as_draw(&self, commands: &mut dyn FrameCommands, clear: ClearOps) {
        commands.begin_target(Some(&self.gpu), clear);
    }

    /// Bind the color attachment as a texture at the given unit
    pub fn bind_as_read(&self, commands: &mut dyn FrameCommands, unit: u32) {
        commands.bind_target_texture(unit, &self.gpu);
    }

    pub fn width(&self) -> u32 {
        self.desc.width
    }

    pub fn height(&self) -> u32 {
        self.desc.height
    }

    pub fn attachments(&self) -> AttachmentFlags {
        self.desc.attachments
    }

    pub fn label(&self) -> &'static str {
        self.desc.label
    }
}

#[cfg(test)]
#[path = "offscreen_tests.rs"]
mod tests;
