//! Shared projection/view uniform block
//!
//! Every scene program reads camera matrices from one uniform block bound
//! at a fixed slot, so per-frame camera state is uploaded exactly once no
//! matter how many programs draw.

use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::error::Result;
use crate::gfx::{FrameCommands, GraphicsDevice, UniformBlock, UniformBlockDesc};

/// Binding slot shared by every scene program
pub const TRANSFORM_BINDING_SLOT: u32 = 0;

/// GPU layout of the shared block: projection first, then view
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct TransformData {
    pub projection: Mat4,
    pub view: Mat4,
}

/// Owner of the shared transform block
pub struct TransformBroadcast {
    data: TransformData,
    block: Arc<dyn UniformBlock>,
}

impl TransformBroadcast {
    /// Allocate the block with identity matrices
    pub fn new(device: &mut dyn GraphicsDevice) -> Result<Self> {
        let data = TransformData {
            projection: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
        };
        let block = device.create_uniform_block(&UniformBlockDesc {
            size: std::mem::size_of::<TransformData>() as u64,
            label: "camera_transforms",
        })?;
        let broadcast = Self { data, block };
        broadcast.upload()?;
        Ok(broadcast)
    }

    /// Replace both matrices and upload the block in one write
    pub fn write(&mut self, projection: Mat4, view: Mat4) -> Result<()> {
        self.data.projection = projection;
        self.data.view = view;
        self.upload()
    }

    fn upload(&self) -> Result<()> {
        self.block.write(0, bytemuck::bytes_of(&self.data))
    }

    /// Bind the block at the shared slot for the current frame
    pub fn bind_for_read(&self, commands: &mut dyn FrameCommands) {
        commands.bind_uniform_block(&self.block, TRANSFORM_BINDING_SLOT);
    }

    /// CPU mirror of the last written matrices
    pub fn data(&self) -> &TransformData {
        &self.data
    }

    pub fn projection(&self) -> Mat4 {
        self.data.projection
    }

    pub fn view(&self) -> Mat4 {
        self.data.view
    }
}

#[cfg(test)]
#[path = "transforms_tests.rs"]
mod tests;
