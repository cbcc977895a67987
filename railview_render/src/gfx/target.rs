/// Render target interface - offscreen color/depth attachments

use bitflags::bitflags;

bitflags! {
    /// Attachments a render target carries
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct AttachmentFlags: u32 {
        const COLOR   = 1 << 0;
        const DEPTH   = 1 << 1;
        const STENCIL = 1 << 2;
    }
}

/// Render target descriptor
#[derive(Debug, Clone, Copy)]
pub struct TargetDesc {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Attachments to allocate
    pub attachments: AttachmentFlags,
    /// Debug label
    pub label: &'static str,
}

/// GPU render target
///
/// Backend resources are released when the last `Arc` handle drops.
pub trait GpuTarget: Send + Sync {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Attachments this target carries
    fn attachments(&self) -> AttachmentFlags;

    /// Debug label
    fn label(&self) -> &str;
}
