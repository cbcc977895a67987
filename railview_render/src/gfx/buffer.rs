/// Uniform block interface - shared per-frame constant storage

use crate::error::Result;

/// Uniform block descriptor
#[derive(Debug, Clone, Copy)]
pub struct UniformBlockDesc {
    /// Size in bytes
    pub size: u64,
    /// Debug label
    pub label: &'static str,
}

/// GPU uniform block
///
/// A fixed-size constant buffer bindable at a numbered slot so multiple
/// programs read the same data without per-program uploads.
pub trait UniformBlock: Send + Sync {
    /// Size in bytes
    fn size(&self) -> u64;

    /// Write a byte range into the block
    fn write(&self, offset: u64, data: &[u8]) -> Result<()>;

    /// Read the current contents back (debug/test paths only)
    fn contents(&self) -> Result<Vec<u8>>;
}
