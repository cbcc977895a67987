/// Graphics abstraction module - device, resources and per-frame commands

// Module declarations
pub mod device;
pub mod program;
pub mod target;
pub mod buffer;
pub mod mesh;
pub mod commands;

#[cfg(test)]
pub(crate) mod mock_device;

// Re-export everything from the submodules
pub use device::*;
pub use program::*;
pub use target::*;
pub use buffer::*;
pub use mesh::*;
pub use commands::*;
