/// Camera module - viewing modes and the interactive rig seam

pub mod mode;
pub mod rig;

pub use mode::*;
pub use rig::*;
