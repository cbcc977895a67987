/// Frame orchestration module

pub mod frame;
pub mod orchestrator;

pub use frame::*;
pub use orchestrator::*;
