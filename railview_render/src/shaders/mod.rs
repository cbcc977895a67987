/// Shader registry module

pub mod library;
pub mod sources;

pub use library::*;
