//! Error types for the Railview render core
//!
//! Only fatal initialization failures propagate out of the crate as errors.
//! Every other condition (wave-table overflow, pick misses, resources that
//! are not ready yet) degrades gracefully and is absorbed locally.

use std::fmt;

/// Result type for render-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Railview render-core errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (GPU driver, device loss, etc.)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource (program, target, mesh, uniform block)
    InvalidResource(String),

    /// Initialization failed (device, targets, shader registry)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
