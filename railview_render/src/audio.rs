//! Audio listener seam
//!
//! The render core steers the listener: each frame it reports where the
//! scene's focus point is (the selected control point, or the ambient
//! source position when nothing is selected). The application plugs in a
//! real audio backend behind the trait.

use glam::Vec3;

/// Ambient source position used when nothing is selected
pub const DEFAULT_SOURCE_POSITION: Vec3 = Vec3::new(0.0, 5.0, 0.0);

/// Something that follows the scene's focus point
pub trait AudioListener {
    /// Update the listener's world-space position
    fn set_listener_position(&mut self, position: Vec3);
}

/// No-op listener for headless use and tests
#[derive(Debug, Default)]
pub struct NullAudio {
    /// Last position reported, for inspection
    pub last_position: Option<Vec3>,
}

impl AudioListener for NullAudio {
    fn set_listener_position(&mut self, position: Vec3) {
        self.last_position = Some(position);
    }
}
