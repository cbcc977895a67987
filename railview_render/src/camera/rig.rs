/// Interactive camera rig seam

use bitflags::bitflags;
use glam::{Mat4, Vec3};

bitflags! {
    /// Movement keys held this frame
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MovementFlags: u32 {
        const FORWARD  = 1 << 0;
        const BACKWARD = 1 << 1;
        const LEFT     = 1 << 2;
        const RIGHT    = 1 << 3;
    }
}

/// A camera the application controls (orbit, fly, ride-along).
///
/// The render core never moves the camera itself; it asks the rig for the
/// current view each frame and forwards held movement keys in the modes
/// where free movement applies.
pub trait CameraRig {
    /// Current view matrix
    fn view_matrix(&self) -> Mat4;

    /// Current world-space eye position
    fn position(&self) -> Vec3;

    /// Vertical field of view in degrees
    fn fov_degrees(&self) -> f32;

    /// Apply held movement keys over a time step
    fn apply_movement(&mut self, movement: MovementFlags, delta_seconds: f32);
}
