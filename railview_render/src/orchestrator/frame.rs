/// Per-frame timing and input

use std::time::Instant;

use glam::Vec2;

use crate::camera::{CameraMode, MovementFlags};

/// Wall-clock frame timer
#[derive(Debug, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous tick. The first tick returns 0.0 so a
    /// long pause before the first frame never produces a huge step.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = match self.last {
            Some(last) => now.duration_since(last).as_secs_f32(),
            None => 0.0,
        };
        self.last = Some(now);
        delta
    }
}

/// Which light the scene programs shade with this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightRig {
    /// Fixed directional sun
    Directional,
    /// Fixed point lamp
    Point,
    /// Spot mounted on the camera
    Spot,
}

/// Everything the application hands the orchestrator for one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameInput {
    /// Window surface size in pixels
    pub viewport_width: u32,
    pub viewport_height: u32,
    /// Viewing mode for this frame
    pub camera_mode: CameraMode,
    /// Active light rig
    pub light_rig: LightRig,
    /// Whether the darkening shadow sub-pass runs
    pub shadows_enabled: bool,
    /// Whether the height-field ripple simulation steps this frame
    pub height_field_active: bool,
    /// Ripple injection point in height-map UV space, if the user poked
    /// the water this frame
    pub height_field_disturbance: Option<Vec2>,
    /// Movement keys held this frame
    pub movement: MovementFlags,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            viewport_width: 800,
            viewport_height: 600,
            camera_mode: CameraMode::WorldOrbit,
            light_rig: LightRig::Directional,
            shadows_enabled: true,
            height_field_active: false,
            height_field_disturbance: None,
            movement: MovementFlags::empty(),
        }
    }
}
