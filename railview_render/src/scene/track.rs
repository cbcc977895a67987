/// Track data consumed by the render core

use glam::Vec3;

/// The track as the renderer sees it: the editable control points.
///
/// Curve evaluation and vehicle kinematics live in the application; the
/// renderer only needs the points for markers, picking and the audio
/// focus.
#[derive(Debug, Clone, Default)]
pub struct TrackData {
    pub control_points: Vec<Vec3>,
}

impl TrackData {
    pub fn new(control_points: Vec<Vec3>) -> Self {
        Self { control_points }
    }
}
