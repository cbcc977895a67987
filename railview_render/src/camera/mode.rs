/// Viewing modes and per-frame camera resolution

use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Vec3};

use crate::camera::CameraRig;

/// Near plane for the perspective modes
pub const PERSPECTIVE_NEAR: f32 = 0.01;
/// Far plane for the perspective modes
pub const PERSPECTIVE_FAR: f32 = 5000.0;

/// Half-extent of the top view along the larger viewport axis
pub const ORTHO_HALF_EXTENT: f32 = 110.0;
/// Top view near plane (behind the eye; the scene straddles the origin)
pub const ORTHO_NEAR: f32 = 200.0;
/// Top view far plane
pub const ORTHO_FAR: f32 = -200.0;

/// Number of scene lights (directional, point, spot)
pub const SCENE_LIGHT_COUNT: usize = 3;

/// How the scene is viewed this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    /// Free orbiting perspective camera
    WorldOrbit,
    /// Straight-down orthographic schematic view
    TopOrthographic,
    /// Perspective camera attached to the moving vehicle
    RideAlong,
}

/// Camera state resolved for one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameCamera {
    pub mode: CameraMode,
    pub projection: Mat4,
    pub view: Mat4,
    /// World-space eye position (for specular and audio)
    pub eye: Vec3,
    /// Which scene lights are active this frame
    pub lights: [bool; SCENE_LIGHT_COUNT],
}

/// Resolve the camera for a frame.
///
/// The top view fits a fixed world half-extent to the larger viewport
/// axis, so the schematic never stretches when the window is resized.
/// The point and spot lights are disabled in the top view; the schematic
/// reads better under flat directional light.
pub fn resolve(
    mode: CameraMode,
    viewport_width: u32,
    viewport_height: u32,
    rig: &dyn CameraRig,
) -> FrameCamera {
    let width = viewport_width.max(1) as f32;
    let height = viewport_height.max(1) as f32;

    match mode {
        CameraMode::TopOrthographic => {
            let (half_width, half_height) = if width > height {
                (ORTHO_HALF_EXTENT, ORTHO_HALF_EXTENT * height / width)
            } else {
                (ORTHO_HALF_EXTENT * width / height, ORTHO_HALF_EXTENT)
            };
            FrameCamera {
                mode,
                projection: Mat4::orthographic_rh(
                    -half_width,
                    half_width,
                    -half_height,
                    half_height,
                    ORTHO_NEAR,
                    ORTHO_FAR,
                ),
                view: Mat4::from_rotation_x(-FRAC_PI_2),
                eye: Vec3::new(0.0, ORTHO_HALF_EXTENT, 0.0),
                lights: [true, false, false],
            }
        }
        CameraMode::WorldOrbit | CameraMode::RideAlong => FrameCamera {
            mode,
            projection: Mat4::perspective_rh(
                rig.fov_degrees().to_radians(),
                width / height,
                PERSPECTIVE_NEAR,
                PERSPECTIVE_FAR,
            ),
            view: rig.view_matrix(),
            eye: rig.position(),
            lights: [true; SCENE_LIGHT_COUNT],
        },
    }
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod tests;
