use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera projection, initial placement and control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Aspect ratio used before the first resize.
    pub initial_aspect: f32,
    /// Distance from the eye to the cube center.
    pub eye_distance: f32,
    /// Closest the mouse wheel can bring the eye.
    pub min_eye_distance: f32,
    /// Farthest the mouse wheel can push the eye.
    pub max_eye_distance: f32,
    /// Initial tilt about X, in degrees.
    pub pitch: f32,
    /// Initial turn about Y, in degrees.
    pub yaw: f32,
    /// Degrees of free rotation per frame while an arrow key is held.
    pub rotate_step: f32,
    /// Eye distance change per scroll line.
    pub zoom_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
            initial_aspect: 1080.0 / 720.0,
            eye_distance: 10.0,
            min_eye_distance: 4.0,
            max_eye_distance: 40.0,
            pitch: 30.0,
            yaw: -30.0,
            rotate_step: 1.0,
            zoom_speed: 0.5,
        }
    }
}
