/// Camera context configuration
///
/// Names and placeholder values used when the renderer-side camera is
/// created by `CameraContext::begin()`, before any scene camera is known.

use glam::Vec3;

/// Camera context configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ContextConfig {
    /// Name of the renderer-side camera. The renderer refers to the
    /// default dicing camera by this name.
    pub camera_name: String,
    /// Handle of the projection shading node attached to the camera
    pub projection_node_handle: String,
    /// Field of view (degrees) of the placeholder projection
    pub placeholder_fov: f32,
    /// Translation of the placeholder camera transform
    pub placeholder_translation: Vec3,
    /// Beginning of the normalized shutter interval
    pub shutter_open_time: f32,
    /// End of the normalized shutter interval
    pub shutter_close_time: f32,
    /// Additional shutter curve control points (c1 c2 d1 d2 e1 e2 f1 f2)
    pub shutter_opening: [f32; 8],
    /// Negative bias subtracted from pixel bounds when quantizing the crop window
    pub crop_window_bias: f32,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            camera_name: "main_cam".to_string(),
            projection_node_handle: "main_cam_projection".to_string(),
            placeholder_fov: 60.0,
            placeholder_translation: Vec3::new(0.0, 0.0, -5.0),
            shutter_open_time: 0.0,
            shutter_close_time: 0.05,
            shutter_opening: [0.0, 0.0, 0.0, 0.0, 0.05, 1.0, 0.35, 0.0],
            crop_window_bias: crate::geometry::CROP_WINDOW_BIAS,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
