/// Parameter builders for the renderer camera, clip planes and options.
///
/// Every builder is a pure function of the scene camera and framing. The
/// camera context calls them on commit.

use glam::IVec2;
use crate::camera::{SceneCamera, Projection};
use crate::framing::{ConformWindowPolicy, Framing};
use crate::geometry::{self, ClipPlane};
use super::keys;
use super::param_list::ParamList;

/// Projection shading node attached to the renderer camera
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionNode {
    /// Projection shader name (e.g. "PxrPerspective")
    pub shader: &'static str,
    /// Node handle, unique within the camera
    pub handle: String,
    /// Shader parameters
    pub params: ParamList,
}

impl ProjectionNode {
    pub fn new(shader: &'static str, handle: impl Into<String>, params: ParamList) -> Self {
        Self { shader, handle: handle.into(), params }
    }
}

/// Projection shader name for a projection kind.
pub fn projection_shader(projection: Projection) -> &'static str {
    match projection {
        Projection::Perspective => keys::PERSPECTIVE_SHADER,
        Projection::Orthographic => keys::ORTHOGRAPHIC_SHADER,
    }
}

/// Projection shader parameters for a scene camera.
///
/// - `fStop` is always set; infinity when the camera has none (no depth of field).
/// - `focalLength` and `focalDistance` only when positive: zero means the
///   scene did not provide one.
/// - `fov` is fixed at 90 degrees for perspective cameras. The actual
///   framing is carried by the screen window.
pub fn compute_node_params(camera: &dyn SceneCamera) -> ParamList {
    let mut params = ParamList::new();

    let f_stop = camera.f_stop();
    params.set_float(keys::F_STOP, if f_stop > 0.0 { f_stop } else { f32::INFINITY });

    let focal_length = camera.focal_length();
    if focal_length > 0.0 {
        params.set_float(keys::FOCAL_LENGTH, focal_length);
    }

    let focus_distance = camera.focus_distance();
    if focus_distance > 0.0 {
        params.set_float(keys::FOCAL_DISTANCE, focus_distance);
    }

    if camera.projection() == Projection::Perspective {
        // TODO: revisit the fixed fov once lens distortion parameters are
        // passed to the projection shader.
        params.set_float(keys::FOV, 90.0);
    }

    params
}

/// Projection node for a scene camera.
pub fn compute_projection_node(camera: &dyn SceneCamera, handle: &str) -> ProjectionNode {
    ProjectionNode::new(
        projection_shader(camera.projection()),
        handle,
        compute_node_params(camera),
    )
}

/// Camera parameters: clipping range and screen window.
///
/// `nearClip`/`farClip` are only set when `min < max`. An empty range or a
/// single point means the scene did not provide one, and the renderer
/// defaults apply.
pub fn compute_camera_params(
    camera: &dyn SceneCamera,
    framing: &Framing,
    policy: ConformWindowPolicy,
    buffer_size: IVec2,
) -> ParamList {
    let mut params = ParamList::new();

    let clipping_range = camera.clipping_range();
    if clipping_range.min < clipping_range.max {
        params.set_float(keys::NEAR_CLIP, clipping_range.min);
        params.set_float(keys::FAR_CLIP, clipping_range.max);
    }

    let screen_window = geometry::compute_screen_window(camera, framing, policy, buffer_size);
    params.set_float_array(keys::SCREEN_WINDOW, &screen_window.to_min_max_array());

    params
}

/// Global options carrying the crop window.
pub fn compute_crop_window_params(framing: &Framing, buffer_size: IVec2, bias: f32) -> ParamList {
    let mut params = ParamList::new();

    let crop_window =
        geometry::quantize_crop_window_with_bias(&framing.data_window, buffer_size, bias);
    params.set_float_array(keys::CROP_WINDOW, &crop_window);

    params
}

/// Clip plane parameters (unit normal and origin).
pub fn compute_clip_plane_params(plane: &ClipPlane) -> ParamList {
    let mut params = ParamList::new();
    params.set_normal(keys::PLANE_NORMAL, plane.normal);
    params.set_point(keys::PLANE_ORIGIN, plane.origin);
    params
}

#[cfg(test)]
#[path = "camera_params_tests.rs"]
mod tests;
