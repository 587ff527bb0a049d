/// Clip plane conversion.
///
/// Scene cameras express clip planes as plane equations in camera object
/// space. The renderer expects a unit normal and a point on the plane
/// (together with the camera's time-sampled transform).

use glam::{DVec4, Vec3};

/// Renderer-side description of a clip plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipPlane {
    /// Unit-length plane normal
    pub normal: Vec3,
    /// A point on the plane (foot of the perpendicular from the origin)
    pub origin: Vec3,
}

/// Convert a plane equation (a, b, c, d) into a unit normal and origin.
///
/// Returns `None` when (a, b, c) has zero length; such planes are skipped.
pub fn convert_plane_equation(plane: DVec4) -> Option<ClipPlane> {
    let direction = plane.truncate().as_vec3();
    let length = direction.length();
    if length == 0.0 {
        return None;
    }

    let normal = direction / length;
    // Signed distance along the normal from the origin to the plane
    let distance = -(plane.w as f32) / length;

    Some(ClipPlane {
        normal,
        origin: normal * distance,
    })
}

#[cfg(test)]
#[path = "clip_plane_tests.rs"]
mod tests;
