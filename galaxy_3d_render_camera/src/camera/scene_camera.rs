/// Read-only view of a camera described by the scene.
///
/// Apertures, offsets and focal length are in scene length units.
/// Clip planes are plane equations (a, b, c, d) with
/// `a*x + b*y + c*z + d = 0` in camera object space.
/// Transforms are object-to-world matrices in the scene convention
/// (right-handed, Y-up, looking along -Z).

use std::fmt;
use glam::{DMat4, DVec4};
use crate::camera_warn;
use crate::math::Range1f;

/// Expected upper bound on the number of transform time samples.
///
/// Only used as a capacity hint.
pub const MAX_TIME_SAMPLES: usize = 4;

/// Projection kind of a scene camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Projection {
    #[default]
    Perspective,
    Orthographic,
}

impl Projection {
    /// Decode a raw projection value coming from a scene description.
    ///
    /// 0 is perspective and 1 is orthographic. Anything else falls back
    /// to perspective with a warning.
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Projection::Perspective,
            1 => Projection::Orthographic,
            other => {
                camera_warn!(
                    "galaxy3d::camera",
                    "Unknown projection value {}, falling back to perspective",
                    other
                );
                Projection::Perspective
            }
        }
    }
}

/// Stable identity of a scene camera (its scene path).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CameraPath(String);

impl CameraPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CameraPath {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

impl fmt::Display for CameraPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A value sampled at a given time (shutter-relative).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSample<T> {
    pub time: f32,
    pub value: T,
}

impl<T> TimeSample<T> {
    pub fn new(time: f32, value: T) -> Self {
        Self { time, value }
    }
}

/// Read accessors the camera context needs from a scene camera.
///
/// Implementations may change their attributes between commits. The
/// scene reports such changes through `CameraContext::mark_camera_invalid`.
pub trait SceneCamera {
    /// Stable identity used to detect camera switches
    fn path(&self) -> &CameraPath;

    fn projection(&self) -> Projection;

    fn horizontal_aperture(&self) -> f32;

    fn vertical_aperture(&self) -> f32;

    fn horizontal_aperture_offset(&self) -> f32;

    fn vertical_aperture_offset(&self) -> f32;

    /// Focal length. Zero means "not provided".
    fn focal_length(&self) -> f32;

    /// Focus distance. Zero means "not provided".
    fn focus_distance(&self) -> f32;

    /// F-stop. Zero or less disables depth of field.
    fn f_stop(&self) -> f32;

    /// Near/far clipping range. May be empty when not provided.
    fn clipping_range(&self) -> Range1f;

    /// Clip plane equations in camera object space
    fn clip_planes(&self) -> &[DVec4];

    /// Time-sampled object-to-world transforms
    fn time_sample_xforms(&self) -> &[TimeSample<DMat4>];
}
