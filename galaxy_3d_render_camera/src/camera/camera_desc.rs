/// CameraDesc: plain data scene camera.
///
/// Stores every attribute the camera context reads. Defaults follow the
/// usual scene description defaults (35mm academy filmback, 50mm lens,
/// depth of field disabled, identity transform at time 0).

use glam::{DMat4, DVec4};
use crate::math::Range1f;
use super::scene_camera::{SceneCamera, Projection, CameraPath, TimeSample, MAX_TIME_SAMPLES};

/// Scene camera described by plain data
#[derive(Debug, Clone, PartialEq)]
pub struct CameraDesc {
    pub path: CameraPath,
    pub projection: Projection,
    pub horizontal_aperture: f32,
    pub vertical_aperture: f32,
    pub horizontal_aperture_offset: f32,
    pub vertical_aperture_offset: f32,
    pub focal_length: f32,
    pub focus_distance: f32,
    pub f_stop: f32,
    pub clipping_range: Range1f,
    pub clip_planes: Vec<DVec4>,
    pub xforms: Vec<TimeSample<DMat4>>,
}

impl CameraDesc {
    /// Camera with default attributes at the given scene path
    pub fn new(path: impl Into<CameraPath>) -> Self {
        let mut xforms = Vec::with_capacity(MAX_TIME_SAMPLES);
        xforms.push(TimeSample::new(0.0, DMat4::IDENTITY));

        Self {
            path: path.into(),
            projection: Projection::Perspective,
            horizontal_aperture: 20.955,
            vertical_aperture: 15.2908,
            horizontal_aperture_offset: 0.0,
            vertical_aperture_offset: 0.0,
            focal_length: 50.0,
            focus_distance: 0.0,
            f_stop: 0.0,
            clipping_range: Range1f::new(1.0, 1_000_000.0),
            clip_planes: Vec::new(),
            xforms,
        }
    }

    /// Replace all transform samples with a single static transform
    pub fn set_static_xform(&mut self, matrix: DMat4) {
        self.xforms.clear();
        self.xforms.push(TimeSample::new(0.0, matrix));
    }
}

impl SceneCamera for CameraDesc {
    fn path(&self) -> &CameraPath {
        &self.path
    }

    fn projection(&self) -> Projection {
        self.projection
    }

    fn horizontal_aperture(&self) -> f32 {
        self.horizontal_aperture
    }

    fn vertical_aperture(&self) -> f32 {
        self.vertical_aperture
    }

    fn horizontal_aperture_offset(&self) -> f32 {
        self.horizontal_aperture_offset
    }

    fn vertical_aperture_offset(&self) -> f32 {
        self.vertical_aperture_offset
    }

    fn focal_length(&self) -> f32 {
        self.focal_length
    }

    fn focus_distance(&self) -> f32 {
        self.focus_distance
    }

    fn f_stop(&self) -> f32 {
        self.f_stop
    }

    fn clipping_range(&self) -> Range1f {
        self.clipping_range
    }

    fn clip_planes(&self) -> &[DVec4] {
        &self.clip_planes
    }

    fn time_sample_xforms(&self) -> &[TimeSample<DMat4>] {
        &self.xforms
    }
}

#[cfg(test)]
#[path = "camera_desc_tests.rs"]
mod tests;
