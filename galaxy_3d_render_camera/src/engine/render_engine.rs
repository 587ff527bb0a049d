/// RenderEngine trait - the seam between the camera context and a renderer.
///
/// Backends implement this trait to receive the camera, its clip planes and
/// global options. Every call is synchronous; failures are reported through
/// the returned `Result` and propagated unchanged by the camera context.

use glam::Mat4;
use slotmap::new_key_type;
use crate::error::Result;
use crate::params::{ParamList, ParamValue, ProjectionNode};

// ===== HANDLES =====

new_key_type! {
    /// Renderer-side camera handle
    pub struct CameraId;

    /// Renderer-side clipping plane handle
    pub struct ClippingPlaneId;
}

// ===== TRANSFORM =====

/// Time-sampled transform in the renderer convention.
///
/// `matrices[i]` applies at `times[i]`. Matrices use glam's column-vector
/// convention.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transform {
    matrices: Vec<Mat4>,
    times: Vec<f32>,
}

impl Transform {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            matrices: Vec::with_capacity(capacity),
            times: Vec::with_capacity(capacity),
        }
    }

    /// Transform with one sample
    pub fn single(time: f32, matrix: Mat4) -> Self {
        Self {
            matrices: vec![matrix],
            times: vec![time],
        }
    }

    pub fn push(&mut self, time: f32, matrix: Mat4) {
        self.matrices.push(matrix);
        self.times.push(time);
    }

    pub fn matrices(&self) -> &[Mat4] {
        &self.matrices
    }

    pub fn times(&self) -> &[f32] {
        &self.times
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

// ============================================================================
// RenderEngine trait
// ============================================================================

/// Render engine adapter
pub trait RenderEngine {
    /// Create a camera and return its handle
    fn create_camera(
        &mut self,
        name: &str,
        projection: &ProjectionNode,
        transform: &Transform,
        params: &ParamList,
    ) -> Result<CameraId>;

    /// Replace the projection, transform and parameters of a camera
    fn modify_camera(
        &mut self,
        camera: CameraId,
        projection: &ProjectionNode,
        transform: &Transform,
        params: &ParamList,
    ) -> Result<()>;

    /// Camera used to decide tessellation density
    fn set_default_dicing_camera(&mut self, camera: CameraId) -> Result<()>;

    /// Create a clipping plane and return its handle
    fn create_clipping_plane(
        &mut self,
        transform: &Transform,
        params: &ParamList,
    ) -> Result<ClippingPlaneId>;

    fn delete_clipping_plane(&mut self, plane: ClippingPlaneId) -> Result<()>;

    /// Set a global render option
    fn set_global_option(&mut self, key: &str, value: &ParamValue) -> Result<()>;
}
