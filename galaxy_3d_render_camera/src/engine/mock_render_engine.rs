/// Mock render engine (no renderer required)
///
/// Stores every created object in slot maps and records each call, so the
/// camera context can be tested without a real renderer. Deleted handles
/// are never handed out again: slot map keys carry a generation.

use rustc_hash::{FxHashMap, FxHashSet};
use slotmap::SlotMap;
use crate::camera_bail;
use crate::error::{Error, Result};
use crate::params::{ParamList, ParamValue, ProjectionNode};
use super::render_engine::{RenderEngine, CameraId, ClippingPlaneId, Transform};

// ============================================================================
// Mock objects
// ============================================================================

/// Camera stored by the mock engine
#[derive(Debug, Clone)]
pub struct MockCamera {
    pub name: String,
    pub projection: ProjectionNode,
    pub transform: Transform,
    pub params: ParamList,
    /// Number of modify_camera calls received
    pub modify_count: u32,
}

/// Clipping plane stored by the mock engine
#[derive(Debug, Clone)]
pub struct MockClippingPlane {
    pub transform: Transform,
    pub params: ParamList,
}

/// Recorded engine call
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    CreateCamera(CameraId),
    ModifyCamera(CameraId),
    SetDefaultDicingCamera(CameraId),
    CreateClippingPlane(ClippingPlaneId),
    DeleteClippingPlane(ClippingPlaneId),
    SetGlobalOption(String),
}

// ============================================================================
// Mock RenderEngine
// ============================================================================

/// Render engine that records calls instead of rendering
#[derive(Debug, Default)]
pub struct MockRenderEngine {
    pub cameras: SlotMap<CameraId, MockCamera>,
    pub clipping_planes: SlotMap<ClippingPlaneId, MockClippingPlane>,
    pub options: FxHashMap<String, ParamValue>,
    pub default_dicing_camera: Option<CameraId>,
    pub calls: Vec<MockCall>,
    /// When set, every call fails with a backend error
    pub reject_calls: bool,
    /// Names of the trait methods that fail with a backend error
    /// (e.g. "set_default_dicing_camera")
    pub rejected_calls: FxHashSet<&'static str>,
}

impl MockRenderEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn camera(&self, id: CameraId) -> Option<&MockCamera> {
        self.cameras.get(id)
    }

    pub fn clipping_plane(&self, id: ClippingPlaneId) -> Option<&MockClippingPlane> {
        self.clipping_planes.get(id)
    }

    /// Forget recorded calls (objects are kept)
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    fn check_accepting(&self, call: &'static str) -> Result<()> {
        if self.reject_calls || self.rejected_calls.contains(call) {
            camera_bail!("galaxy3d::MockRenderEngine", "{} rejected", call);
        }
        Ok(())
    }
}

impl RenderEngine for MockRenderEngine {
    fn create_camera(
        &mut self,
        name: &str,
        projection: &ProjectionNode,
        transform: &Transform,
        params: &ParamList,
    ) -> Result<CameraId> {
        self.check_accepting("create_camera")?;

        let id = self.cameras.insert(MockCamera {
            name: name.to_string(),
            projection: projection.clone(),
            transform: transform.clone(),
            params: params.clone(),
            modify_count: 0,
        });
        self.calls.push(MockCall::CreateCamera(id));
        Ok(id)
    }

    fn modify_camera(
        &mut self,
        camera: CameraId,
        projection: &ProjectionNode,
        transform: &Transform,
        params: &ParamList,
    ) -> Result<()> {
        self.check_accepting("modify_camera")?;

        let stored = self.cameras.get_mut(camera)
            .ok_or_else(|| Error::InvalidHandle(format!("camera {:?}", camera)))?;
        stored.projection = projection.clone();
        stored.transform = transform.clone();
        stored.params = params.clone();
        stored.modify_count += 1;

        self.calls.push(MockCall::ModifyCamera(camera));
        Ok(())
    }

    fn set_default_dicing_camera(&mut self, camera: CameraId) -> Result<()> {
        self.check_accepting("set_default_dicing_camera")?;

        if !self.cameras.contains_key(camera) {
            return Err(Error::InvalidHandle(format!("camera {:?}", camera)));
        }
        self.default_dicing_camera = Some(camera);
        self.calls.push(MockCall::SetDefaultDicingCamera(camera));
        Ok(())
    }

    fn create_clipping_plane(
        &mut self,
        transform: &Transform,
        params: &ParamList,
    ) -> Result<ClippingPlaneId> {
        self.check_accepting("create_clipping_plane")?;

        let id = self.clipping_planes.insert(MockClippingPlane {
            transform: transform.clone(),
            params: params.clone(),
        });
        self.calls.push(MockCall::CreateClippingPlane(id));
        Ok(id)
    }

    fn delete_clipping_plane(&mut self, plane: ClippingPlaneId) -> Result<()> {
        self.check_accepting("delete_clipping_plane")?;

        self.clipping_planes.remove(plane)
            .ok_or_else(|| Error::InvalidHandle(format!("clipping plane {:?}", plane)))?;
        self.calls.push(MockCall::DeleteClippingPlane(plane));
        Ok(())
    }

    fn set_global_option(&mut self, key: &str, value: &ParamValue) -> Result<()> {
        self.check_accepting("set_global_option")?;

        self.options.insert(key.to_string(), value.clone());
        self.calls.push(MockCall::SetGlobalOption(key.to_string()));
        Ok(())
    }
}

#[cfg(test)]
#[path = "mock_render_engine_tests.rs"]
mod tests;
