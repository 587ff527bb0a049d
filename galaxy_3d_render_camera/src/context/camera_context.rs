/// CameraContext keeps the renderer camera in sync with the scene camera.
///
/// The context owns the renderer-side camera and clip planes. The scene
/// reports changes (camera switch, framing, conform policy, camera
/// attribute edits) and the context records them in its dirty bits. On
/// commit it recomputes every derived parameter and pushes them to the
/// render engine in one `modify_camera` call, then rebuilds all clip
/// planes from scratch.
///
/// Single-threaded: the frame orchestration owns the context and drives
/// every call.

use std::sync::Arc;
use bitflags::bitflags;
use glam::{IVec2, Mat4};
use crate::camera::{SceneCamera, CameraPath, Projection};
use crate::config::ContextConfig;
use crate::engine::{RenderEngine, CameraId, ClippingPlaneId, Transform};
use crate::error::{Error, Result};
use crate::framing::{ConformWindowPolicy, Framing};
use crate::geometry::{self, to_render_transform};
use crate::params::{self, keys, ParamList, ProjectionNode};
use crate::{camera_debug, camera_error, camera_info, camera_trace, camera_warn};

const SOURCE: &str = "galaxy3d::CameraContext";

bitflags! {
    /// Inputs that changed since the last `mark_valid()`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DirtyBits: u8 {
        /// Active camera identity changed (including to or from no camera)
        const CAMERA = 1 << 0;
        /// Attributes of the active camera changed
        const CAMERA_PARAMS = 1 << 1;
        const FRAMING = 1 << 2;
        const WINDOW_POLICY = 1 << 3;
    }
}

/// Observable state of the context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
    /// No scene camera is set and nothing is pending
    NoCamera,
    /// The renderer camera matches the scene camera
    Valid,
    /// Something changed since the last commit
    Invalid,
}

/// Camera context of a render session
pub struct CameraContext {
    config: ContextConfig,
    /// Active scene camera
    camera: Option<Arc<dyn SceneCamera>>,
    /// Identity of the last non-empty camera set
    camera_path: Option<CameraPath>,
    framing: Framing,
    policy: ConformWindowPolicy,
    dirty: DirtyBits,
    /// Renderer camera, created by begin()
    camera_id: Option<CameraId>,
    /// Renderer camera registered as the default dicing camera
    dicing_camera_set: bool,
    /// Renderer clip planes, one per valid clip plane of the active camera
    clip_plane_ids: Vec<ClippingPlaneId>,
}

impl CameraContext {
    /// Context with no camera, default framing and the Fit policy
    pub fn new() -> Self {
        Self::with_config(ContextConfig::default())
    }

    pub fn with_config(config: ContextConfig) -> Self {
        Self {
            config,
            camera: None,
            camera_path: None,
            framing: Framing::default(),
            policy: ConformWindowPolicy::Fit,
            dirty: DirtyBits::empty(),
            camera_id: None,
            dicing_camera_set: false,
            clip_plane_ids: Vec::new(),
        }
    }

    // ===== GETTERS =====

    pub fn config(&self) -> &ContextConfig {
        &self.config
    }

    /// Active scene camera
    pub fn camera(&self) -> Option<&Arc<dyn SceneCamera>> {
        self.camera.as_ref()
    }

    /// Identity of the last camera set. Kept when the camera is cleared.
    pub fn camera_path(&self) -> Option<&CameraPath> {
        self.camera_path.as_ref()
    }

    pub fn framing(&self) -> &Framing {
        &self.framing
    }

    pub fn window_policy(&self) -> ConformWindowPolicy {
        self.policy
    }

    /// Renderer camera handle (`None` before `begin()`)
    pub fn camera_id(&self) -> Option<CameraId> {
        self.camera_id
    }

    /// Renderer clip plane handles created by the last commit
    pub fn clip_plane_ids(&self) -> &[ClippingPlaneId] {
        &self.clip_plane_ids
    }

    pub fn dirty_bits(&self) -> DirtyBits {
        self.dirty
    }

    /// True when something changed since the last `mark_valid()`
    pub fn is_invalid(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Pending changes take precedence: clearing a committed camera reports
    /// `Invalid` (the renderer must fall back) until `mark_valid()`, then
    /// `NoCamera`.
    pub fn state(&self) -> ContextState {
        if self.is_invalid() {
            ContextState::Invalid
        } else if self.camera.is_none() {
            ContextState::NoCamera
        } else {
            ContextState::Valid
        }
    }

    // ===== SCENE NOTIFICATIONS =====

    /// Set the active scene camera.
    ///
    /// Switching to a camera with another identity invalidates. Clearing a
    /// camera that was set invalidates too: the renderer must fall back to
    /// the default camera. Setting a camera with the stored identity does
    /// not invalidate.
    pub fn set_camera(&mut self, camera: Option<Arc<dyn SceneCamera>>) {
        match &camera {
            Some(cam) => {
                if self.camera_path.as_ref() != Some(cam.path()) {
                    camera_debug!(SOURCE, "Active camera changed to '{}'", cam.path());
                    self.dirty |= DirtyBits::CAMERA;
                    self.camera_path = Some(cam.path().clone());
                }
            }
            None => {
                if self.camera.is_some() {
                    camera_debug!(SOURCE, "Active camera cleared");
                    self.dirty |= DirtyBits::CAMERA;
                }
            }
        }

        self.camera = camera;
    }

    pub fn set_framing(&mut self, framing: Framing) {
        if self.framing != framing {
            self.framing = framing;
            self.dirty |= DirtyBits::FRAMING;
        }
    }

    pub fn set_window_policy(&mut self, policy: ConformWindowPolicy) {
        if self.policy != policy {
            self.policy = policy;
            self.dirty |= DirtyBits::WINDOW_POLICY;
        }
    }

    /// Attributes of `camera` changed. Ignored unless it is the active camera.
    pub fn mark_camera_invalid(&mut self, camera: &dyn SceneCamera) {
        if self.camera_path.as_ref() == Some(camera.path()) {
            self.dirty |= DirtyBits::CAMERA_PARAMS;
        }
    }

    /// Clear the dirty bits. Call only after a successful commit.
    pub fn mark_valid(&mut self) {
        self.dirty = DirtyBits::empty();
    }

    // ===== RENDER ENGINE =====

    /// Create the renderer camera with placeholder parameters and make it
    /// the default dicing camera.
    ///
    /// The placeholder is used until a scene camera is committed. When a
    /// previous call created the camera but failed to register it as the
    /// dicing camera, only the registration is retried.
    pub fn begin(&mut self, engine: &mut dyn RenderEngine) -> Result<()> {
        if let Some(id) = self.camera_id {
            if self.dicing_camera_set {
                camera_warn!(SOURCE, "begin() called twice, keeping camera {:?}", id);
                return Err(Error::AlreadyInitialized(format!(
                    "renderer camera '{}' already exists",
                    self.config.camera_name
                )));
            }

            camera_debug!(SOURCE, "Retrying default dicing camera registration for {:?}", id);
            engine.set_default_dicing_camera(id)?;
            self.dicing_camera_set = true;
            return Ok(());
        }

        let mut node_params = ParamList::new();
        node_params.set_float(keys::FOV, self.config.placeholder_fov);

        let node = ProjectionNode::new(
            params::projection_shader(Projection::Perspective),
            self.config.projection_node_handle.as_str(),
            node_params,
        );

        let mut camera_params = ParamList::new();
        camera_params.set_float(keys::SHUTTER_OPEN_TIME, self.config.shutter_open_time);
        camera_params.set_float(keys::SHUTTER_CLOSE_TIME, self.config.shutter_close_time);
        camera_params.set_float_array(keys::SHUTTER_OPENING, &self.config.shutter_opening);

        let transform = Transform::single(
            0.0,
            Mat4::from_translation(self.config.placeholder_translation),
        );

        let id = engine.create_camera(&self.config.camera_name, &node, &transform, &camera_params)?;
        self.camera_id = Some(id);

        engine.set_default_dicing_camera(id)?;
        self.dicing_camera_set = true;

        camera_info!(SOURCE, "Renderer camera '{}' created", self.config.camera_name);
        Ok(())
    }

    /// Push the active camera and its clip planes to the render engine.
    ///
    /// No-op without an active camera. Does not clear the dirty bits.
    pub fn update_camera_and_clip_planes(
        &mut self,
        engine: &mut dyn RenderEngine,
        buffer_size: IVec2,
    ) -> Result<()> {
        let camera = match &self.camera {
            Some(camera) => Arc::clone(camera),
            None => {
                camera_trace!(SOURCE, "No active camera, nothing to commit");
                return Ok(());
            }
        };

        let camera_id = match self.camera_id {
            Some(id) => id,
            None => {
                camera_error!(SOURCE, "Commit of camera '{}' before begin()", camera.path());
                return Err(Error::NotInitialized(
                    "renderer camera not created, call begin() first".to_string(),
                ));
            }
        };

        self.update_camera(engine, camera_id, camera.as_ref(), buffer_size)?;
        self.update_clip_planes(engine, camera.as_ref())?;

        camera_debug!(
            SOURCE,
            "Committed camera '{}' with {} clip plane(s)",
            camera.path(),
            self.clip_plane_ids.len()
        );
        Ok(())
    }

    /// Push the crop window into the global options.
    ///
    /// Independent of the dirty bits; the caller decides when to call it.
    pub fn set_render_options(
        &self,
        engine: &mut dyn RenderEngine,
        buffer_size: IVec2,
    ) -> Result<()> {
        let options = params::compute_crop_window_params(
            &self.framing,
            buffer_size,
            self.config.crop_window_bias,
        );

        for (key, value) in options.iter() {
            engine.set_global_option(key, value)?;
        }
        Ok(())
    }

    fn update_camera(
        &self,
        engine: &mut dyn RenderEngine,
        camera_id: CameraId,
        camera: &dyn SceneCamera,
        buffer_size: IVec2,
    ) -> Result<()> {
        let node = params::compute_projection_node(camera, &self.config.projection_node_handle);
        let camera_params =
            params::compute_camera_params(camera, &self.framing, self.policy, buffer_size);

        // The renderer camera transform moves the camera (view to world),
        // in the renderer's left-handed convention.
        let transform = to_render_transform(camera.time_sample_xforms(), true);

        engine.modify_camera(camera_id, &node, &transform, &camera_params)
    }

    // Clip planes have no stable identity across commits: delete them all
    // and recreate one per valid plane equation.
    fn update_clip_planes(
        &mut self,
        engine: &mut dyn RenderEngine,
        camera: &dyn SceneCamera,
    ) -> Result<()> {
        // A handle leaves the list only once the renderer has deleted it
        while let Some(&id) = self.clip_plane_ids.last() {
            engine.delete_clipping_plane(id)?;
            self.clip_plane_ids.pop();
        }

        let planes = camera.clip_planes();
        if planes.is_empty() {
            return Ok(());
        }

        let transform = to_render_transform(camera.time_sample_xforms(), false);

        for equation in planes {
            match geometry::convert_plane_equation(*equation) {
                Some(plane) => {
                    let plane_params = params::compute_clip_plane_params(&plane);
                    let id = engine.create_clipping_plane(&transform, &plane_params)?;
                    self.clip_plane_ids.push(id);
                }
                None => {
                    camera_debug!(SOURCE, "Skipping degenerate clip plane {:?}", equation);
                }
            }
        }

        Ok(())
    }
}

impl Default for CameraContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "camera_context_tests.rs"]
mod tests;
