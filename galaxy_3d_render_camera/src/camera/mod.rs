//! Camera module - the scene camera seam.
//!
//! The camera context does not store camera attributes. It reads them
//! through the `SceneCamera` trait from whatever object the scene owns.
//! `CameraDesc` is a plain data implementation of that trait.

mod scene_camera;
mod camera_desc;

pub use scene_camera::{SceneCamera, Projection, CameraPath, TimeSample, MAX_TIME_SAMPLES};
pub use camera_desc::CameraDesc;
