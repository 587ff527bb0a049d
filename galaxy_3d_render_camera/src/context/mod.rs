//! Context module

mod camera_context;

pub use camera_context::{CameraContext, ContextState, DirtyBits};
