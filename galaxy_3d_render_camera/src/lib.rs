/*!
# Galaxy 3D Render Camera

Camera context for the Galaxy 3D renderer integration.

This crate turns a scene camera (filmback, lens, clipping, transforms) and
an output framing into the parameters a render engine expects, and keeps
the renderer-side camera and its clip planes in sync with the scene.

## Architecture

- **SceneCamera**: Trait the scene implements to describe a camera
- **Framing**: Display window, data window and pixel aspect ratio
- **geometry**: Pure functions (screen window, conform, rebase, crop window,
  clip planes, Z flip)
- **params**: Parameter lists sent to the render engine
- **RenderEngine**: Trait implemented by renderer backends
- **CameraContext**: Dirty-tracked state machine driving the render engine

A `MockRenderEngine` records every call for testing without a renderer.
*/

// Internal modules
mod error;
pub mod log;
pub mod config;
pub mod math;
pub mod camera;
pub mod framing;
pub mod geometry;
pub mod params;
pub mod engine;
pub mod context;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Camera context
    pub use crate::context::{CameraContext, ContextState, DirtyBits};
    pub use crate::config::ContextConfig;

    // Render engine seam
    pub use crate::engine::RenderEngine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Scene camera sub-module
    pub mod camera {
        pub use crate::camera::*;
        pub use crate::framing::{ConformWindowPolicy, Framing};
        pub use crate::math::{Range1f, Range2d, Range2f, Rect2i};
    }

    // Geometry sub-module (pure computations)
    pub mod geometry {
        pub use crate::geometry::*;
    }

    // Render engine sub-module
    pub mod render {
        pub use crate::engine::*;
        pub use crate::params::*;
    }
}

// Re-export math library at crate root
pub use glam;
