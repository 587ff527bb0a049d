//! Engine module - render engine adapter trait and mock implementation.

mod render_engine;
mod mock_render_engine;

pub use render_engine::{RenderEngine, CameraId, ClippingPlaneId, Transform};
pub use mock_render_engine::{MockRenderEngine, MockCamera, MockClippingPlane, MockCall};
