//! Geometry module: pure conversions between camera, screen and image spaces.
//!
//! Screen window space: a plane at unit distance in front of the camera,
//! parallel to it, y pointing up. Coordinates in this plane parameterize
//! the rays leaving the camera. Unit distance holds because the renderer's
//! field of view is fixed at 90 degrees.
//!
//! Image space: pixel coordinates, top left pixel at (0,0), y pointing down.
//!
//! Nothing here holds state. Degenerate inputs are recovered locally and
//! never produce NaNs.

mod screen_window;
mod crop_window;
mod clip_plane;
mod transform;

pub use screen_window::{
    compute_filmback_screen_window,
    conform_window,
    rebase_screen_window_to_buffer,
    compute_screen_window,
};
pub use crop_window::{quantize_crop_window, quantize_crop_window_with_bias, CROP_WINDOW_BIAS};
pub use clip_plane::{convert_plane_equation, ClipPlane};
pub use transform::{flip_z, to_render_transform, FLIP_Z};
