//! Output image framing and conform policy.
//!
//! Image space: pixel coordinates with the top left pixel at (0,0),
//! y pointing down. Both the display window and the data window are
//! expressed in image space.

use glam::{IVec2, Vec2};
use crate::coding_error;
use crate::math::{Range2f, Rect2i};

/// How a camera's aspect ratio is reconciled with the display window's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConformWindowPolicy {
    /// Keep the vertical extent, adjust the horizontal one
    MatchVertically,
    /// Keep the horizontal extent, adjust the vertical one
    MatchHorizontally,
    /// Grow the window so that it contains the original one
    #[default]
    Fit,
    /// Shrink the window so that it is contained in the original one
    Crop,
}

/// Output image framing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Framing {
    /// Region of image space that the camera frustum maps to
    pub display_window: Range2f,
    /// Pixels that are actually rendered (inclusive)
    pub data_window: Rect2i,
    /// Width / height of a single pixel
    pub pixel_aspect_ratio: f32,
}

impl Framing {
    pub fn new(display_window: Range2f, data_window: Rect2i, pixel_aspect_ratio: f32) -> Self {
        Self { display_window, data_window, pixel_aspect_ratio }
    }

    /// Framing whose display window and data window both cover an image
    /// of the given size, with square pixels.
    pub fn from_size(size: IVec2) -> Self {
        Self {
            display_window: Range2f::new(Vec2::ZERO, size.as_vec2()),
            data_window: Rect2i::from_min_size(IVec2::ZERO, size),
            pixel_aspect_ratio: 1.0,
        }
    }

    /// Aspect ratio of the display window, pixel aspect ratio included.
    ///
    /// A display window with zero height is a coding error. The quotient
    /// then defaults to 1.
    pub fn display_window_aspect(&self) -> f64 {
        let size = self.display_window.size();
        f64::from(self.pixel_aspect_ratio) * safe_div(f64::from(size.x), f64::from(size.y))
    }
}

impl Default for Framing {
    fn default() -> Self {
        Self {
            display_window: Range2f::default(),
            data_window: Rect2i::default(),
            pixel_aspect_ratio: 1.0,
        }
    }
}

fn safe_div(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        coding_error!("galaxy3d::framing", "Invalid display window (zero height) in framing");
        return 1.0;
    }
    a / b
}

#[cfg(test)]
#[path = "framing_tests.rs"]
mod tests;
