//! Range and rectangle value types.
//!
//! Ranges store a min and a max corner and are empty when `min > max` on
//! any axis. `Rect2i` follows the pixel convention instead: both corners
//! are inclusive, so a single pixel has `min == max`.

use std::ops::Div;
use glam::{DVec2, IVec2, Vec2};

// ===== RANGE1F =====

/// One-dimensional float interval (used for clipping ranges).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range1f {
    pub min: f32,
    pub max: f32,
}

impl Range1f {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Empty range (min = +MAX, max = -MAX).
    pub fn empty() -> Self {
        Self { min: f32::MAX, max: -f32::MAX }
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

impl Default for Range1f {
    fn default() -> Self {
        Self::empty()
    }
}

// ===== RANGE2D =====

/// Double precision 2D range (screen windows).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Range2d {
    pub min: DVec2,
    pub max: DVec2,
}

impl Range2d {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    pub fn midpoint(&self) -> DVec2 {
        0.5 * (self.min + self.max)
    }

    /// Window in the renderer's flattened layout: (xmin, xmax, ymin, ymax).
    pub fn to_min_max_array(&self) -> [f32; 4] {
        [
            self.min.x as f32,
            self.max.x as f32,
            self.min.y as f32,
            self.max.y as f32,
        ]
    }
}

impl Div<f64> for Range2d {
    type Output = Range2d;

    fn div(self, rhs: f64) -> Range2d {
        Range2d::new(self.min / rhs, self.max / rhs)
    }
}

// ===== RANGE2F =====

/// Single precision 2D range (display windows, image space, y-down).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Range2f {
    pub min: Vec2,
    pub max: Vec2,
}

impl Range2f {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

// ===== RECT2I =====

/// Integer pixel rectangle with inclusive corners (data windows).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect2i {
    pub min: IVec2,
    pub max: IVec2,
}

impl Rect2i {
    pub fn new(min: IVec2, max: IVec2) -> Self {
        Self { min, max }
    }

    /// Rectangle starting at `min` covering `size` pixels.
    pub fn from_min_size(min: IVec2, size: IVec2) -> Self {
        Self { min, max: min + size - IVec2::ONE }
    }

    pub fn width(&self) -> i32 {
        self.max.x - self.min.x + 1
    }

    pub fn height(&self) -> i32 {
        self.max.y - self.min.y + 1
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }
}

impl Default for Rect2i {
    /// Empty rectangle (0,0)-(-1,-1).
    fn default() -> Self {
        Self { min: IVec2::ZERO, max: IVec2::NEG_ONE }
    }
}

#[cfg(test)]
#[path = "math_tests.rs"]
mod tests;
