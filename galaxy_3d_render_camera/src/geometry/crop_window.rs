/// Crop window computation.
///
/// Only the pixels within the crop window are rendered; it has no effect
/// on how pixels map onto the filmback. The crop window is relative to the
/// render buffer ((0,0,1,1) is the whole buffer), y-down, in the layout
/// (xmin, xmax, ymin, ymax).
///
/// The renderer turns it back into integer pixel bounds with:
///
/// ```text
/// rxmin = clamp(ceil(width * xmin    ), 0, width - 1)
/// rxmax = clamp(ceil(width * xmax - 1), 0, width - 1)
/// ```
///
/// and similarly for y.

use glam::IVec2;
use crate::math::Rect2i;

/// Default negative bias applied to pixel bounds (1/128).
pub const CROP_WINDOW_BIAS: f32 = 0.0078125;

/// Normalized crop window for `data_window` within a buffer of `buffer_size`.
pub fn quantize_crop_window(data_window: &Rect2i, buffer_size: IVec2) -> [f32; 4] {
    quantize_crop_window_with_bias(data_window, buffer_size, CROP_WINDOW_BIAS)
}

/// Same as `quantize_crop_window` with an explicit bias.
pub fn quantize_crop_window_with_bias(
    data_window: &Rect2i,
    buffer_size: IVec2,
    bias: f32,
) -> [f32; 4] {
    [
        div_round_down(data_window.min.x, buffer_size.x, bias),
        div_round_down(data_window.max.x + 1, buffer_size.x, bias),
        div_round_down(data_window.min.y, buffer_size.y, bias),
        div_round_down(data_window.max.y + 1, buffer_size.y, bias),
    ]
}

// If a / b rounds up, ceil(b * (a / b)) can come out as a + 1. Biasing a
// slightly downwards keeps the renderer's ceil on a.
//
// An empty buffer axis yields 0 whatever the bias.
fn div_round_down(a: i32, b: i32, bias: f32) -> f32 {
    if b <= 0 {
        return 0.0;
    }
    ((a as f32 - bias) / b as f32).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "crop_window_tests.rs"]
mod tests;
