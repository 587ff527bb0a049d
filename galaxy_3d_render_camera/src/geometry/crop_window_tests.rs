use glam::IVec2;
use crate::math::Rect2i;
use super::*;

// Renderer side reconstruction of integer bounds
fn reconstruct_min(size: i32, value: f32) -> i32 {
    ((size as f32 * value).ceil() as i32).clamp(0, size - 1)
}

fn reconstruct_max(size: i32, value: f32) -> i32 {
    ((size as f32 * value - 1.0).ceil() as i32).clamp(0, size - 1)
}

// ============================================================================
// Round trip
// ============================================================================

#[test]
fn test_crop_window_hd_round_trip() {
    let data_window = Rect2i::new(IVec2::new(100, 100), IVec2::new(500, 400));
    let buffer = IVec2::new(1920, 1080);

    let [xmin, xmax, ymin, ymax] = quantize_crop_window(&data_window, buffer);

    assert_eq!(reconstruct_min(1920, xmin), 100);
    assert_eq!(reconstruct_max(1920, xmax), 500);
    assert_eq!(reconstruct_min(1080, ymin), 100);
    assert_eq!(reconstruct_max(1080, ymax), 400);

    assert_eq!((1920.0 * xmin).round() as i32, 100);
    assert_eq!((1080.0 * ymin).round() as i32, 100);
}

#[test]
fn test_crop_window_exhaustive_small_buffers() {
    for size in [1, 2, 3, 7, 64, 127, 255] {
        for min in 0..size {
            for max in min..size {
                let data_window = Rect2i::new(IVec2::new(min, min), IVec2::new(max, max));
                let [xmin, xmax, ymin, ymax] =
                    quantize_crop_window(&data_window, IVec2::new(size, size));

                assert_eq!(reconstruct_min(size, xmin), min, "size {} min {}", size, min);
                assert_eq!(reconstruct_max(size, xmax), max, "size {} max {}", size, max);
                assert_eq!(reconstruct_min(size, ymin), min);
                assert_eq!(reconstruct_max(size, ymax), max);
            }
        }
    }
}

#[test]
fn test_crop_window_large_buffer_edges() {
    for size in [1920, 2048, 4096, 8192] {
        for bound in [0, 1, size / 3, size / 2, size - 2, size - 1] {
            let data_window = Rect2i::new(IVec2::new(bound, 0), IVec2::new(bound, size - 1));
            let [xmin, xmax, ymin, ymax] =
                quantize_crop_window(&data_window, IVec2::new(size, size));

            assert_eq!(reconstruct_min(size, xmin), bound);
            assert_eq!(reconstruct_max(size, xmax), bound);
            assert_eq!(reconstruct_min(size, ymin), 0);
            assert_eq!(reconstruct_max(size, ymax), size - 1);
        }
    }
}

// ============================================================================
// Clamping
// ============================================================================

#[test]
fn test_crop_window_full_buffer() {
    let data_window = Rect2i::from_min_size(IVec2::ZERO, IVec2::new(640, 480));
    let crop = quantize_crop_window(&data_window, IVec2::new(640, 480));

    assert_eq!(crop[0], 0.0);
    assert_eq!(crop[2], 0.0);
    assert!(crop[1] < 1.0 && crop[1] > 0.999);
    assert!(crop[3] < 1.0 && crop[3] > 0.999);
}

#[test]
fn test_crop_window_clamps_outside_buffer() {
    // Data window larger than the buffer on every side
    let data_window = Rect2i::new(IVec2::new(-10, -10), IVec2::new(700, 500));
    let crop = quantize_crop_window(&data_window, IVec2::new(640, 480));

    assert_eq!(crop, [0.0, 1.0, 0.0, 1.0]);
}

#[test]
fn test_crop_window_zero_buffer_is_not_nan() {
    let data_window = Rect2i::new(IVec2::ZERO, IVec2::new(10, 10));
    let crop = quantize_crop_window(&data_window, IVec2::ZERO);

    assert_eq!(crop, [0.0, 0.0, 0.0, 0.0]);
}

#[test]
fn test_crop_window_zero_buffer_without_bias_is_not_nan() {
    let data_window = Rect2i::new(IVec2::ZERO, IVec2::new(10, 10));

    let crop = quantize_crop_window_with_bias(&data_window, IVec2::ZERO, 0.0);
    assert!(crop.iter().all(|v| !v.is_nan()));
    assert_eq!(crop, [0.0, 0.0, 0.0, 0.0]);

    // Only the empty axis is affected
    let crop = quantize_crop_window_with_bias(&data_window, IVec2::new(0, 11), 0.0);
    assert_eq!(crop, [0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn test_crop_window_custom_bias() {
    let data_window = Rect2i::new(IVec2::new(100, 0), IVec2::new(199, 0));
    let crop = quantize_crop_window_with_bias(&data_window, IVec2::new(200, 1), 0.0);

    assert_eq!(crop[0], 0.5);
    assert_eq!(crop[1], 1.0);
}
