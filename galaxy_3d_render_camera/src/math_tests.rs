use glam::{DVec2, IVec2, Vec2};
use super::*;

// ============================================================================
// Range1f
// ============================================================================

#[test]
fn test_range1f_default_is_empty() {
    assert!(Range1f::default().is_empty());
}

#[test]
fn test_range1f_single_point_is_not_empty() {
    // A single point is a valid (non-empty) range
    assert!(!Range1f::new(1.0, 1.0).is_empty());
    assert!(Range1f::new(2.0, 1.0).is_empty());
}

// ============================================================================
// Range2d
// ============================================================================

#[test]
fn test_range2d_size_and_midpoint() {
    let r = Range2d::new(DVec2::new(-1.0, -2.0), DVec2::new(3.0, 2.0));
    assert_eq!(r.size(), DVec2::new(4.0, 4.0));
    assert_eq!(r.midpoint(), DVec2::new(1.0, 0.0));
}

#[test]
fn test_range2d_div() {
    let r = Range2d::new(DVec2::new(-1.0, -0.5), DVec2::new(1.0, 0.5)) / 2.0;
    assert_eq!(r.min, DVec2::new(-0.5, -0.25));
    assert_eq!(r.max, DVec2::new(0.5, 0.25));
}

#[test]
fn test_range2d_to_min_max_array_order() {
    let r = Range2d::new(DVec2::new(-1.0, -2.0), DVec2::new(3.0, 4.0));
    assert_eq!(r.to_min_max_array(), [-1.0, 3.0, -2.0, 4.0]);
}

// ============================================================================
// Range2f
// ============================================================================

#[test]
fn test_range2f_size() {
    let r = Range2f::new(Vec2::new(10.0, 20.0), Vec2::new(110.0, 70.0));
    assert_eq!(r.size(), Vec2::new(100.0, 50.0));
}

// ============================================================================
// Rect2i
// ============================================================================

#[test]
fn test_rect2i_inclusive_extent() {
    let r = Rect2i::new(IVec2::new(100, 100), IVec2::new(500, 400));
    assert_eq!(r.width(), 401);
    assert_eq!(r.height(), 301);
    assert!(!r.is_empty());
}

#[test]
fn test_rect2i_from_min_size() {
    let r = Rect2i::from_min_size(IVec2::ZERO, IVec2::new(1920, 1080));
    assert_eq!(r.max, IVec2::new(1919, 1079));
    assert_eq!(r.width(), 1920);
}

#[test]
fn test_rect2i_default_is_empty() {
    let r = Rect2i::default();
    assert!(r.is_empty());
    assert_eq!(r.width(), 0);
}
