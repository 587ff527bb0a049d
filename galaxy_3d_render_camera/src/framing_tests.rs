use glam::{IVec2, Vec2};
use crate::math::{Range2f, Rect2i};
use super::*;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_framing_default() {
    let framing = Framing::default();
    assert_eq!(framing.pixel_aspect_ratio, 1.0);
    assert!(framing.data_window.is_empty());
    assert_eq!(ConformWindowPolicy::default(), ConformWindowPolicy::Fit);
}

#[test]
fn test_framing_from_size() {
    let framing = Framing::from_size(IVec2::new(1920, 1080));
    assert_eq!(framing.display_window.max, Vec2::new(1920.0, 1080.0));
    assert_eq!(framing.data_window.max, IVec2::new(1919, 1079));
}

#[test]
fn test_framing_equality() {
    let a = Framing::from_size(IVec2::new(640, 480));
    let mut b = a;
    assert_eq!(a, b);

    b.pixel_aspect_ratio = 2.0;
    assert_ne!(a, b);
}

// ============================================================================
// display_window_aspect
// ============================================================================

#[test]
fn test_display_window_aspect() {
    let framing = Framing::from_size(IVec2::new(1920, 1080));
    assert!((framing.display_window_aspect() - 16.0 / 9.0).abs() < 1e-9);
}

#[test]
fn test_display_window_aspect_with_pixel_aspect() {
    let framing = Framing::new(
        Range2f::new(Vec2::ZERO, Vec2::new(100.0, 100.0)),
        Rect2i::from_min_size(IVec2::ZERO, IVec2::new(100, 100)),
        2.0,
    );
    assert_eq!(framing.display_window_aspect(), 2.0);
}

#[test]
fn test_display_window_aspect_zero_height_defaults_to_one() {
    let framing = Framing::new(
        Range2f::new(Vec2::ZERO, Vec2::new(100.0, 0.0)),
        Rect2i::default(),
        1.5,
    );
    // Quotient defaults to 1, pixel aspect still applies
    assert_eq!(framing.display_window_aspect(), 1.5);
}
