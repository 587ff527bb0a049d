use glam::{DVec4, Vec3};
use super::*;

fn assert_vec3_near(actual: Vec3, expected: Vec3) {
    assert!(
        (actual - expected).abs().max_element() < 1e-5,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

// ============================================================================
// convert_plane_equation
// ============================================================================

#[test]
fn test_plane_facing_z() {
    let plane = convert_plane_equation(DVec4::new(0.0, 0.0, 1.0, -5.0)).unwrap();

    assert_eq!(plane.normal, Vec3::new(0.0, 0.0, 1.0));
    assert_eq!(plane.origin, Vec3::new(0.0, 0.0, 5.0));
}

#[test]
fn test_plane_zero_normal_is_degenerate() {
    assert!(convert_plane_equation(DVec4::new(0.0, 0.0, 0.0, 0.0)).is_none());
    assert!(convert_plane_equation(DVec4::new(0.0, 0.0, 0.0, 3.0)).is_none());
}

#[test]
fn test_plane_non_unit_normal_is_normalized() {
    // 2y + 4 = 0  =>  y = -2
    let plane = convert_plane_equation(DVec4::new(0.0, 2.0, 0.0, 4.0)).unwrap();

    assert_vec3_near(plane.normal, Vec3::Y);
    assert_vec3_near(plane.origin, Vec3::new(0.0, -2.0, 0.0));
}

#[test]
fn test_plane_origin_lies_on_plane() {
    let equation = DVec4::new(1.0, -2.0, 3.0, 7.0);
    let plane = convert_plane_equation(equation).unwrap();

    assert!((plane.normal.length() - 1.0).abs() < 1e-6);

    let o = plane.origin;
    let residual = equation.x as f32 * o.x + equation.y as f32 * o.y + equation.z as f32 * o.z
        + equation.w as f32;
    assert!(residual.abs() < 1e-5, "residual {}", residual);
}

#[test]
fn test_plane_through_origin() {
    let plane = convert_plane_equation(DVec4::new(-1.0, 0.0, 0.0, 0.0)).unwrap();

    assert_vec3_near(plane.normal, Vec3::NEG_X);
    assert_vec3_near(plane.origin, Vec3::ZERO);
}
