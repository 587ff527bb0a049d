use glam::{DMat4, DVec3, DVec4};
use crate::camera::{CameraPath, Projection, SceneCamera};
use super::*;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_camera_desc_defaults() {
    let cam = CameraDesc::new("/World/cam");

    assert_eq!(cam.path(), &CameraPath::from("/World/cam"));
    assert_eq!(cam.projection(), Projection::Perspective);
    assert_eq!(cam.focal_length(), 50.0);
    assert_eq!(cam.f_stop(), 0.0);
    assert!(cam.clip_planes().is_empty());
    assert_eq!(cam.time_sample_xforms().len(), 1);
    assert_eq!(cam.time_sample_xforms()[0].value, DMat4::IDENTITY);
    assert!(!cam.clipping_range().is_empty());
}

#[test]
fn test_camera_desc_struct_update() {
    let cam = CameraDesc {
        projection: Projection::Orthographic,
        clip_planes: vec![DVec4::new(0.0, 0.0, 1.0, -5.0)],
        ..CameraDesc::new("/cam")
    };

    assert_eq!(cam.projection(), Projection::Orthographic);
    assert_eq!(cam.clip_planes().len(), 1);
}

#[test]
fn test_set_static_xform_replaces_samples() {
    let mut cam = CameraDesc::new("/cam");
    cam.xforms.push(crate::camera::TimeSample::new(1.0, DMat4::IDENTITY));

    let m = DMat4::from_translation(DVec3::new(1.0, 2.0, 3.0));
    cam.set_static_xform(m);

    assert_eq!(cam.time_sample_xforms().len(), 1);
    assert_eq!(cam.time_sample_xforms()[0].time, 0.0);
    assert_eq!(cam.time_sample_xforms()[0].value, m);
}

// ============================================================================
// Projection / CameraPath
// ============================================================================

#[test]
fn test_projection_from_raw() {
    assert_eq!(Projection::from_raw(0), Projection::Perspective);
    assert_eq!(Projection::from_raw(1), Projection::Orthographic);
    // Unknown values fall back to perspective
    assert_eq!(Projection::from_raw(7), Projection::Perspective);
}

#[test]
fn test_camera_path_identity() {
    let a = CameraPath::new("/World/camA");
    let b = CameraPath::from("/World/camA");
    let c = CameraPath::from("/World/camB");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.to_string(), "/World/camA");
    assert_eq!(c.as_str(), "/World/camB");
}
