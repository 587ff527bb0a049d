//! Unit tests for ContextConfig

use glam::Vec3;
use crate::geometry::CROP_WINDOW_BIAS;
use super::*;

#[test]
fn test_default_config_names() {
    let config = ContextConfig::default();

    assert_eq!(config.camera_name, "main_cam");
    assert_eq!(config.projection_node_handle, "main_cam_projection");
}

#[test]
fn test_default_config_placeholder() {
    let config = ContextConfig::default();

    assert_eq!(config.placeholder_fov, 60.0);
    assert_eq!(config.placeholder_translation, Vec3::new(0.0, 0.0, -5.0));
}

#[test]
fn test_default_config_shutter() {
    let config = ContextConfig::default();

    assert_eq!(config.shutter_open_time, 0.0);
    assert_eq!(config.shutter_close_time, 0.05);
    assert_eq!(config.shutter_opening, [0.0, 0.0, 0.0, 0.0, 0.05, 1.0, 0.35, 0.0]);
    assert!(config.shutter_open_time <= config.shutter_close_time);
}

#[test]
fn test_default_config_crop_bias() {
    assert_eq!(ContextConfig::default().crop_window_bias, CROP_WINDOW_BIAS);
    assert_eq!(CROP_WINDOW_BIAS, 1.0 / 128.0);
}

#[test]
fn test_config_struct_update() {
    let config = ContextConfig {
        shutter_close_time: 0.5,
        ..ContextConfig::default()
    };

    assert_eq!(config.shutter_close_time, 0.5);
    assert_eq!(config.camera_name, "main_cam");
}
