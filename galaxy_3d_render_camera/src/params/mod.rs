//! Params module - renderer-facing parameter bundles and their builders.

pub mod keys;
mod param_list;
mod camera_params;

pub use param_list::{ParamList, ParamValue};
pub use camera_params::{
    ProjectionNode,
    projection_shader,
    compute_node_params,
    compute_projection_node,
    compute_camera_params,
    compute_crop_window_params,
    compute_clip_plane_params,
};
