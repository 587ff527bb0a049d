/// Transform conversion between the scene and renderer conventions.
///
/// The scene is right-handed: camera space is Y-up looking along -Z.
/// The renderer is left-handed: camera space is Y-up looking along +Z.
/// Going from one to the other flips the camera's local Z axis.
///
/// Matrices use glam's column-vector convention (`p' = M * p`).

use glam::{DMat4, DVec4};
use crate::camera::TimeSample;
use crate::engine::Transform;

/// diag(1, 1, -1, 1)
pub const FLIP_Z: DMat4 = DMat4::from_cols(DVec4::X, DVec4::Y, DVec4::NEG_Z, DVec4::W);

/// Flip the local Z axis of an object-to-world matrix.
pub fn flip_z(matrix: &DMat4) -> DMat4 {
    *matrix * FLIP_Z
}

/// Convert time-sampled double precision matrices into a renderer transform.
///
/// Camera view transforms are converted with `flip = true`. Clip plane
/// transforms are not flipped: plane equations are already expressed in
/// the camera's object space.
pub fn to_render_transform(samples: &[TimeSample<DMat4>], flip: bool) -> Transform {
    let mut transform = Transform::with_capacity(samples.len());

    for sample in samples {
        let matrix = if flip { flip_z(&sample.value) } else { sample.value };
        transform.push(sample.time, matrix.as_mat4());
    }

    transform
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
