/// Screen window computation.
///
/// The camera frustum from the scene is conformed to the display window's
/// aspect ratio, then expressed relative to the whole render buffer: the
/// renderer always maps the screen window onto the entire buffer.

use glam::{DVec2, IVec2};
use crate::camera::{SceneCamera, Projection};
use crate::coding_error;
use crate::framing::{ConformWindowPolicy, Framing};
use crate::math::{Range2d, Range2f};

/// Screen window of the camera's filmback.
///
/// The filmback rectangle is centered on the aperture offset. Perspective
/// cameras divide it by the focal length. Orthographic cameras, and cameras
/// with a focal length of exactly zero, use it unmodified.
pub fn compute_filmback_screen_window(camera: &dyn SceneCamera) -> Range2d {
    let size = DVec2::new(
        f64::from(camera.horizontal_aperture()),
        f64::from(camera.vertical_aperture()),
    );
    let offset = DVec2::new(
        f64::from(camera.horizontal_aperture_offset()),
        f64::from(camera.vertical_aperture_offset()),
    );

    let filmback = Range2d::new(-0.5 * size + offset, 0.5 * size + offset);

    if camera.projection() == Projection::Orthographic {
        return filmback;
    }

    let focal_length = camera.focal_length();
    if focal_length == 0.0 {
        return filmback;
    }

    filmback / f64::from(focal_length)
}

/// Conform a window to `target_aspect` (width / height) using `policy`.
///
/// The window center is preserved. A non-positive (or NaN) target aspect
/// is a coding error and returns the window unchanged.
pub fn conform_window(
    window: &Range2d,
    policy: ConformWindowPolicy,
    target_aspect: f64,
) -> Range2d {
    if !(target_aspect > 0.0) {
        coding_error!(
            "galaxy3d::geometry",
            "Cannot conform screen window to aspect ratio {}",
            target_aspect
        );
        return *window;
    }

    let size = window.size();
    let center = window.midpoint();

    match resolve_policy(size, policy, target_aspect) {
        ConformWindowPolicy::MatchVertically => {
            let half_width = 0.5 * size.y * target_aspect;
            Range2d::new(
                DVec2::new(center.x - half_width, window.min.y),
                DVec2::new(center.x + half_width, window.max.y),
            )
        }
        _ => {
            let half_height = 0.5 * size.x / target_aspect;
            Range2d::new(
                DVec2::new(window.min.x, center.y - half_height),
                DVec2::new(window.max.x, center.y + half_height),
            )
        }
    }
}

// Fit and Crop reduce to one of the two match policies depending on
// whether the window is wider than the target.
fn resolve_policy(
    size: DVec2,
    policy: ConformWindowPolicy,
    target_aspect: f64,
) -> ConformWindowPolicy {
    match policy {
        ConformWindowPolicy::MatchVertically | ConformWindowPolicy::MatchHorizontally => policy,
        ConformWindowPolicy::Fit | ConformWindowPolicy::Crop => {
            let aspect = if size.y != 0.0 { size.x / size.y } else { 1.0 };
            let fit = policy == ConformWindowPolicy::Fit;
            if fit ^ (aspect > target_aspect) {
                ConformWindowPolicy::MatchVertically
            } else {
                ConformWindowPolicy::MatchHorizontally
            }
        }
    }
}

/// Re-express a screen window valid over `display_window` relative to the
/// whole render buffer.
///
/// Assumes an affine map between screen window space and image space and
/// computes what the buffer corners map to. Image space is y-down while
/// screen window space is y-up, hence the vertical minimum is derived from
/// the window's maximum.
pub fn rebase_screen_window_to_buffer(
    screen_window: &Range2d,
    display_window: &Range2f,
    buffer_size: IVec2,
) -> Range2d {
    let display_size = display_window.size().as_dvec2();
    let window_size = screen_window.size();

    // Screen window units per pixel
    let per_pixel = DVec2::new(
        units_per_pixel(window_size.x, display_size.x),
        units_per_pixel(window_size.y, display_size.y),
    );

    let buffer = buffer_size.as_dvec2();

    let min = DVec2::new(
        screen_window.min.x - per_pixel.x * f64::from(display_window.min.x),
        screen_window.max.y + per_pixel.y * (f64::from(display_window.min.y) - buffer.y),
    );

    Range2d::new(min, min + per_pixel * buffer)
}

fn units_per_pixel(extent: f64, pixels: f64) -> f64 {
    if pixels == 0.0 {
        coding_error!("galaxy3d::geometry", "Invalid display window (zero extent) in framing");
        return 0.0;
    }
    extent / pixels
}

/// Full screen window pipeline: filmback, conform to the display window's
/// aspect ratio, rebase onto the render buffer.
pub fn compute_screen_window(
    camera: &dyn SceneCamera,
    framing: &Framing,
    policy: ConformWindowPolicy,
    buffer_size: IVec2,
) -> Range2d {
    let for_camera = compute_filmback_screen_window(camera);

    let for_display_window =
        conform_window(&for_camera, policy, framing.display_window_aspect());

    rebase_screen_window_to_buffer(&for_display_window, &framing.display_window, buffer_size)
}

#[cfg(test)]
#[path = "screen_window_tests.rs"]
mod tests;
