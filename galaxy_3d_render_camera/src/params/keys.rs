//! Well-known parameter and shader names understood by the render engine.

// ===== PROJECTION SHADERS =====

pub const PERSPECTIVE_SHADER: &str = "PxrPerspective";
pub const ORTHOGRAPHIC_SHADER: &str = "PxrOrthographic";

// ===== PROJECTION NODE PARAMETERS =====

/// Infinite f-stop disables depth of field
pub const F_STOP: &str = "fStop";
pub const FOCAL_LENGTH: &str = "focalLength";
pub const FOCAL_DISTANCE: &str = "focalDistance";
pub const FOV: &str = "fov";

// ===== CAMERA PARAMETERS =====

pub const NEAR_CLIP: &str = "nearClip";
pub const FAR_CLIP: &str = "farClip";
/// (xmin, xmax, ymin, ymax)
pub const SCREEN_WINDOW: &str = "screenWindow";
pub const SHUTTER_OPEN_TIME: &str = "shutterOpenTime";
pub const SHUTTER_CLOSE_TIME: &str = "shutterCloseTime";
/// float[8]: c1 c2 d1 d2 e1 e2 f1 f2
pub const SHUTTER_OPENING: &str = "shutteropening";

// ===== GLOBAL OPTIONS =====

/// (xmin, xmax, ymin, ymax), normalized, y-down
pub const CROP_WINDOW: &str = "cropWindow";

// ===== CLIPPING PLANE PARAMETERS =====

pub const PLANE_NORMAL: &str = "planeNormal";
pub const PLANE_ORIGIN: &str = "planeOrigin";
