use bevy::prelude::*;

/// Vertical field of view in degrees. The gallery uses a deliberately wide
/// lens so neighbouring exhibits stay in frame while focused on one.
pub const CAMERA_FOV_DEGREES: f32 = 100.0;

pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 10_000.0;

/// Resting camera position at the centre of the gallery.
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 5.0, 0.0);

/// Where the arrival fly-in begins once loading completes.
pub const ARRIVAL_APPROACH: Vec3 = Vec3::new(0.0, 5.0, -50.0);

pub const FOG_START: f32 = 1.0;
pub const FOG_END: f32 = 100.0;

/// Pointer-lock look sensitivity, radians per pixel of mouse motion.
pub const LOOK_YAW_SENSITIVITY: f32 = 0.0035;
pub const LOOK_PITCH_SENSITIVITY: f32 = 0.0030;
pub const LOOK_PITCH_LIMIT: f32 = 1.55;
