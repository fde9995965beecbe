/// Lateral distance between an exhibit and the camera position from which it
/// is considered focused. Exhibits on the +x side are viewed from 5 units in
/// the -x direction and vice versa.
pub const VIEWING_OFFSET: f32 = 5.0;

/// Duration of every camera position tween.
pub const TWEEN_DURATION_SECS: f32 = 1.0;

/// Delay between a confirmed exhibit click and the page redirect.
pub const REDIRECT_DELAY_SECS: f32 = 0.75;

/// Vertical nudge played while a confirmed redirect is pending.
pub const CONFIRM_BUMP_HEIGHT: f32 = 1.0;

/// Tween completion snaps the camera to its exact destination, so viewing
/// pose comparison only needs to absorb float noise.
pub const POSE_EPSILON: f32 = 1e-3;
