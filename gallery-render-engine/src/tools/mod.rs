//! Pointer interaction: picking, navigation, camera tweens, redirects.

/// Pointer tracking and ray/volume intersection.
pub mod picking;

/// Click resolution and the navigation controller resource.
pub mod navigation;

/// Time-interpolated camera position animation.
pub mod tween;

/// Delayed, cancellable page redirects.
pub mod redirect;
