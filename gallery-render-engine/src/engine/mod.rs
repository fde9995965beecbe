//! Gallery engine: scene construction, camera plumbing, and asset loading
//! for the interactive 3D portfolio.

/// Application setup, state machine, and window configuration.
pub mod core;

/// JSON asset schemas and the shared handle resource.
pub mod assets;

/// Manifest/font loading systems and loading progress tracking.
pub mod loading;

/// Static scene content: backdrop, floor, lighting, labels, exhibits.
pub mod scene;

/// Camera rig, arrival fly-in, resize handling, pointer-lock controls.
pub mod camera;

/// Miscellaneous runtime systems (fps overlay).
pub mod systems;
