/// Main camera rig: projection, fog, arrival fly-in, resize handling.
pub mod rig;

/// Pointer-lock look controls toggled by the UI lock button.
pub mod look_controls;
