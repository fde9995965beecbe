use bevy::prelude::*;

/// Accent colour used for every 3D text label (0x9042f5).
pub const LABEL_COLOR: Color = Color::srgb(0.565, 0.259, 0.961);

/// Caption lines on the pedestal plaques are plain white.
pub const CAPTION_COLOR: Color = Color::WHITE;

pub const PEDESTAL_BASE_COLOR: Color = Color::srgb(0.933, 0.933, 0.933);
pub const PEDESTAL_PLAQUE_COLOR: Color = Color::srgb(0.267, 0.267, 0.267);

/// Fog colour matching the night-sky backdrop (0x222222).
pub const FOG_COLOR: Color = Color::srgb(0.133, 0.133, 0.133);

pub const BACKDROP_CLEAR_COLOR: Color = Color::BLACK;

pub const OVERLAY_TEXT_COLOR: Color = Color::srgb(0.85, 0.85, 0.85);
pub const LOCK_BUTTON_COLOR: Color = Color::srgb(0.18, 0.18, 0.22);
pub const LOCK_BUTTON_HOVER_COLOR: Color = Color::srgb(0.28, 0.28, 0.34);
