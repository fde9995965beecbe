use bevy::prelude::*;

// Floor cone, centred below the resting camera position.
pub const FLOOR_RADIUS: f32 = 80.0;
pub const FLOOR_HEIGHT: f32 = 10.0;
pub const FLOOR_Y: f32 = -5.0;
pub const FLOOR_PARALLAX_DEPTH_SCALE: f32 = 0.08;

/// Directional light emplacements, each aimed at the origin.
pub const LIGHT_POSITIONS: [Vec3; 6] = [
    Vec3::new(5.0, 10.0, -30.0),
    Vec3::new(-5.0, 10.0, -30.0),
    Vec3::new(0.0, 10.0, 10.0),
    Vec3::new(10.0, 100.0, 0.0),
    Vec3::new(-100.0, 100.0, 0.0),
    Vec3::new(100.0, 100.0, 0.0),
];

pub const LIGHT_ILLUMINANCE: f32 = 4_000.0;

// Exhibit group geometry, in the group's local space. +x faces the gallery
// centre unless the exhibit is mirrored.
pub const BACKING_PANEL_SIZE: Vec3 = Vec3::new(1.0, 5.0, 5.0);
pub const BACKING_PANEL_OFFSET: Vec3 = Vec3::new(0.5, 0.0, 0.0);
pub const IMAGE_PANEL_SIZE: Vec3 = Vec3::new(0.05, 2.0, 4.0);
pub const IMAGE_PANEL_OFFSET: Vec3 = Vec3::new(-0.1, 0.0, 0.0);
pub const EXHIBIT_TITLE_OFFSET: Vec3 = Vec3::new(0.0, 1.8, -2.0);
pub const EXHIBIT_TITLE_SCALE: f32 = 0.5;

// Pedestal sub-group.
pub const PEDESTAL_BASE_SIZE: Vec3 = Vec3::new(2.0, 6.0, 2.0);
pub const PEDESTAL_BASE_OFFSET: Vec3 = Vec3::new(0.3, -5.5, 0.0);
pub const PEDESTAL_PLAQUE_SIZE: Vec3 = Vec3::new(6.0, 0.25, 2.0);
pub const PEDESTAL_PLAQUE_OFFSET: Vec3 = Vec3::new(-1.0, -2.5, 0.0);
/// Plaque tilt towards the viewing side, radians about local X after the
/// upright quarter turns.
pub const PEDESTAL_PLAQUE_TILT: f32 = -1.0;
pub const CAPTION_SIZE: f32 = 0.2;
pub const CAPTION_OFFSETS: [Vec3; 2] = [
    Vec3::new(-1.0, -2.0, -2.5),
    Vec3::new(-1.25, -2.5, -1.75),
];

// Title text emplacements in world space.
pub const TITLE_NAME_OFFSET: Vec3 = Vec3::new(-28.0, 10.0, -30.0);
pub const TITLE_ROLE_OFFSET: Vec3 = Vec3::new(-24.0, 0.0, -40.0);

/// Extrusion depth of generated label meshes, in cell units.
pub const LABEL_DEPTH: f32 = 0.5;
/// Gap between glyph cells, in cell units.
pub const LABEL_LETTER_SPACING: f32 = 1.0;

/// Backdrop quad distance from its dedicated camera.
pub const BACKDROP_DISTANCE: f32 = 10.0;
pub const BACKDROP_SIZE: Vec2 = Vec2::new(40.0, 20.0);
