use bevy::prelude::*;
use constants::scene_settings::{LIGHT_ILLUMINANCE, LIGHT_POSITIONS};

/// Six white directional lights matching the gallery's original
/// emplacements, each aimed at the origin. No shadows; the floor's
/// normal/depth maps carry the surface detail.
pub fn spawn_gallery_lighting(commands: &mut Commands) {
    for position in LIGHT_POSITIONS {
        commands.spawn((
            DirectionalLight {
                illuminance: LIGHT_ILLUMINANCE,
                shadows_enabled: false,
                ..default()
            },
            Transform::from_translation(position).looking_at(Vec3::ZERO, Vec3::Y),
        ));
    }
}
