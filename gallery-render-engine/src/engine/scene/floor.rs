use crate::engine::assets::gallery_assets::GalleryAssets;
use crate::engine::scene::exhibits::PickVolume;
use bevy::prelude::*;
use constants::scene_settings::{
    FLOOR_HEIGHT, FLOOR_PARALLAX_DEPTH_SCALE, FLOOR_RADIUS, FLOOR_Y,
};

#[derive(Component)]
pub struct Floor;

/// Shallow cone floor under the whole gallery. Pickable but untagged, so
/// clicking it steers the camera back to the origin.
pub fn spawn_floor(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    assets: &GalleryAssets,
) {
    let material = materials.add(StandardMaterial {
        base_color_texture: Some(assets.floor_base_color.clone()),
        normal_map_texture: Some(assets.floor_normal.clone()),
        metallic_roughness_texture: Some(assets.floor_roughness.clone()),
        depth_map: Some(assets.floor_depth.clone()),
        parallax_depth_scale: FLOOR_PARALLAX_DEPTH_SCALE,
        perceptual_roughness: 1.0,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(Cone::new(FLOOR_RADIUS, FLOOR_HEIGHT))),
        MeshMaterial3d(material),
        Transform::from_xyz(0.0, FLOOR_Y, 0.0),
        Floor,
        PickVolume::Cone {
            radius: FLOOR_RADIUS,
            height: FLOOR_HEIGHT,
        },
    ));
}
