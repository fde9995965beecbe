use bevy::prelude::*;
use bevy::render::view::RenderLayers;
use constants::palette::BACKDROP_CLEAR_COLOR;
use constants::scene_settings::{BACKDROP_DISTANCE, BACKDROP_SIZE};

/// Render layer reserved for the panorama backdrop.
pub const BACKDROP_LAYER: usize = 1;

#[derive(Component)]
pub struct BackdropQuad;

/// Camera that draws only the backdrop layer, before the main camera. The
/// main camera does not clear colour, so the panorama always sits behind
/// the scene regardless of depth.
pub fn spawn_backdrop_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Camera {
            order: -1,
            clear_color: ClearColorConfig::Custom(BACKDROP_CLEAR_COLOR),
            ..default()
        },
        Transform::IDENTITY,
        RenderLayers::layer(BACKDROP_LAYER),
    ));
}

/// Unlit panorama quad pinned in front of the backdrop camera.
pub fn spawn_backdrop(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    panorama: Handle<Image>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Rectangle::new(BACKDROP_SIZE.x, BACKDROP_SIZE.y))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color_texture: Some(panorama),
            unlit: true,
            ..default()
        })),
        Transform::from_xyz(0.0, 0.0, -BACKDROP_DISTANCE),
        BackdropQuad,
        RenderLayers::layer(BACKDROP_LAYER),
    ));
}
