use crate::engine::assets::gallery_assets::GalleryAssets;
use crate::engine::assets::gallery_manifest::GalleryManifest;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::backdrop::spawn_backdrop;
use crate::engine::scene::exhibits::spawn_exhibit;
use crate::engine::scene::floor::spawn_floor;
use crate::engine::scene::labels::PendingLabel;
use crate::engine::scene::lighting::spawn_gallery_lighting;
use crate::engine::scene::registry::ProjectRegistry;
use bevy::prelude::*;
use constants::palette::LABEL_COLOR;
use constants::scene_settings::{TITLE_NAME_OFFSET, TITLE_ROLE_OFFSET};

/// Build the static scene once the manifest resource exists: backdrop,
/// floor, lights, title labels, then one exhibit group per project, in that
/// order. Runs once; label geometry still trickles in afterwards.
pub fn assemble_scene(
    mut commands: Commands,
    mut loading_progress: ResMut<LoadingProgress>,
    manifest: Option<Res<GalleryManifest>>,
    assets: Res<GalleryAssets>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut registry: ResMut<ProjectRegistry>,
    asset_server: Res<AssetServer>,
) {
    if loading_progress.scene_assembled {
        return;
    }
    let Some(manifest) = manifest else {
        return;
    };

    spawn_backdrop(
        &mut commands,
        &mut meshes,
        &mut materials,
        assets.backdrop_texture.clone(),
    );
    spawn_floor(&mut commands, &mut meshes, &mut materials, &assets);
    spawn_gallery_lighting(&mut commands);
    spawn_title_labels(&mut commands, &manifest);

    for project in &manifest.projects {
        let image = project.image.as_ref().map(|path| asset_server.load(path));
        spawn_exhibit(
            &mut commands,
            &mut meshes,
            &mut materials,
            &mut registry,
            project,
            assets.wood_texture.clone(),
            assets.sand_texture.clone(),
            image,
        );
    }

    loading_progress.scene_assembled = true;
    info!("scene assembled: {} exhibits registered", registry.len());
}

/// Name and role lines floating behind the gallery entrance.
fn spawn_title_labels(commands: &mut Commands, manifest: &GalleryManifest) {
    commands.spawn((
        Transform::from_translation(TITLE_NAME_OFFSET),
        Visibility::default(),
        PendingLabel {
            text: manifest.title.name.clone(),
            size: manifest.title.name_size,
            color: LABEL_COLOR,
        },
    ));
    commands.spawn((
        Transform::from_translation(TITLE_ROLE_OFFSET),
        Visibility::default(),
        PendingLabel {
            text: manifest.title.role.clone(),
            size: manifest.title.role_size,
            color: LABEL_COLOR,
        },
    ));
}
