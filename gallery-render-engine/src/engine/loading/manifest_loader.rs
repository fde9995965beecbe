use crate::engine::assets::gallery_assets::GalleryAssets;
use crate::engine::assets::gallery_manifest::GalleryManifest;
use crate::engine::loading::progress::LoadingProgress;
use bevy::prelude::*;

const MANIFEST_PATH: &str = "portfolio.gallery.json";

/// Kick off the manifest load at startup. Everything else hangs off it.
pub fn start_loading(mut assets: ResMut<GalleryAssets>, asset_server: Res<AssetServer>) {
    assets.manifest = Some(asset_server.load(MANIFEST_PATH));
}

/// Once the manifest JSON is parsed, insert it as a resource and request
/// every handle it references. Texture or font files that fail to load
/// never resolve and the scene degrades visually, nothing more.
pub fn load_manifest_system(
    mut loading_progress: ResMut<LoadingProgress>,
    mut assets: ResMut<GalleryAssets>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<GalleryManifest>>,
) {
    if loading_progress.manifest_loaded {
        return;
    }

    let Some(ref handle) = assets.manifest else {
        return;
    };
    let Some(manifest) = manifests.get(handle) else {
        return;
    };

    info!("gallery manifest loaded: {} projects", manifest.project_count());

    assets.font = asset_server.load(&manifest.font);
    assets.backdrop_texture = asset_server.load(&manifest.backdrop);
    assets.wood_texture = asset_server.load(&manifest.surfaces.wood);
    assets.sand_texture = asset_server.load(&manifest.surfaces.sand);
    assets.floor_base_color = asset_server.load(&manifest.floor.base_color);
    assets.floor_normal = asset_server.load(&manifest.floor.normal);
    assets.floor_roughness = asset_server.load(&manifest.floor.roughness);
    assets.floor_depth = asset_server.load(&manifest.floor.depth);

    commands.insert_resource(manifest.clone());
    loading_progress.manifest_loaded = true;
}
