use crate::engine::assets::font_sheet::FontSheet;
use crate::engine::assets::gallery_manifest::GalleryManifest;
use bevy::prelude::*;

/// Handles for everything the gallery loads through the asset server.
/// Failed loads simply never resolve; dependent visuals degrade and the
/// rest of the scene carries on.
#[derive(Resource, Default)]
pub struct GalleryAssets {
    pub manifest: Option<Handle<GalleryManifest>>,
    pub font: Handle<FontSheet>,
    pub backdrop_texture: Handle<Image>,
    pub wood_texture: Handle<Image>,
    pub sand_texture: Handle<Image>,
    pub floor_base_color: Handle<Image>,
    pub floor_normal: Handle<Image>,
    pub floor_roughness: Handle<Image>,
    pub floor_depth: Handle<Image>,
}
