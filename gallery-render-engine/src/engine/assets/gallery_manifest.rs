use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// World position as stored in the manifest JSON.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PositionData {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl PositionData {
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

/// One showcased project: exhibit panel content plus its external site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDefinition {
    pub name: String,
    pub title_size: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub url: String,
    pub captions: Vec<String>,
    pub position: PositionData,
    /// Mirrored exhibits are rotated half a turn to face the other aisle.
    #[serde(default)]
    pub mirrored: bool,
}

/// Gallery title block rendered as 3D text near the entrance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleData {
    pub name: String,
    pub name_size: f32,
    pub role: String,
    pub role_size: f32,
}

/// Texture paths for the floor material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorTextureFiles {
    pub base_color: String,
    pub normal: String,
    pub roughness: String,
    pub depth: String,
}

/// Tiled surface textures shared by exhibit panels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceTextureFiles {
    pub sand: String,
    pub wood: String,
}

/// Complete gallery manifest as a Bevy asset. Mirrors the JSON structure
/// exactly; inserted as a resource once parsed.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath, Resource)]
pub struct GalleryManifest {
    pub title: TitleData,
    pub backdrop: String,
    pub font: String,
    pub floor: FloorTextureFiles,
    pub surfaces: SurfaceTextureFiles,
    pub projects: Vec<ProjectDefinition>,
}

impl GalleryManifest {
    pub fn project_count(&self) -> usize {
        self.projects.len()
    }
}
