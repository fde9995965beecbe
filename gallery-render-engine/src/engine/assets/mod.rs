/// Gallery manifest: the JSON description of titles, surfaces, and projects.
pub mod gallery_manifest;

/// Block-glyph font sheet asset used to generate 3D label meshes.
pub mod font_sheet;

/// Shared resource holding handles to everything the gallery loads.
pub mod gallery_assets;
