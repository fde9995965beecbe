//! Static scene content, assembled once the gallery manifest resolves.

/// Panorama backdrop layer rendered behind the main scene every frame.
pub mod backdrop;

/// Cone floor with the full PBR texture set.
pub mod floor;

/// Directional light emplacements.
pub mod lighting;

/// Block-font label mesh generation and late attachment.
pub mod labels;

/// Exhibit group construction and pickable scene node tags.
pub mod exhibits;

/// Registry of exhibits and their target URLs.
pub mod registry;

/// Top-level assembly driven by the loaded manifest.
pub mod assembler;
