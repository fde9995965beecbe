use crate::engine::assets::font_sheet::FontSheet;
use crate::engine::assets::gallery_assets::GalleryAssets;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;
use constants::scene_settings::{LABEL_DEPTH, LABEL_LETTER_SPACING};

/// A label whose mesh has not been generated yet because the font sheet is
/// still loading. The entity already sits at its final transform; geometry
/// attaches whenever the sheet resolves, which may be after first render.
#[derive(Component, Clone)]
pub struct PendingLabel {
    pub text: String,
    /// World height of a glyph, matching the original text "size" knob.
    pub size: f32,
    pub color: Color,
}

/// Horizontal advance per glyph in cell units, letter spacing included.
pub fn advance_cells(sheet: &FontSheet) -> f32 {
    sheet.advance as f32 + LABEL_LETTER_SPACING
}

/// Laid-out width of a string in cell units (no trailing letter spacing).
pub fn layout_width_cells(sheet: &FontSheet, text: &str) -> f32 {
    let count = text.chars().count();
    if count == 0 {
        return 0.0;
    }
    count as f32 * advance_cells(sheet) - LABEL_LETTER_SPACING
}

/// Total filled cells a string resolves to, whitespace excluded.
pub fn filled_cell_count(sheet: &FontSheet, text: &str) -> usize {
    text.chars()
        .filter_map(|c| sheet.glyph(c))
        .map(|glyph| glyph.filled_cells())
        .sum()
}

/// Generate a single mesh for `text`: one cuboid cell per filled grid cell,
/// merged into shared vertex buffers. The glyph column sits on the baseline
/// at the origin and runs towards +x; extrusion runs towards +z.
pub fn build_label_mesh(sheet: &FontSheet, text: &str, size: f32) -> Mesh {
    let cell = size / sheet.cell_rows.max(1) as f32;
    let depth = cell * LABEL_DEPTH;

    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut normals: Vec<[f32; 3]> = Vec::new();
    let mut uvs: Vec<[f32; 2]> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    let mut pen_x = 0.0f32;
    for c in text.chars() {
        if let Some(glyph) = sheet.glyph(c) {
            let rows = glyph.rows.len();
            for (row_index, row) in glyph.rows.iter().enumerate() {
                let y = (rows - 1 - row_index) as f32 * cell;
                for (col_index, mark) in row.chars().enumerate() {
                    if mark != '#' {
                        continue;
                    }
                    let x = pen_x + col_index as f32 * cell;
                    push_cell(
                        &mut positions,
                        &mut normals,
                        &mut uvs,
                        &mut indices,
                        Vec3::new(x, y, 0.0),
                        Vec3::new(x + cell, y + cell, depth),
                    );
                }
            }
        }
        pen_x += advance_cells(sheet) * cell;
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

/// Emit one axis-aligned cuboid cell: 4 vertices and 2 triangles per face.
fn push_cell(
    positions: &mut Vec<[f32; 3]>,
    normals: &mut Vec<[f32; 3]>,
    uvs: &mut Vec<[f32; 2]>,
    indices: &mut Vec<u32>,
    min: Vec3,
    max: Vec3,
) {
    // Each entry: face normal and its four corners, counter-clockwise when
    // seen from outside.
    let faces: [([f32; 3], [Vec3; 4]); 6] = [
        (
            [0.0, 0.0, 1.0],
            [
                Vec3::new(min.x, min.y, max.z),
                Vec3::new(max.x, min.y, max.z),
                Vec3::new(max.x, max.y, max.z),
                Vec3::new(min.x, max.y, max.z),
            ],
        ),
        (
            [0.0, 0.0, -1.0],
            [
                Vec3::new(max.x, min.y, min.z),
                Vec3::new(min.x, min.y, min.z),
                Vec3::new(min.x, max.y, min.z),
                Vec3::new(max.x, max.y, min.z),
            ],
        ),
        (
            [1.0, 0.0, 0.0],
            [
                Vec3::new(max.x, min.y, max.z),
                Vec3::new(max.x, min.y, min.z),
                Vec3::new(max.x, max.y, min.z),
                Vec3::new(max.x, max.y, max.z),
            ],
        ),
        (
            [-1.0, 0.0, 0.0],
            [
                Vec3::new(min.x, min.y, min.z),
                Vec3::new(min.x, min.y, max.z),
                Vec3::new(min.x, max.y, max.z),
                Vec3::new(min.x, max.y, min.z),
            ],
        ),
        (
            [0.0, 1.0, 0.0],
            [
                Vec3::new(min.x, max.y, max.z),
                Vec3::new(max.x, max.y, max.z),
                Vec3::new(max.x, max.y, min.z),
                Vec3::new(min.x, max.y, min.z),
            ],
        ),
        (
            [0.0, -1.0, 0.0],
            [
                Vec3::new(min.x, min.y, min.z),
                Vec3::new(max.x, min.y, min.z),
                Vec3::new(max.x, min.y, max.z),
                Vec3::new(min.x, min.y, max.z),
            ],
        ),
    ];

    for (normal, corners) in faces {
        let base = positions.len() as u32;
        for corner in corners {
            positions.push([corner.x, corner.y, corner.z]);
            normals.push(normal);
        }
        uvs.extend_from_slice(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

/// Attach meshes to pending labels once the font sheet has loaded. If the
/// sheet never loads the labels simply stay invisible.
pub fn attach_pending_labels(
    mut commands: Commands,
    fonts: Res<Assets<FontSheet>>,
    assets: Res<GalleryAssets>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    pending: Query<(Entity, &PendingLabel)>,
) {
    let Some(sheet) = fonts.get(&assets.font) else {
        return;
    };

    for (entity, label) in &pending {
        let mesh = build_label_mesh(sheet, &label.text, label.size);
        commands
            .entity(entity)
            .insert((
                Mesh3d(meshes.add(mesh)),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: label.color,
                    perceptual_roughness: 0.6,
                    ..default()
                })),
            ))
            .remove::<PendingLabel>();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::font_sheet::Glyph;
    use std::collections::HashMap;

    fn sheet() -> FontSheet {
        let mut glyphs = HashMap::new();
        glyphs.insert(
            "I".to_string(),
            Glyph {
                rows: vec!["#".into(), "#".into(), "#".into()],
            },
        );
        glyphs.insert(
            "O".to_string(),
            Glyph {
                rows: vec!["###".into(), "#.#".into(), "###".into()],
            },
        );
        FontSheet {
            cell_rows: 3,
            advance: 4,
            fallback: "I".to_string(),
            glyphs,
        }
    }

    #[test]
    fn layout_width_accumulates_advance() {
        let sheet = sheet();
        // Two glyphs: 2 * (4 + spacing) - spacing cells.
        let expected = 2.0 * advance_cells(&sheet) - constants::scene_settings::LABEL_LETTER_SPACING;
        assert_eq!(layout_width_cells(&sheet, "IO"), expected);
        assert_eq!(layout_width_cells(&sheet, ""), 0.0);
    }

    #[test]
    fn whitespace_advances_without_cells() {
        let sheet = sheet();
        assert_eq!(filled_cell_count(&sheet, "I I"), 6);
        let mesh = build_label_mesh(&sheet, " ", 3.0);
        assert_eq!(mesh.count_vertices(), 0);
    }

    #[test]
    fn mesh_emits_one_cuboid_per_filled_cell() {
        let sheet = sheet();
        let mesh = build_label_mesh(&sheet, "O", 3.0);
        // 8 filled cells, 24 vertices each.
        assert_eq!(mesh.count_vertices(), 8 * 24);
    }

    #[test]
    fn unknown_glyphs_fall_back() {
        let sheet = sheet();
        // '%' is not in the sheet; it renders as the fallback bar glyph.
        assert_eq!(filled_cell_count(&sheet, "%"), 3);
    }
}
