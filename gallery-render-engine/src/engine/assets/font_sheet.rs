use bevy::prelude::*;
use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// One glyph as a fixed-height grid of cells. Rows run top to bottom and use
/// `#` for filled cells, anything else for empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Glyph {
    pub rows: Vec<String>,
}

impl Glyph {
    /// Number of filled cells in this glyph.
    pub fn filled_cells(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.chars().filter(|c| *c == '#').count())
            .sum()
    }
}

/// Block-glyph font description loaded from JSON. Label meshes are generated
/// from these grids; glyph height in cells is uniform across the sheet.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath)]
pub struct FontSheet {
    /// Grid height of every glyph.
    pub cell_rows: u32,
    /// Horizontal advance in cells, excluding letter spacing.
    pub advance: u32,
    /// Glyph drawn for characters missing from the sheet.
    pub fallback: String,
    pub glyphs: HashMap<String, Glyph>,
}

impl FontSheet {
    /// Look up a glyph, trying the exact character first and then its
    /// uppercase form, falling back to the replacement glyph. Returns `None`
    /// only for whitespace, which advances without geometry.
    pub fn glyph(&self, c: char) -> Option<&Glyph> {
        if c.is_whitespace() {
            return None;
        }
        let exact = c.to_string();
        if let Some(glyph) = self.glyphs.get(&exact) {
            return Some(glyph);
        }
        let upper: String = c.to_uppercase().collect();
        if let Some(glyph) = self.glyphs.get(&upper) {
            return Some(glyph);
        }
        self.glyphs.get(&self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet() -> FontSheet {
        let mut glyphs = HashMap::new();
        glyphs.insert(
            "A".to_string(),
            Glyph {
                rows: vec![".#.".into(), "#.#".into(), "###".into()],
            },
        );
        glyphs.insert(
            "?".to_string(),
            Glyph {
                rows: vec!["##".into(), ".#".into(), ".#".into()],
            },
        );
        FontSheet {
            cell_rows: 3,
            advance: 4,
            fallback: "?".to_string(),
            glyphs,
        }
    }

    #[test]
    fn lowercase_folds_to_uppercase_glyph() {
        let sheet = sheet();
        assert_eq!(sheet.glyph('a').unwrap().filled_cells(), 6);
    }

    #[test]
    fn unknown_character_uses_fallback() {
        let sheet = sheet();
        assert_eq!(sheet.glyph('%').unwrap().filled_cells(), 4);
    }

    #[test]
    fn whitespace_has_no_glyph() {
        assert!(sheet().glyph(' ').is_none());
    }
}
