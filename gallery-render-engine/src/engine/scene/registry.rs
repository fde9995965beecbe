use bevy::prelude::*;

/// One registered exhibit: display name, its root scene entity, and the
/// external site a confirmed click navigates to. Immutable after assembly.
#[derive(Debug, Clone)]
pub struct Exhibit {
    pub display_name: String,
    pub root: Entity,
    pub target_url: String,
}

/// Ordered list of every exhibit in the gallery, populated once during
/// scene assembly. Contains exactly one entry per exhibit root spawned.
#[derive(Resource, Default)]
pub struct ProjectRegistry {
    entries: Vec<Exhibit>,
}

impl ProjectRegistry {
    pub fn register(&mut self, exhibit: Exhibit) {
        debug_assert!(
            self.by_root(exhibit.root).is_none(),
            "exhibit root registered twice"
        );
        self.entries.push(exhibit);
    }

    pub fn by_root(&self, root: Entity) -> Option<&Exhibit> {
        self.entries.iter().find(|exhibit| exhibit.root == root)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Exhibit> {
        self.entries.iter()
    }
}
