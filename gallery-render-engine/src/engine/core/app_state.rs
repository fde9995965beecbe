use crate::engine::loading::progress::LoadingProgress;
use bevy::prelude::*;

/// Application lifecycle: manifest-driven assembly, then the arrival
/// fly-in, then the interactive gallery.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Arriving,
    Running,
}

/// Leave `Loading` once the manifest has been parsed and the exhibits are
/// spawned. Textures and labels keep resolving in the background.
pub fn transition_to_arriving(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.scene_assembled {
        info!("→ scene assembled, transitioning to Arriving");
        next_state.set(AppState::Arriving);
    }
}
