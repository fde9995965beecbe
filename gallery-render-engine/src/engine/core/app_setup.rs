use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

// Crate engine modules
use crate::engine::assets::font_sheet::FontSheet;
use crate::engine::assets::gallery_assets::GalleryAssets;
use crate::engine::assets::gallery_manifest::GalleryManifest;
use crate::engine::camera::look_controls::{LookState, look_controls, release_on_escape};
use crate::engine::camera::rig::{begin_arrival, handle_window_resize, spawn_camera_rig};
use crate::engine::core::app_state::{AppState, transition_to_arriving};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::manifest_loader::{load_manifest_system, start_loading};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::assembler::assemble_scene;
use crate::engine::scene::backdrop::spawn_backdrop_camera;
use crate::engine::scene::labels::attach_pending_labels;
use crate::engine::scene::registry::ProjectRegistry;
use crate::engine::systems::fps_tracking::fps_text_update_system;

// Crate tools and UI modules
use crate::tools::navigation::{NavigationController, handle_gallery_clicks};
use crate::tools::picking::{PointerTracker, track_pointer};
use crate::tools::redirect::fire_pending_redirects;
use crate::tools::tween::advance_camera_tween;
use crate::ui::overlays::{handle_lock_button, spawn_overlays};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers the gallery description and the block font as loadable
        // JSON asset types, with distinct extensions so the loaders never
        // shadow each other.
        .add_plugins(JsonAssetPlugin::<GalleryManifest>::new(&["gallery.json"]))
        .add_plugins(JsonAssetPlugin::<FontSheet>::new(&["font.json"]))
        .init_state::<AppState>();

    app.init_resource::<GalleryAssets>()
        .init_resource::<LoadingProgress>()
        .init_resource::<ProjectRegistry>()
        .init_resource::<NavigationController>()
        .init_resource::<PointerTracker>()
        .init_resource::<LookState>();

    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (load_manifest_system, assemble_scene, transition_to_arriving)
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(Update, begin_arrival.run_if(in_state(AppState::Arriving)));

    // Label geometry trickles in whenever the font resolves, the tween and
    // redirect machinery also drives the arrival fly-in, and resize and
    // page chrome must work from the first frame, so none of these are
    // gated on the running state.
    app.add_systems(
        Update,
        (
            attach_pending_labels,
            advance_camera_tween,
            fire_pending_redirects,
            handle_window_resize,
            handle_lock_button,
            release_on_escape,
            fps_text_update_system,
        ),
    );

    let runtime_systems = ((track_pointer, handle_gallery_clicks).chain(), look_controls);
    app.add_systems(Update, runtime_systems.run_if(in_state(AppState::Running)));

    app
}

/// Startup: cameras and page chrome only. Scene content waits for the
/// manifest.
fn setup(mut commands: Commands) {
    spawn_camera_rig(&mut commands);
    spawn_backdrop_camera(&mut commands);
    spawn_overlays(&mut commands);
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
