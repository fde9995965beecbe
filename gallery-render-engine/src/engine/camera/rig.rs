use crate::engine::core::app_state::AppState;
use crate::engine::loading::progress::LoadingProgress;
use crate::tools::navigation::NavigationController;
use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;
use bevy::window::WindowResized;
use constants::camera_settings::{
    ARRIVAL_APPROACH, CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_START, FOG_END, FOG_START,
};
use constants::palette::FOG_COLOR;

/// Marker for the one camera the navigation controller steers.
#[derive(Component)]
pub struct MainCamera;

/// Spawn the gallery camera: wide lens, long draw distance, linear fog
/// matching the backdrop, rendering after the backdrop camera without
/// clearing colour.
pub fn spawn_camera_rig(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Camera {
            order: 0,
            clear_color: ClearColorConfig::None,
            ..default()
        },
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        DistanceFog {
            color: FOG_COLOR,
            falloff: FogFalloff::Linear {
                start: FOG_START,
                end: FOG_END,
            },
            ..default()
        },
        Transform::from_translation(CAMERA_START),
        MainCamera,
    ));
}

/// One-shot arrival fly-in: snap the camera to the approach position and
/// tween it to the resting pose, then hand over to the running state.
pub fn begin_arrival(
    mut loading_progress: ResMut<LoadingProgress>,
    mut nav: ResMut<NavigationController>,
    mut next_state: ResMut<NextState<AppState>>,
    mut cameras: Query<&mut Transform, With<MainCamera>>,
) {
    if loading_progress.arrival_started {
        return;
    }
    let Ok(mut transform) = cameras.single_mut() else {
        return;
    };

    transform.translation = ARRIVAL_APPROACH;
    nav.start_tween(
        ARRIVAL_APPROACH,
        Vec3::new(0.0, ARRIVAL_APPROACH.y, 0.0),
    );
    loading_progress.arrival_started = true;
    info!("→ arrival fly-in started, transitioning to Running");
    next_state.set(AppState::Running);
}

/// Keep the projection aspect in step with the window.
pub fn handle_window_resize(
    mut resize_events: EventReader<WindowResized>,
    mut projections: Query<&mut Projection, With<MainCamera>>,
) {
    let Some(resized) = resize_events.read().last() else {
        return;
    };
    if resized.height <= 0.0 {
        return;
    }
    for mut projection in &mut projections {
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.aspect_ratio = resized.width / resized.height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_updates_aspect_ratio() {
        let mut app = App::new();
        app.add_event::<WindowResized>()
            .add_systems(Update, handle_window_resize);
        let camera = app
            .world_mut()
            .spawn((
                Projection::Perspective(PerspectiveProjection::default()),
                MainCamera,
            ))
            .id();

        let window = app.world_mut().spawn_empty().id();
        app.world_mut().send_event(WindowResized {
            window,
            width: 1920.0,
            height: 1080.0,
        });
        app.update();

        let projection = app.world().get::<Projection>(camera).unwrap();
        let Projection::Perspective(perspective) = projection else {
            panic!("projection changed kind");
        };
        assert!((perspective.aspect_ratio - 1920.0 / 1080.0).abs() < 1e-6);
    }
}
