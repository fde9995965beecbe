use crate::engine::camera::rig::MainCamera;
use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};
use constants::camera_settings::{
    LOOK_PITCH_LIMIT, LOOK_PITCH_SENSITIVITY, LOOK_YAW_SENSITIVITY,
};

/// Pointer-lock look state. While locked, mouse motion rotates the camera
/// and clicks are not treated as picks.
#[derive(Resource, Default)]
pub struct LookState {
    pub locked: bool,
    pub yaw: f32,
    pub pitch: f32,
}

/// Grab the cursor for look-around mode.
pub fn lock_pointer(window: &mut Window, look: &mut LookState) {
    window.cursor_options.grab_mode = CursorGrabMode::Locked;
    window.cursor_options.visible = false;
    look.locked = true;
}

/// Rotate the camera from mouse motion while the pointer is locked. Only
/// rotation is written here; translation stays with the tween system.
pub fn look_controls(
    mut look: ResMut<LookState>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut cameras: Query<&mut Transform, With<MainCamera>>,
) {
    if !look.locked {
        mouse_motion.clear();
        return;
    }
    let delta: Vec2 = mouse_motion.read().map(|motion| motion.delta).sum();
    if delta == Vec2::ZERO {
        return;
    }
    let Ok(mut transform) = cameras.single_mut() else {
        return;
    };

    look.yaw -= delta.x * LOOK_YAW_SENSITIVITY;
    look.pitch -= delta.y * LOOK_PITCH_SENSITIVITY;
    look.pitch = look.pitch.clamp(-LOOK_PITCH_LIMIT, LOOK_PITCH_LIMIT);
    transform.rotation = Quat::from_euler(EulerRot::YXZ, look.yaw, look.pitch, 0.0);
}

/// Release the cursor on Escape. Browsers drop pointer lock themselves on
/// Escape, so this keeps `LookState` in step with the actual grab and
/// clicks keep resolving as picks afterwards.
pub fn release_on_escape(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut look: ResMut<LookState>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) || !look.locked {
        return;
    }
    let Ok(mut window) = windows.single_mut() else {
        return;
    };
    window.cursor_options.grab_mode = CursorGrabMode::None;
    window.cursor_options.visible = true;
    look.locked = false;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_releases_the_pointer_lock() {
        let mut app = App::new();
        app.init_resource::<LookState>()
            .add_systems(Update, release_on_escape);

        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::Escape);
        app.insert_resource(keys);

        let window = app
            .world_mut()
            .spawn((Window::default(), PrimaryWindow))
            .id();
        {
            let mut window = app.world_mut().get_mut::<Window>(window).unwrap();
            window.cursor_options.grab_mode = CursorGrabMode::Locked;
            window.cursor_options.visible = false;
        }
        app.world_mut().resource_mut::<LookState>().locked = true;

        app.update();

        assert!(!app.world().resource::<LookState>().locked);
        let window = app.world().get::<Window>(window).unwrap();
        assert_eq!(window.cursor_options.grab_mode, CursorGrabMode::None);
        assert!(window.cursor_options.visible);
    }
}
