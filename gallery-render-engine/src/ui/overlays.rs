use crate::engine::camera::look_controls::{LookState, lock_pointer};
use crate::engine::systems::fps_tracking::FpsText;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::palette::{
    LOCK_BUTTON_COLOR, LOCK_BUTTON_HOVER_COLOR, OVERLAY_TEXT_COLOR,
};

#[derive(Component)]
pub struct HelpOverlay;

#[derive(Component)]
pub struct CreditsOverlay;

#[derive(Component)]
pub struct LockControlsButton;

/// Full-screen overlay root: help text, credits, the lock-controls button,
/// and the fps readout.
pub fn spawn_overlays(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("Click an exhibit to approach it. Click again to visit the site."),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(OVERLAY_TEXT_COLOR),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(12.0),
                    left: Val::Px(12.0),
                    ..default()
                },
                HelpOverlay,
            ));

            parent.spawn((
                Text::new("Built with Bevy"),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(OVERLAY_TEXT_COLOR),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    left: Val::Px(12.0),
                    ..default()
                },
                CreditsOverlay,
            ));

            parent
                .spawn((
                    Button,
                    Node {
                        position_type: PositionType::Absolute,
                        top: Val::Px(12.0),
                        right: Val::Px(12.0),
                        padding: UiRect::axes(Val::Px(10.0), Val::Px(6.0)),
                        ..default()
                    },
                    BackgroundColor(LOCK_BUTTON_COLOR),
                    LockControlsButton,
                ))
                .with_children(|button| {
                    button.spawn((
                        Text::new("Lock Controls"),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(OVERLAY_TEXT_COLOR),
                    ));
                });

            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}

/// Lock-controls button: grab the cursor for look-around mode and hide the
/// help and credits overlays, matching the page chrome behaviour.
pub fn handle_lock_button(
    mut interactions: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<LockControlsButton>),
    >,
    mut look: ResMut<LookState>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
    mut overlays: Query<&mut Visibility, Or<(With<HelpOverlay>, With<CreditsOverlay>)>>,
) {
    for (interaction, mut background) in &mut interactions {
        match interaction {
            Interaction::Pressed => {
                let Ok(mut window) = windows.single_mut() else {
                    continue;
                };
                lock_pointer(&mut window, &mut look);
                for mut visibility in &mut overlays {
                    *visibility = Visibility::Hidden;
                }
            }
            Interaction::Hovered => {
                background.0 = LOCK_BUTTON_HOVER_COLOR;
            }
            Interaction::None => {
                background.0 = LOCK_BUTTON_COLOR;
            }
        }
    }
}
